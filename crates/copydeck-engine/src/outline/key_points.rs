//! The "Key Points" section that follows an outline table.
//!
//! ```text
//! ### Key Points
//!
//! **Email 1: Welcome to the family**
//! - Thank them for joining
//! - Set expectations for the series
//! ```
//!
//! Subsections are matched to steps by sequence number first, then by title.
//! A step with no subsection gets two points synthesized from its purpose and
//! call to action.

use std::sync::OnceLock;

use regex::Regex;

use super::FlowOutlineStep;

/// Bullets under one subsection heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPointSection {
    /// Step number referenced by the heading, if any.
    pub sequence: Option<u32>,
    /// Lowercased heading text with markdown emphasis removed.
    pub heading: String,
    pub points: Vec<String>,
}

struct Patterns {
    bullet: Regex,
    email_number: Regex,
    leading_number: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        bullet: Regex::new(r"^\s*[-•*]\s+(.+)$").expect("Invalid key point bullet regex"),
        email_number: Regex::new(r"(?i)\bemail\s*#?\s*(\d+)").expect("Invalid email number regex"),
        leading_number: Regex::new(r"^[#*\s]*(\d+)\s*[.:)\-]").expect("Invalid step number regex"),
    })
}

fn heading_sequence(line: &str) -> Option<u32> {
    let p = patterns();
    p.email_number
        .captures(line)
        .or_else(|| p.leading_number.captures(line))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Text of a `-`, `•` or `*` bullet line.
pub(crate) fn bullet_item(line: &str) -> Option<&str> {
    patterns()
        .bullet
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Collects subsections from the lines after the table.
///
/// Nothing is collected unless a line mentions "Key Points". A heading is
/// either a plain line or a bullet that names a step (`- **Email 1: Hi**`);
/// bullets nested deeper than such a heading bullet are its points.
pub fn collect(lines: &[&str]) -> Vec<KeyPointSection> {
    let Some(start) = lines
        .iter()
        .position(|line| line.to_lowercase().contains("key points"))
    else {
        return Vec::new();
    };

    let mut sections: Vec<KeyPointSection> = Vec::new();
    // Indent of the bullet that opened the current section, if a bullet did.
    let mut heading_indent: Option<usize> = None;

    for line in &lines[start + 1..] {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(item) = bullet_item(line) {
            let indent = indent_of(line);
            let opens_section = heading_sequence(item).is_some()
                && (sections.is_empty() || heading_indent.is_some_and(|h| indent <= h));
            if opens_section {
                sections.push(section_from_heading(item));
                heading_indent = Some(indent);
            } else if let Some(current) = sections.last_mut() {
                current.points.push(item.to_string());
            }
            continue;
        }

        sections.push(section_from_heading(line));
        heading_indent = None;
    }

    sections
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn section_from_heading(line: &str) -> KeyPointSection {
    KeyPointSection {
        sequence: heading_sequence(line),
        heading: line
            .trim()
            .trim_matches(|c| c == '*' || c == '#')
            .trim()
            .to_lowercase(),
        points: Vec::new(),
    }
}

/// Key points for `step`: its subsection's bullets, or synthesized defaults.
pub fn for_step(step: &FlowOutlineStep, sections: &[KeyPointSection]) -> Vec<String> {
    let title = step.title.to_lowercase();
    let found = sections
        .iter()
        .filter(|s| !s.points.is_empty())
        .find(|s| s.sequence == Some(step.sequence))
        .or_else(|| {
            sections
                .iter()
                .filter(|s| !s.points.is_empty())
                .find(|s| s.sequence.is_none() && s.heading.contains(&title))
        });

    match found {
        Some(section) => section.points.clone(),
        None => default_points(step),
    }
}

/// Fallback points so a parsed step never has an empty list.
pub fn default_points(step: &FlowOutlineStep) -> Vec<String> {
    let mut points = Vec::with_capacity(2);
    if !step.purpose.is_empty() {
        points.push(step.purpose.clone());
    }
    if !step.call_to_action.is_empty() {
        points.push(format!("Call to action: {}", step.call_to_action));
    }
    if points.is_empty() {
        points.push(step.title.clone());
    }
    points
}
