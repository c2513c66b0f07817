//! Pass 2: classify the lines of one section.
//!
//! Every non-blank line ends up in exactly one of fields, bullets or
//! unlabeled content. Nothing is dropped.

use std::sync::OnceLock;

use regex::Regex;

use super::EmailField;

/// Local facts about a single line, decided without surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    /// `- item`, `• item` or `* item`; holds the item text.
    Bullet(&'a str),
    /// `Label: value`; only the first colon ends the label.
    Field { label: &'a str, value: &'a str },
    /// Anything else, trimmed. `indented` records leading whitespace.
    Text { text: &'a str, indented: bool },
}

fn bullet_regex() -> &'static Regex {
    static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
    BULLET_REGEX.get_or_init(|| Regex::new(r"^[-•*]\s+(.+)$").expect("Invalid bullet regex"))
}

fn field_regex() -> &'static Regex {
    static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
    FIELD_REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z][A-Za-z0-9 _-]*):\s*(.*)$").expect("Invalid field regex")
    })
}

/// Classifies one line. Bullets are checked before fields so that
/// `- Note: something` stays a bullet.
pub fn classify_line(line: &str) -> LineClass<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if let Some(item) = bullet_regex().captures(trimmed).and_then(|c| c.get(1)) {
        return LineClass::Bullet(item.as_str().trim());
    }

    if let Some(caps) = field_regex().captures(trimmed)
        && let (Some(label), Some(value)) = (caps.get(1), caps.get(2))
    {
        return LineClass::Field {
            label: label.as_str().trim(),
            value: value.as_str().trim(),
        };
    }

    LineClass::Text {
        text: trimmed,
        indented: line.starts_with([' ', '\t']),
    }
}

/// Classified content of one section.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionContent {
    pub fields: Vec<EmailField>,
    pub bullets: Vec<String>,
    pub unlabeled: Vec<String>,
}

/// Classifies every line of a section body.
///
/// An indented plain line directly after a field with an empty value (or
/// after another such continuation line) is joined onto that field's value
/// with a space. Any other plain line is unlabeled content.
pub fn classify_lines(body: &str) -> SectionContent {
    let mut fields: Vec<(&str, String)> = Vec::new();
    let mut bullets = Vec::new();
    let mut unlabeled = Vec::new();
    let mut continuing = false;

    for line in body.lines() {
        match classify_line(line) {
            LineClass::Blank => continuing = false,
            LineClass::Bullet(item) => {
                bullets.push(item.to_string());
                continuing = false;
            }
            LineClass::Field { label, value } => {
                continuing = value.is_empty();
                fields.push((label, value.to_string()));
            }
            LineClass::Text { text, indented } => {
                match fields.last_mut() {
                    Some((_, value)) if continuing && indented => {
                        if !value.is_empty() {
                            value.push(' ');
                        }
                        value.push_str(text);
                    }
                    _ => {
                        unlabeled.push(text.to_string());
                        continuing = false;
                    }
                }
            }
        }
    }

    SectionContent {
        fields: fields
            .into_iter()
            .map(|(label, value)| EmailField::new(label, value))
            .collect(),
        bullets,
        unlabeled,
    }
}
