//! Heading-per-step outline grammar used before the table format.
//!
//! ```text
//! **Flow Goal:** Turn first-time buyers into repeat buyers
//! **Target Audience:** Customers with one order
//!
//! ### Email 1: Thanks for your order
//! **Email Type:** Letter
//! **Timing:** Immediately
//! **Purpose:** Say thanks
//! **Key Points:**
//! - Personal note from the founder
//! **Call-to-Action:** Leave a review
//! ```
//!
//! A step is emitted only when all five fields are present. Incomplete steps
//! are skipped without affecting their siblings.

use std::sync::OnceLock;

use regex::Regex;

use super::key_points::bullet_item;
use super::metadata::{self, labelled_line};
use super::{EmailKind, FlowOutline, FlowOutlineStep, clean};

struct Patterns {
    heading: Regex,
    email_type: Regex,
    timing: Regex,
    purpose: Regex,
    key_points: Regex,
    call_to_action: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        heading: Regex::new(r"(?m)^###[ \t]*Email[ \t]+(\d+)[ \t]*:[ \t]*(.+?)[ \t]*$")
            .expect("Invalid legacy heading regex"),
        email_type: labelled_line(r"Email[ \t]+Type"),
        timing: labelled_line("Timing"),
        purpose: labelled_line("Purpose"),
        key_points: labelled_line(r"Key[ \t]+Points"),
        call_to_action: labelled_line(r"(?:Call[- \t]to[- \t]Action|CTA)"),
    })
}

fn required(re: &Regex, block: &str) -> Option<String> {
    let value = clean(re.captures(block)?.get(1)?.as_str());
    (!value.is_empty()).then(|| value.to_string())
}

fn key_points(block: &str) -> Option<Vec<String>> {
    let marker = patterns().key_points.find(block)?;
    let points: Vec<String> = block[marker.end()..]
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map_while(bullet_item)
        .map(str::to_string)
        .collect();
    (!points.is_empty()).then_some(points)
}

fn parse_step(sequence: u32, title: &str, block: &str) -> Option<FlowOutlineStep> {
    let p = patterns();
    Some(FlowOutlineStep {
        sequence,
        title: title.to_string(),
        email_kind: EmailKind::from_cell(&required(&p.email_type, block)?),
        timing: required(&p.timing, block)?,
        purpose: required(&p.purpose, block)?,
        key_points: key_points(block)?,
        call_to_action: required(&p.call_to_action, block)?,
    })
}

/// Parses the heading-per-step grammar, or `None` if it yields no complete
/// step.
pub fn parse_legacy_outline(text: &str, flow_kind: &str) -> Option<FlowOutline> {
    let meta = metadata::extract(text);
    let (Some(goal), Some(target_audience)) = (meta.goal, meta.target_audience) else {
        log::trace!("legacy outline needs goal and target audience lines");
        return None;
    };

    let headings: Vec<(usize, usize, u32, &str)> = patterns()
        .heading
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let sequence = caps.get(1)?.as_str().parse().ok()?;
            let title = clean(caps.get(2)?.as_str());
            Some((whole.start(), whole.end(), sequence, title))
        })
        .collect();

    let mut steps = Vec::new();
    for (i, &(_, body_start, sequence, title)) in headings.iter().enumerate() {
        let body_end = headings.get(i + 1).map_or(text.len(), |next| next.0);
        match parse_step(sequence, title, &text[body_start..body_end]) {
            Some(step) => steps.push(step),
            None => log::debug!("skipping incomplete legacy step {sequence}: {title:?}"),
        }
    }

    if steps.is_empty() {
        return None;
    }
    steps.sort_by_key(|step| step.sequence);

    Some(FlowOutline {
        flow_kind: flow_kind.to_string(),
        flow_name: meta.flow_name,
        goal,
        target_audience,
        steps,
    })
}
