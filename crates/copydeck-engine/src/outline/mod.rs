//! Table-outline parser for proposed multi-email flows.
//!
//! The current grammar is a markdown pipe table with one row per email,
//! followed by an optional "Key Points" section. Older drafts use one
//! `### Email N: Title` heading per step instead; that grammar is only tried
//! when no table is present.
//!
//! An outline without a single parsable step is not an outline: the parser
//! returns `None` and the caller shows the text as-is.

pub mod key_points;
pub mod legacy;
pub mod metadata;
pub mod render;
pub mod table;

use serde::{Deserialize, Serialize};

/// Whether an email is a designed, image-led layout or a plain letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailKind {
    #[default]
    Design,
    Letter,
}

impl EmailKind {
    /// Reads a "Type" cell. Anything unrecognized is a design email.
    pub fn from_cell(cell: &str) -> Self {
        let cell = cell.to_lowercase();
        if cell.contains("letter") {
            EmailKind::Letter
        } else {
            EmailKind::Design
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EmailKind::Design => "design",
            EmailKind::Letter => "letter",
        }
    }
}

/// One email in a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowOutlineStep {
    /// 1-based position; also the sort key.
    pub sequence: u32,
    pub title: String,
    pub timing: String,
    pub purpose: String,
    pub email_kind: EmailKind,
    pub call_to_action: String,
    /// Never empty for a returned step.
    pub key_points: Vec<String>,
}

/// A proposed flow awaiting approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowOutline {
    pub flow_kind: String,
    pub flow_name: String,
    pub goal: String,
    pub target_audience: String,
    /// Sorted by `sequence`, never empty.
    pub steps: Vec<FlowOutlineStep>,
}

/// Parses an outline, or `None` if `text` holds no parsable step.
pub fn parse_outline(text: &str, flow_kind: &str) -> Option<FlowOutline> {
    let lines: Vec<&str> = text.lines().collect();

    let Some(location) = table::locate(&lines) else {
        log::debug!("no outline table found; trying heading-per-step grammar");
        return legacy::parse_legacy_outline(text, flow_kind);
    };

    let (mut steps, table_end) = table::parse_rows(&lines, &location);
    if steps.is_empty() {
        log::debug!("outline table has no usable rows");
        return None;
    }

    let sections = key_points::collect(&lines[table_end..]);
    for step in &mut steps {
        step.key_points = key_points::for_step(step, &sections);
    }
    steps.sort_by_key(|step| step.sequence);

    let meta = metadata::extract(text);
    Some(FlowOutline {
        flow_kind: flow_kind.to_string(),
        flow_name: meta.flow_name,
        goal: meta.goal.unwrap_or_default(),
        target_audience: meta.target_audience.unwrap_or_default(),
        steps,
    })
}

/// Trims a cell or value and drops surrounding bold markers.
pub(crate) fn clean(value: &str) -> &str {
    value.trim().trim_matches('*').trim()
}
