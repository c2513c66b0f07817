//! Chooses how a draft should be displayed.
//!
//! Called on every streamed prefix of a model reply, so it must be cheap and
//! must accept truncated input.

use serde::{Deserialize, Serialize};

use crate::email::{ParsedEmailDocument, parse_document};
use crate::outline::{FlowOutline, parse_outline};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftView {
    /// A flow outline awaiting approval.
    Outline(FlowOutline),
    /// Email copy split into sections.
    Email(ParsedEmailDocument),
    /// Anything else, verbatim.
    Plain(String),
}

impl DraftView {
    /// Tries the outline grammar, then section markers, then falls back to
    /// plain text.
    pub fn from_text(text: &str, flow_kind: &str) -> Self {
        if let Some(outline) = parse_outline(text, flow_kind) {
            return DraftView::Outline(outline);
        }
        match parse_document(Some(text)) {
            Some(doc) => DraftView::Email(doc),
            None => DraftView::Plain(text.to_string()),
        }
    }
}
