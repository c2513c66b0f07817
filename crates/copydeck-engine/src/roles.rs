//! Canonical field roles.
//!
//! Model-written labels vary freely ("Title", "H1", "Main Title"), so every
//! semantic decision about a field goes through these predicates rather than
//! through the raw label text. Adding a synonym is a one-line change to one of
//! the tables below.

use serde::{Deserialize, Serialize};

use crate::labels::normalize_label;

const HEADLINE: &[&str] = &["headline", "title", "header", "heading", "h1", "maintitle"];

const SUBHEAD: &[&str] = &[
    "subhead",
    "subheadline",
    "subtitle",
    "tagline",
    "oneliner",
    "supporting",
    "subheading",
    "h2",
];

const BODY: &[&str] = &[
    "body",
    "copy",
    "content",
    "text",
    "description",
    "paragraph",
    "message",
];

const CTA: &[&str] = &["cta", "calltoaction", "button", "action", "link", "buttontext"];

const ACCENT: &[&str] = &["accent", "eyebrow", "kicker", "preheadline", "label", "tag"];

fn matches(label: &str, synonyms: &[&str]) -> bool {
    let key = normalize_label(label);
    synonyms.contains(&key.as_str())
}

pub fn is_headline_label(label: &str) -> bool {
    matches(label, HEADLINE)
}

pub fn is_subhead_label(label: &str) -> bool {
    matches(label, SUBHEAD)
}

pub fn is_body_label(label: &str) -> bool {
    matches(label, BODY)
}

pub fn is_cta_label(label: &str) -> bool {
    matches(label, CTA)
}

/// Informational only: accents are small decorative lines above a headline.
pub fn is_accent_label(label: &str) -> bool {
    matches(label, ACCENT)
}

/// The semantic bucket a field label falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldRole {
    Headline,
    Subhead,
    Body,
    Cta,
    Accent,
}

impl FieldRole {
    /// All roles in classification priority order.
    pub const ALL: [FieldRole; 5] = [
        FieldRole::Headline,
        FieldRole::Subhead,
        FieldRole::Body,
        FieldRole::Cta,
        FieldRole::Accent,
    ];

    /// Classifies a raw label, or `None` if no synonym table contains it.
    pub fn of(label: &str) -> Option<FieldRole> {
        Self::ALL.into_iter().find(|role| role.matches(label))
    }

    /// Whether `label` belongs to this role.
    pub fn matches(self, label: &str) -> bool {
        match self {
            FieldRole::Headline => is_headline_label(label),
            FieldRole::Subhead => is_subhead_label(label),
            FieldRole::Body => is_body_label(label),
            FieldRole::Cta => is_cta_label(label),
            FieldRole::Accent => is_accent_label(label),
        }
    }
}
