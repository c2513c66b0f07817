//! Section/field parser for model-authored email copy.
//!
//! A draft looks like this:
//!
//! ```text
//! Strategy notes the model wrote first.
//!
//! [HERO]
//! Eyebrow: New season
//! Headline: Time: Now is the moment
//! - free shipping
//!
//! [PRODUCT CARD]
//! Name: Linen shirt
//! Price: [Price]
//!
//! ---
//! Design notes.
//! ```
//!
//! Parsing runs in two independent passes: [`markers::scan_markers`] finds
//! the section markers, then [`lines::classify_lines`] sorts each section's
//! lines into fields, bullets and unlabeled content. Each section also keeps
//! its raw text, so a renderer can always fall back to it.

pub mod fence;
pub mod lines;
pub mod markers;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::labels::normalize_label;
use crate::roles::FieldRole;

/// One `Label: value` line.
///
/// `label` keeps its original casing for display; the normalized form is
/// derived on construction and is the only form used for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailField {
    label: String,
    value: String,
    label_normalized: String,
}

impl EmailField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        let label = label.into();
        let label_normalized = normalize_label(&label);
        Self {
            label,
            value: value.into(),
            label_normalized,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label_normalized(&self) -> &str {
        &self.label_normalized
    }

    /// Canonical role of this field's label, if it has one.
    pub fn role(&self) -> Option<FieldRole> {
        FieldRole::of(&self.label_normalized)
    }
}

/// A block of content introduced by a section marker such as `[HERO]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSection {
    /// Verbatim marker text, e.g. `PRODUCT CARD`. Unknown names are kept as-is.
    pub name: String,
    pub fields: Vec<EmailField>,
    pub bullets: Vec<String>,
    pub unlabeled_content: Vec<String>,
    /// The section's text as written, trimmed. Always present.
    pub raw_content: String,
}

impl EmailSection {
    fn from_slice(name: &str, slice: &str) -> Self {
        let content = lines::classify_lines(slice);
        Self {
            name: name.to_string(),
            fields: content.fields,
            bullets: content.bullets,
            unlabeled_content: content.unlabeled,
            raw_content: slice.trim().to_string(),
        }
    }

    /// Fields whose label maps to `role`, in source order.
    pub fn fields_with_role(&self, role: FieldRole) -> impl Iterator<Item = &EmailField> {
        self.fields.iter().filter(move |f| f.role() == Some(role))
    }

    /// Value of the first field with `role`.
    pub fn first_value(&self, role: FieldRole) -> Option<&str> {
        self.fields_with_role(role).next().map(EmailField::value)
    }

    /// Whether the section has no classified content at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.bullets.is_empty() && self.unlabeled_content.is_empty()
    }
}

/// The full parse of one draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEmailDocument {
    /// Text before the first marker, trimmed.
    pub preamble: String,
    pub sections: Vec<EmailSection>,
    /// Text after a `---` line in the last section, trimmed.
    pub postamble: String,
    /// The input exactly as given.
    pub original_text: String,
}

/// Whether `text` contains at least one section marker.
///
/// `None` and the empty string are simply not structured.
pub fn is_structured_document(text: Option<&str>) -> bool {
    text.is_some_and(markers::has_section_marker)
}

/// Parses a draft into sections, or `None` if it should be shown as plain
/// text.
pub fn parse_document(text: Option<&str>) -> Option<ParsedEmailDocument> {
    let original = text?;
    if !is_structured_document(Some(original)) {
        return None;
    }

    let body = fence::strip_fence_wrapper(original);
    let markers = markers::scan_markers(body);
    let Some(first) = markers.first() else {
        log::debug!("section markers vanished after fence stripping; treating as plain text");
        return None;
    };

    let preamble = body[..first.start].trim().to_string();
    let mut postamble = String::new();
    let mut sections = Vec::with_capacity(markers.len());

    for (i, marker) in markers.iter().enumerate() {
        let end = markers.get(i + 1).map_or(body.len(), |next| next.start);
        let mut slice = &body[marker.end..end];

        if i + 1 == markers.len() {
            let (content, rest) = split_postamble(slice);
            slice = content;
            postamble = rest.trim().to_string();
        }

        sections.push(EmailSection::from_slice(&marker.name, slice));
    }

    Some(ParsedEmailDocument {
        preamble,
        sections,
        postamble,
        original_text: original.to_string(),
    })
}

/// Splits a last-section slice at its first `---` line.
///
/// Returns the section content and whatever follows the separator. The
/// separator line itself is dropped; it carries no content.
fn split_postamble(slice: &str) -> (&str, &str) {
    let mut offset = 0;
    for line in slice.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        if line_start > 0 && is_separator(line) {
            return (&slice[..line_start], &slice[offset..]);
        }
    }
    (slice, "")
}

fn is_separator(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 3 && t.chars().all(|c| c == '-')
}
