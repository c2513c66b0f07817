//! Pass 1: locate section markers.
//!
//! A section marker is `[` + an uppercase letter + any run of uppercase
//! letters, digits, spaces, underscores or hyphens + `]`. Mixed-case
//! placeholders such as `[Price]` or `[Name]` are inline content, never
//! structure.

use std::sync::OnceLock;

use regex::Regex;

/// One marker occurrence, with byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarker {
    /// Offset of the opening `[`.
    pub start: usize,
    /// Offset just past the closing `]`.
    pub end: usize,
    /// Verbatim text between the brackets.
    pub name: String,
}

fn marker_regex() -> &'static Regex {
    static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    MARKER_REGEX.get_or_init(|| {
        Regex::new(r"\[([A-Z][A-Z0-9 _-]*)\]").expect("Invalid section marker regex")
    })
}

/// Whether `text` contains at least one section marker anywhere.
pub fn has_section_marker(text: &str) -> bool {
    marker_regex().is_match(text)
}

/// Every marker in `text`, in source order.
pub fn scan_markers(text: &str) -> Vec<SectionMarker> {
    marker_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(SectionMarker {
                start: whole.start(),
                end: whole.end(),
                name: name.as_str().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("[HERO]")]
    #[case("[PRODUCT CARD]")]
    #[case("[CUSTOM_SECTION]")]
    #[case("[NEW-SECTION-TYPE]")]
    #[case("[P2]")]
    fn uppercase_tokens_are_markers(#[case] text: &str) {
        assert!(has_section_marker(text));
    }

    #[rstest]
    #[case("[Price]")]
    #[case("[Name]")]
    #[case("[placeholder]")]
    #[case("[]")]
    #[case("[1ST]")]
    #[case("[ HERO]")]
    #[case("[HERO")]
    fn other_brackets_are_not_markers(#[case] text: &str) {
        assert!(!has_section_marker(text));
    }

    #[test]
    fn scan_records_offsets_and_names_in_order() {
        let text = "notes\n[HERO]\nHeadline: Hi [Name]\n[PRODUCT CARD]\nx";
        let markers = scan_markers(text);

        assert_eq!(
            markers,
            vec![
                SectionMarker {
                    start: 6,
                    end: 12,
                    name: "HERO".to_string(),
                },
                SectionMarker {
                    start: 33,
                    end: 47,
                    name: "PRODUCT CARD".to_string(),
                },
            ]
        );
        for m in &markers {
            assert_eq!(&text[m.start + 1..m.end - 1], m.name);
        }
    }

    #[test]
    fn scan_of_unstructured_text_is_empty() {
        assert!(scan_markers("Just [some] text with [Placeholders]").is_empty());
        assert!(scan_markers("").is_empty());
    }
}
