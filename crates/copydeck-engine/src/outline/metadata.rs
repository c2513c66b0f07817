//! Flow name, goal and audience lines that surround an outline.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineMetadata {
    /// From a `## <name> Flow Outline` heading, without the "Flow" token.
    pub flow_name: String,
    /// `None` when no `Goal:` / `Flow Goal:` line exists.
    pub goal: Option<String>,
    /// `None` when no `Target Audience:` line exists.
    pub target_audience: Option<String>,
}

struct Patterns {
    flow_name: Regex,
    goal: Regex,
    target_audience: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        flow_name: Regex::new(r"(?mi)^#{1,3}[ \t]*(.+?)[ \t]*(?:Flow[ \t]+)?Outline[ \t]*$")
            .expect("Invalid flow name regex"),
        goal: labelled_line(r"(?:Flow[ \t]+)?Goal"),
        target_audience: labelled_line(r"Target[ \t]+Audience"),
    })
}

/// `Name: value` with optional bold markers, e.g. `**Goal:** value`.
///
/// Matching never crosses a line break, so an empty value stays empty.
pub(crate) fn labelled_line(name: &str) -> Regex {
    Regex::new(&format!(
        r"(?mi)^[ \t]*\*{{0,2}}{name}\*{{0,2}}[ \t]*:[ \t]*\*{{0,2}}[ \t]*(.*?)[ \t]*$"
    ))
    .expect("Invalid labelled line regex")
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| super::clean(m.as_str()).to_string())
}

pub fn extract(text: &str) -> OutlineMetadata {
    let p = patterns();
    OutlineMetadata {
        flow_name: capture(&p.flow_name, text).unwrap_or_default(),
        goal: capture(&p.goal, text),
        target_audience: capture(&p.target_audience, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("## Welcome Series Flow Outline", "Welcome Series")]
    #[case("## Welcome Series Outline", "Welcome Series")]
    #[case("### Abandoned Cart Flow Outline  ", "Abandoned Cart")]
    #[case("## **VIP Launch** Outline", "VIP Launch")]
    #[case("No heading here", "")]
    fn flow_name_drops_flow_token(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(extract(text).flow_name, expected);
    }

    #[rstest]
    #[case("**Goal:** Convert trial users")]
    #[case("Goal: Convert trial users")]
    #[case("**Goal**: Convert trial users")]
    #[case("**Flow Goal:** Convert trial users")]
    fn goal_tolerates_bold_markers(#[case] text: &str) {
        assert_eq!(extract(text).goal.as_deref(), Some("Convert trial users"));
    }

    #[test]
    fn missing_metadata_is_none() {
        let meta = extract("| # | Email Title |");
        assert_eq!(meta, OutlineMetadata::default());
    }

    #[test]
    fn extracts_all_three() {
        let text = "## Winback Flow Outline\n\n**Goal:** Bring lapsed buyers back\n**Target Audience:** No order in 120 days\n";
        assert_eq!(
            extract(text),
            OutlineMetadata {
                flow_name: "Winback".to_string(),
                goal: Some("Bring lapsed buyers back".to_string()),
                target_audience: Some("No order in 120 days".to_string()),
            }
        );
    }
}
