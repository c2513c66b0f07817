//! Detects whether a chat message approves a proposed outline.
//!
//! This is a phrase heuristic, not a semantic classifier. Unusual phrasings
//! will be misread; the user can always answer again.

/// Phrases that signal approval.
const AFFIRMATIVE: &[&str] = &[
    "approved",
    "approve",
    "looks good",
    "look good",
    "looks great",
    "sounds good",
    "lgtm",
    "let's proceed",
    "lets proceed",
    "let's go",
    "go ahead",
    "perfect",
    "yes",
    "proceed",
    "do it",
    "ship it",
];

/// Phrases that signal hesitation or a change request. Any of these vetoes
/// approval.
const NEGATION: &[&str] = &[
    "not ", "don't", "dont", "wait", "hold", "change", "modify", "adjust", "edit", "update",
];

/// Whether `message` approves the outline.
///
/// Needs an affirmative phrase and no negation phrase; "looks good but
/// change the CTA" is not approval.
pub fn is_approval(message: &str) -> bool {
    let message = message.trim().to_lowercase().replace(['\u{2018}', '\u{2019}'], "'");
    let affirmed = AFFIRMATIVE.iter().any(|p| message.contains(p));
    let negated = NEGATION.iter().any(|p| message.contains(p));
    affirmed && !negated
}
