//! Fixture and property tests for the section/field parser.
//!
//! Fixtures (.txt) live in `fixtures/` next to this file.


use insta::assert_debug_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::email::{ParsedEmailDocument, is_structured_document, parse_document};
use crate::roles::FieldRole;

fn load_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/email/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap()
}

fn parse_fixture(name: &str) -> (String, ParsedEmailDocument) {
    let text = load_fixture(name);
    let doc = parse_document(Some(&text)).expect("fixture should parse");
    invariants::check(&text, &doc);
    (text, doc)
}

fn section_names(doc: &ParsedEmailDocument) -> Vec<&str> {
    doc.sections.iter().map(|s| s.name.as_str()).collect()
}

// Fixture tests

#[test]
fn fixture_launch_email() {
    let (_, doc) = parse_fixture("launch_email");

    assert_eq!(
        section_names(&doc),
        vec!["HERO", "PRODUCT CARD", "TESTIMONIAL", "FOOTER"]
    );
    assert!(doc.preamble.starts_with("Strategy: lead with urgency"));
    assert!(doc.preamble.ends_with("Tone is warm but direct."));
    assert_eq!(
        doc.postamble,
        "Design notes: use the sand palette and keep the hero image full-bleed."
    );

    let hero = &doc.sections[0];
    assert_eq!(hero.first_value(FieldRole::Headline), Some("Time: Now is the moment"));
    assert_eq!(hero.first_value(FieldRole::Subhead), Some("Our lightest linen yet"));
    assert_eq!(hero.first_value(FieldRole::Cta), Some("Shop the collection"));
    assert_eq!(hero.first_value(FieldRole::Accent), Some("Spring drop"));

    let card = &doc.sections[1];
    assert_eq!(card.fields.len(), 3);
    assert_eq!(card.fields[1].value(), "[Price]");
    assert_eq!(
        card.bullets,
        vec!["Free returns", "Ships in 48 hours", "Organic flax"]
    );

    let testimonial = &doc.sections[2];
    assert_eq!(
        testimonial.unlabeled_content,
        vec!["\"I wear it every weekend.\""]
    );
    assert_eq!(testimonial.fields[0].label(), "Attribution");

    let footer = &doc.sections[3];
    assert_eq!(footer.raw_content, "Unsubscribe any time.");
    assert_eq!(footer.unlabeled_content, vec!["Unsubscribe any time."]);
}

#[test]
fn fixture_fenced_novel_sections() {
    let (_, doc) = parse_fixture("fenced_novel_sections");

    assert_eq!(
        section_names(&doc),
        vec!["COMPLETELY NEW SECTION TYPE", "COUNTDOWN_TIMER"]
    );
    assert_eq!(doc.preamble, "");
    assert_eq!(doc.postamble, "");
    assert_eq!(doc.sections[0].fields.len(), 2);

    let timer = &doc.sections[1];
    assert_eq!(timer.fields[1].label(), "Copy");
    assert_eq!(timer.fields[1].value(), "Last chance to grab your spot.");
    assert_eq!(timer.unlabeled_content, vec!["Loose closing line."]);
    assert!(!timer.raw_content.contains("```"));
}

#[test]
fn fixture_streaming_prefix() {
    let (_, doc) = parse_fixture("streaming_prefix");

    // The half-written marker is not structure yet; it stays in the last section.
    assert_eq!(section_names(&doc), vec!["HERO"]);
    assert_eq!(doc.sections[0].unlabeled_content, vec!["[BENEF"]);
}

#[test]
fn every_prefix_of_a_streamed_draft_parses_or_degrades() {
    let text = load_fixture("launch_email");
    let boundaries = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));

    for end in boundaries {
        let prefix = &text[..end];
        match parse_document(Some(prefix)) {
            Some(doc) => invariants::check(prefix, &doc),
            None => assert!(!is_structured_document(Some(prefix))),
        }
    }
}

// Property tests

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   \n"))]
#[case(Some("[Price]"))]
#[case(Some("[Name]"))]
#[case(Some("[placeholder]"))]
#[case(Some("Dear [First Name], thanks for joining."))]
fn unstructured_input_is_plain_text(#[case] text: Option<&str>) {
    assert!(!is_structured_document(text));
    assert_eq!(parse_document(text), None);
}

#[rstest]
#[case("[HERO]")]
#[case("[PRODUCT CARD]")]
#[case("[CUSTOM_SECTION]")]
#[case("[NEW-SECTION-TYPE]")]
fn uppercase_markers_are_structure(#[case] text: &str) {
    assert!(is_structured_document(Some(text)));
    let doc = parse_document(Some(text)).unwrap();
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].name, text.trim_matches(['[', ']']));
    assert!(doc.sections[0].is_empty());
}

#[test]
fn only_first_colon_ends_the_label() {
    let doc = parse_document(Some("[HERO]\nHeadline: Time: Now is the moment")).unwrap();

    assert_debug_snapshot!(doc.sections[0].fields, @r#"
    [
        EmailField {
            label: "Headline",
            value: "Time: Now is the moment",
            label_normalized: "headline",
        },
    ]
    "#);
}

#[test]
fn three_bullet_glyphs_share_one_list() {
    let doc = parse_document(Some("[LIST]\n- dash\n• dot\n* star")).unwrap();
    assert_eq!(doc.sections[0].bullets.len(), 3);
}

#[test]
fn unknown_section_passes_through() {
    let text = "[COMPLETELY NEW SECTION TYPE]\nCustom Field: x\nAnother Field: y";
    let doc = parse_document(Some(text)).unwrap();

    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].name, "COMPLETELY NEW SECTION TYPE");
    assert_eq!(doc.sections[0].fields.len(), 2);
    invariants::check(text, &doc);
}

#[test]
fn unlabeled_lines_are_captured_not_counted_as_fields() {
    let text = "[BODY]\nHeadline: Hello\nJust a sentence.\n  Indented prose.\nCTA: Go";
    let doc = parse_document(Some(text)).unwrap();
    let section = &doc.sections[0];

    assert_eq!(section.fields.len(), 2);
    assert_eq!(
        section.unlabeled_content,
        vec!["Just a sentence.", "Indented prose."]
    );
}

#[test]
fn preamble_is_empty_when_text_starts_with_marker() {
    let doc = parse_document(Some("[HERO]\nHeadline: Hi")).unwrap();
    assert_eq!(doc.preamble, "");
}

#[test]
fn bare_trailing_separator_is_discarded() {
    let text = "[HERO]\nHeadline: Hi\n---\n";
    let doc = parse_document(Some(text)).unwrap();

    assert_eq!(doc.postamble, "");
    assert_eq!(doc.sections[0].raw_content, "Headline: Hi");
    assert!(doc.sections[0].unlabeled_content.is_empty());
}

#[test]
fn separator_in_earlier_section_is_content() {
    let text = "[HERO]\nHeadline: Hi\n---\n[FOOTER]\nBye";
    let doc = parse_document(Some(text)).unwrap();

    assert_eq!(doc.postamble, "");
    assert_eq!(doc.sections[0].unlabeled_content, vec!["---"]);
}

#[test]
fn dash_rules_outside_the_postamble_split_are_kept() {
    let text = "Plan\n---\nNotes\n[HERO]\nHeadline: Hi\n---\nmid\n---\nend";
    let doc = parse_document(Some(text)).unwrap();
    invariants::check(text, &doc);

    assert_eq!(doc.preamble, "Plan\n---\nNotes");
    assert_eq!(doc.postamble, "mid\n---\nend");
}

#[test]
#[should_panic(expected = "content was lost or duplicated")]
fn invariant_check_catches_a_dropped_dash_rule() {
    let text = "Plan\n---\nNotes\n[HERO]\nHeadline: Hi";
    let mut doc = parse_document(Some(text)).unwrap();
    doc.preamble = "Plan\nNotes".to_string();
    invariants::check(text, &doc);
}

#[test]
fn placeholders_inside_values_are_not_sections() {
    let text = "[HERO]\nHeadline: Hi [Name], your [Product] is here";
    let doc = parse_document(Some(text)).unwrap();

    assert_eq!(doc.sections.len(), 1);
    assert_eq!(
        doc.sections[0].fields[0].value(),
        "Hi [Name], your [Product] is here"
    );
}

#[test]
fn parsing_is_deterministic() {
    let text = load_fixture("launch_email");
    assert_eq!(parse_document(Some(&text)), parse_document(Some(&text)));
}
