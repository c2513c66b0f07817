//! Turns a parsed draft into styled terminal lines.

use copydeck_engine::{DraftView, EmailSection, FieldRole, FlowOutline, ParsedEmailDocument};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn styled(text: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(vec![Span::styled(text.into(), style)])
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn verbatim(text: &str, style: Style) -> impl Iterator<Item = Line<'static>> + '_ {
    text.lines().map(move |line| styled(line, style))
}

pub fn render_view(view: &DraftView) -> Vec<Line<'static>> {
    match view {
        DraftView::Outline(outline) => render_outline(outline),
        DraftView::Email(doc) => render_email(doc),
        DraftView::Plain(text) => verbatim(text, Style::default()).collect(),
    }
}

fn render_email(doc: &ParsedEmailDocument) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if !doc.preamble.is_empty() {
        lines.extend(verbatim(&doc.preamble, dim().add_modifier(Modifier::ITALIC)));
        lines.push(Line::default());
    }

    for section in &doc.sections {
        render_section(section, &mut lines);
        lines.push(Line::default());
    }

    if !doc.postamble.is_empty() {
        lines.push(styled("---", dim()));
        lines.extend(verbatim(&doc.postamble, dim()));
    }

    lines
}

fn render_section(section: &EmailSection, lines: &mut Vec<Line<'static>>) {
    lines.push(styled(
        format!("▌ {}", section.name),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    if section.is_empty() {
        lines.extend(verbatim(&section.raw_content, Style::default()));
        return;
    }

    for field in &section.fields {
        let line = match field.role() {
            Some(FieldRole::Accent) => styled(field.value().to_uppercase(), dim()),
            Some(FieldRole::Headline) => styled(
                field.value(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Some(FieldRole::Subhead) => styled(
                field.value(),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
            Some(FieldRole::Body) => styled(field.value(), Style::default()),
            Some(FieldRole::Cta) => styled(
                format!("[ {} ]", field.value()),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
            None => Line::from(vec![
                Span::styled(format!("{}: ", field.label()), dim()),
                Span::raw(field.value().to_string()),
            ]),
        };
        lines.push(line);
    }

    for bullet in &section.bullets {
        lines.push(styled(format!("• {bullet}"), Style::default()));
    }
    for text in &section.unlabeled_content {
        lines.push(styled(text.clone(), Style::default()));
    }
}

fn render_outline(outline: &FlowOutline) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let name = if outline.flow_name.is_empty() {
        "Untitled flow"
    } else {
        outline.flow_name.as_str()
    };
    lines.push(styled(
        format!("{name} ({})", outline.flow_kind),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if !outline.goal.is_empty() {
        lines.push(styled(format!("Goal: {}", outline.goal), dim()));
    }
    if !outline.target_audience.is_empty() {
        lines.push(styled(
            format!("Audience: {}", outline.target_audience),
            dim(),
        ));
    }
    lines.push(Line::default());

    for step in &outline.steps {
        lines.push(styled(
            format!(
                "{}. {}  [{}]",
                step.sequence,
                step.title,
                step.email_kind.as_str()
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(format!("   When: {}", step.timing)));
        lines.push(Line::from(format!("   Why:  {}", step.purpose)));
        lines.push(Line::from(format!("   CTA:  {}", step.call_to_action)));
        for point in &step.key_points {
            lines.push(Line::from(format!("   • {point}")));
        }
        lines.push(Line::default());
    }

    lines
}
