//! Renders an outline back into the table grammar the parser reads.

use std::fmt::Write;

use super::FlowOutline;

/// Pipes would split a cell in two.
fn cell(value: &str) -> String {
    value.replace('|', "/")
}

impl FlowOutline {
    /// Markdown form used when presenting an outline for approval.
    ///
    /// Parsing the result with the same flow kind gives back an equal
    /// outline.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        if !self.flow_name.is_empty() {
            let _ = writeln!(out, "## {} Flow Outline\n", self.flow_name);
        }
        if !self.goal.is_empty() {
            let _ = writeln!(out, "**Goal:** {}", self.goal);
        }
        if !self.target_audience.is_empty() {
            let _ = writeln!(out, "**Target Audience:** {}", self.target_audience);
        }
        out.push('\n');

        out.push_str("| # | Email Title | Timing | Purpose | Type | CTA |\n");
        out.push_str("|---|---|---|---|---|---|\n");
        for step in &self.steps {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                step.sequence,
                cell(&step.title),
                cell(&step.timing),
                cell(&step.purpose),
                step.email_kind.as_str(),
                cell(&step.call_to_action),
            );
        }

        out.push_str("\n### Key Points\n");
        for step in &self.steps {
            let _ = writeln!(out, "\n**Email {}: {}**", step.sequence, step.title);
            for point in &step.key_points {
                let _ = writeln!(out, "- {point}");
            }
        }

        out
    }
}
