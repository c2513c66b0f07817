//! The pipe-table form of an outline.
//!
//! Columns are identified by header keywords, not by position, so a model
//! that reorders or renames columns still produces the same steps.

use super::{EmailKind, FlowOutlineStep, clean};

/// Header cell that marks a line as an outline table header.
pub const HEADER_ANCHOR: &str = "Email Title";

/// The meaning of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Sequence,
    Title,
    Timing,
    Purpose,
    Kind,
    CallToAction,
}

impl ColumnRole {
    /// Roles in header matching order. Call-to-action is matched before
    /// title so a "CTA Name" column is not taken for the title.
    const MATCH_ORDER: [ColumnRole; 6] = [
        ColumnRole::Sequence,
        ColumnRole::CallToAction,
        ColumnRole::Kind,
        ColumnRole::Timing,
        ColumnRole::Purpose,
        ColumnRole::Title,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            ColumnRole::Sequence => &["#", "seq", "sequence"],
            ColumnRole::Title => &["title", "name"],
            ColumnRole::Timing => &["timing", "when", "delay"],
            ColumnRole::Purpose => &["purpose", "goal"],
            ColumnRole::Kind => &["type"],
            ColumnRole::CallToAction => &["cta", "call to action", "action"],
        }
    }

    /// Column assumed when the header has no cell for this role.
    fn default_index(self) -> usize {
        match self {
            ColumnRole::Sequence => 0,
            ColumnRole::Title => 1,
            ColumnRole::Timing => 2,
            ColumnRole::Purpose => 3,
            ColumnRole::Kind => 4,
            ColumnRole::CallToAction => 5,
        }
    }

    /// Role of a header cell, if any keyword occurs in it.
    pub fn of_header(cell: &str) -> Option<ColumnRole> {
        let cell = cell.to_lowercase();
        Self::MATCH_ORDER
            .into_iter()
            .find(|role| role.keywords().iter().any(|k| cell.contains(k)))
    }
}

/// Column index per role, as read from the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    sequence: Option<usize>,
    title: Option<usize>,
    timing: Option<usize>,
    purpose: Option<usize>,
    kind: Option<usize>,
    call_to_action: Option<usize>,
}

impl ColumnMap {
    /// Builds the map from header cells. The first cell claiming a role wins.
    pub fn from_header(cells: &[String]) -> Self {
        let mut map = Self::default();
        for (index, cell) in cells.iter().enumerate() {
            if let Some(role) = ColumnRole::of_header(cell) {
                map.slot(role).get_or_insert(index);
            }
        }
        map
    }

    fn slot(&mut self, role: ColumnRole) -> &mut Option<usize> {
        match role {
            ColumnRole::Sequence => &mut self.sequence,
            ColumnRole::Title => &mut self.title,
            ColumnRole::Timing => &mut self.timing,
            ColumnRole::Purpose => &mut self.purpose,
            ColumnRole::Kind => &mut self.kind,
            ColumnRole::CallToAction => &mut self.call_to_action,
        }
    }

    /// Header column for `role`, if the header named one.
    pub fn mapped(&self, role: ColumnRole) -> Option<usize> {
        match role {
            ColumnRole::Sequence => self.sequence,
            ColumnRole::Title => self.title,
            ColumnRole::Timing => self.timing,
            ColumnRole::Purpose => self.purpose,
            ColumnRole::Kind => self.kind,
            ColumnRole::CallToAction => self.call_to_action,
        }
    }

    /// Column for `role`, falling back to its conventional position.
    pub fn index(&self, role: ColumnRole) -> usize {
        self.mapped(role).unwrap_or_else(|| role.default_index())
    }
}

/// Where the table sits in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLocation {
    /// Line index of the header row.
    pub header: usize,
    /// Line index of the first body row.
    pub body_start: usize,
    pub columns: ColumnMap,
}

/// Splits `| a | b |` into trimmed cells `["a", "b"]`.
pub fn split_cells(line: &str) -> Vec<String> {
    let t = line.trim();
    let t = t.strip_prefix('|').unwrap_or(t);
    let t = t.strip_suffix('|').unwrap_or(t);
    t.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn is_separator_row(line: &str) -> bool {
    let t = line.trim();
    t.contains('-') && t.chars().all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Finds the header and separator rows.
///
/// `None` means there is no well-formed table: no header line, or a header
/// not directly followed by a separator row.
pub fn locate(lines: &[&str]) -> Option<TableLocation> {
    let header = lines
        .iter()
        .position(|line| line.contains('|') && line.contains(HEADER_ANCHOR))?;

    let separator = lines.get(header + 1)?;
    if !is_separator_row(separator) {
        log::debug!("outline header at line {header} has no separator row");
        return None;
    }

    Some(TableLocation {
        header,
        body_start: header + 2,
        columns: ColumnMap::from_header(&split_cells(lines[header])),
    })
}

fn ends_table(line: &str) -> bool {
    line.trim().is_empty()
        || !line.contains('|')
        || line.contains("Key Points")
        || line.contains("**Email")
}

/// Reads body rows until the table ends.
///
/// Rows with a non-numeric sequence or an empty title are skipped. Returned
/// steps have no key points yet. Also returns the line index just past the
/// table.
pub fn parse_rows(lines: &[&str], location: &TableLocation) -> (Vec<FlowOutlineStep>, usize) {
    let mut steps = Vec::new();
    let mut end = location.body_start;

    for (offset, line) in lines[location.body_start.min(lines.len())..].iter().enumerate() {
        end = location.body_start + offset;
        if ends_table(line) {
            return (steps, end);
        }

        let cells = split_cells(line);
        match parse_row(&cells, &location.columns) {
            Some(step) => steps.push(step),
            None => log::debug!("skipping outline row {end}: {line:?}"),
        }
        end += 1;
    }

    (steps, end.max(location.body_start).min(lines.len()))
}

/// Reads `1`, `#1`, `1.` or `1)`. Anything else is not a step number.
fn sequence_number(cell: &str) -> Option<u32> {
    let cell = cell.trim_start_matches('#').trim();
    let digits_end = cell
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(cell.len());
    let (digits, rest) = cell.split_at(digits_end);
    if !rest.chars().all(|c| matches!(c, '.' | ')' | ':')) {
        return None;
    }
    digits.parse().ok()
}

fn parse_row(cells: &[String], columns: &ColumnMap) -> Option<FlowOutlineStep> {
    let cell = move |role: ColumnRole| {
        cells
            .get(columns.index(role))
            .map(|c| clean(c))
            .unwrap_or_default()
    };

    let sequence = sequence_number(cell(ColumnRole::Sequence))?;
    let title = cell(ColumnRole::Title);
    if title.is_empty() {
        return None;
    }

    Some(FlowOutlineStep {
        sequence,
        title: title.to_string(),
        timing: cell(ColumnRole::Timing).to_string(),
        purpose: cell(ColumnRole::Purpose).to_string(),
        email_kind: EmailKind::from_cell(cell(ColumnRole::Kind)),
        call_to_action: cell(ColumnRole::CallToAction).to_string(),
        key_points: Vec::new(),
    })
}
