//! Code-fence wrappers around whole drafts.
//!
//! Models sometimes wrap an entire email in a fenced block. The fence lines
//! are a generation artifact, not content, so they are removed before marker
//! scanning. A draft still streaming in may have the opener but not yet the
//! closer; the opener alone is stripped in that case, unless a closer shows up
//! earlier in the text. That fence only wraps part of the draft and is kept.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Signature of a fence line, ignoring any info string after the fence.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    /// A closing fence is a bare run of the opener's fence character.
    pub fn closes(open: FenceSig, line: &str) -> bool {
        let t = line.trim();
        let fence_char = match open {
            FenceSig::Backticks => '`',
            FenceSig::Tildes => '~',
        };
        t.len() >= 3 && t.chars().all(|c| c == fence_char)
    }
}

/// Returns `text` without a wrapping fence, or `text` unchanged if it does
/// not start with one.
pub fn strip_fence_wrapper(text: &str) -> &str {
    let trimmed = text.trim();
    let (first_line, rest) = trimmed.split_once('\n').unwrap_or((trimmed, ""));
    let Some(open) = CodeFence::sig(first_line) else {
        return text;
    };

    let body = rest.trim_end();
    let (head, last_line) = match body.rsplit_once('\n') {
        Some((head, last)) => (head, last),
        None => ("", body),
    };

    if CodeFence::closes(open, last_line) {
        log::trace!("stripped closed {open:?} fence wrapper");
        head
    } else if body.lines().any(|line| CodeFence::closes(open, line)) {
        text
    } else {
        log::trace!("stripped unterminated {open:?} fence opener");
        body
    }
}
