pub mod approval;
pub mod email;
pub mod io;
pub mod labels;
pub mod models;
pub mod outline;
pub mod roles;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use approval::is_approval;
pub use email::{
    EmailField, EmailSection, ParsedEmailDocument, is_structured_document, parse_document,
};
pub use io::*;
pub use labels::normalize_label;
pub use models::DraftFile;
pub use outline::{EmailKind, FlowOutline, FlowOutlineStep, parse_outline};
pub use roles::FieldRole;
pub use view::DraftView;
