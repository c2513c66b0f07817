pub mod draft_file;

pub use draft_file::DraftFile;
