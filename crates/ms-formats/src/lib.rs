//! Format decoder for modsheet.
//!
//! Decodes ProTracker MOD files (15-instrument Soundtracker layout and the
//! 31-instrument tagged layouts) into [`ms_ir::ModuleData`].

mod mod_format;
mod reader;
mod sample_header;
mod signature;

pub use mod_format::{load_mod, MIN_MODULE_LEN};
pub use signature::{channels_from_tag, detect_variant, SIGNATURE_OFFSET};

/// Error type for format decoding.
///
/// Everything short of a missing title is decoded best-effort, so this has
/// a single variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Buffer cannot even hold the title field
    #[error("file too short to be a valid MOD ({len} bytes)")]
    TooShort { len: usize },
}
