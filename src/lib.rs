//! modsheet - turn ProTracker MOD files into printable pattern sheets.
//!
//! Shared by the `modsheet` binary and integration tests: configuration,
//! the read/decode/render/write pipeline, and desktop helpers.

pub mod config;
pub mod export;
#[cfg(feature = "dialog")]
pub mod pick;
pub mod reveal;

pub use config::Config;
pub use export::{export, Destination, ExportError, ExportReport};
