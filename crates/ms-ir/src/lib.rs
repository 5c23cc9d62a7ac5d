//! Core module data types for modsheet.
//!
//! This crate defines the in-memory representation of a decoded tracker
//! module. The MOD decoder emits it and the pattern renderer consumes it;
//! neither side needs to know about the other.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod instrument;
mod module;
mod note;
mod pattern;
mod variant;

pub use instrument::Instrument;
pub use module::{ModuleData, OrderList, MAX_ORDERS, TITLE_LEN};
pub use note::{note_name, NoteLabel, PERIOD_TABLE};
pub use pattern::{Cell, Pattern, ROWS_PER_PATTERN};
pub use variant::FormatVariant;
