//! Decoded module aggregate.

use alloc::vec::Vec;
use arrayvec::ArrayString;

use crate::instrument::Instrument;
use crate::pattern::Pattern;
use crate::variant::FormatVariant;

/// Title field width in bytes.
pub const TITLE_LEN: usize = 20;

/// Size of the stored order table.
pub const MAX_ORDERS: usize = 128;

/// Pattern indices in playback order.
pub type OrderList = Vec<u8>;

/// A decoded MOD file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleData {
    /// Song title, trailing NULs stripped
    pub title: ArrayString<TITLE_LEN>,
    /// Layout variant detected from the signature region
    pub variant: FormatVariant,
    /// Instrument headers present in the file
    pub instruments: Vec<Instrument>,
    /// Order list, truncated to the song length
    pub order: OrderList,
    /// Patterns in storage order
    pub patterns: Vec<Pattern>,
    /// Channels per row
    pub channels: u8,
}

impl ModuleData {
    /// Create an empty module for a variant.
    pub fn new(title: &str, variant: FormatVariant) -> Self {
        let mut t = ArrayString::new();
        let _ = t.try_push_str(title);
        Self {
            title: t,
            variant,
            instruments: Vec::new(),
            order: Vec::new(),
            patterns: Vec::new(),
            channels: variant.channels(),
        }
    }

    /// Number of patterns the order list refers to.
    pub fn pattern_count_declared(&self) -> usize {
        self.order.iter().max().map_or(0, |&m| m as usize + 1)
    }

    /// True when the file ended before all referenced patterns.
    pub fn is_truncated(&self) -> bool {
        self.patterns.len() < self.pattern_count_declared()
    }

    /// Pattern index and pattern for an order position, if it was decoded.
    pub fn pattern_for_position(&self, pos: usize) -> Option<(u8, &Pattern)> {
        let idx = *self.order.get(pos)?;
        self.patterns.get(idx as usize).map(|p| (idx, p))
    }

    /// Total notes across decoded patterns.
    pub fn note_count(&self) -> usize {
        self.patterns.iter().map(Pattern::note_count).sum()
    }
}
