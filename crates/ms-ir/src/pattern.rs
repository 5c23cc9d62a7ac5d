//! Pattern and cell types.

use alloc::vec::Vec;

use crate::note::NoteLabel;

/// Every MOD pattern has exactly this many rows.
pub const ROWS_PER_PATTERN: usize = 64;

/// A single channel slot within one row of a pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// 12-bit Amiga period (0 = no note)
    pub period: u16,
    /// Instrument number (0 = none)
    pub instrument: u8,
    /// Effect command (0x0-0xF)
    pub effect: u8,
    /// Effect parameter
    pub param: u8,
}

impl Cell {
    /// Create an empty cell.
    pub const fn empty() -> Self {
        Self {
            period: 0,
            instrument: 0,
            effect: 0,
            param: 0,
        }
    }

    /// Unpack a 4-byte MOD cell record.
    ///
    /// ```text
    /// byte 0: iiii pppp   upper instrument nibble, period bits 8..11
    /// byte 1: pppp pppp   period bits 0..7
    /// byte 2: iiii eeee   lower instrument nibble, effect command
    /// byte 3: xxxx xxxx   effect parameter
    /// ```
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self {
            period: (((b[0] & 0x0F) as u16) << 8) | b[1] as u16,
            instrument: (b[0] & 0xF0) | ((b[2] & 0xF0) >> 4),
            effect: b[2] & 0x0F,
            param: b[3],
        }
    }

    /// Returns true if the cell is completely empty.
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Display label for the note column.
    pub fn note(&self) -> NoteLabel {
        NoteLabel::from_period(self.period)
    }

    pub fn has_note(&self) -> bool {
        self.period != 0
    }
}

/// A 64-row grid of cells across channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Number of channels
    pub channels: u8,
    /// Pattern data, stored row-major: data[row * channels + channel]
    pub data: Vec<Cell>,
}

impl Pattern {
    /// Create a new pattern with empty cells.
    pub fn new(channels: u8) -> Self {
        Self {
            channels,
            data: alloc::vec![Cell::empty(); ROWS_PER_PATTERN * channels as usize],
        }
    }

    pub fn rows_len(&self) -> usize {
        ROWS_PER_PATTERN
    }

    /// Get a reference to a cell.
    pub fn cell(&self, row: usize, channel: u8) -> &Cell {
        debug_assert!(row < ROWS_PER_PATTERN);
        debug_assert!(channel < self.channels);
        &self.data[row * self.channels as usize + channel as usize]
    }

    /// Get a mutable reference to a cell.
    pub fn cell_mut(&mut self, row: usize, channel: u8) -> &mut Cell {
        debug_assert!(row < ROWS_PER_PATTERN);
        debug_assert!(channel < self.channels);
        &mut self.data[row * self.channels as usize + channel as usize]
    }

    /// All cells in a row, channel 0 first.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.channels as usize;
        &self.data[start..start + self.channels as usize]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on a zero size
        self.data.chunks(self.channels.max(1) as usize)
    }

    /// Number of cells carrying a note.
    pub fn note_count(&self) -> usize {
        self.data.iter().filter(|c| c.has_note()).count()
    }
}
