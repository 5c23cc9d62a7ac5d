//! Period to note name lookup.

use core::fmt;

/// Amiga PAL periods for octaves 0-3, paired with their note names.
///
/// Only exact matches name a note. Finetuned or corrupted periods fall
/// through to [`NoteLabel::Raw`].
pub const PERIOD_TABLE: [(u16, &str); 48] = [
    (1712, "C-0"), (1616, "C#0"), (1524, "D-0"), (1440, "D#0"), (1356, "E-0"), (1280, "F-0"),
    (1208, "F#0"), (1140, "G-0"), (1076, "G#0"), (1016, "A-0"), (960, "A#0"), (906, "B-0"),
    (856, "C-1"), (808, "C#1"), (762, "D-1"), (720, "D#1"), (678, "E-1"), (640, "F-1"),
    (604, "F#1"), (570, "G-1"), (538, "G#1"), (508, "A-1"), (480, "A#1"), (453, "B-1"),
    (428, "C-2"), (404, "C#2"), (381, "D-2"), (360, "D#2"), (339, "E-2"), (320, "F-2"),
    (302, "F#2"), (285, "G-2"), (269, "G#2"), (254, "A-2"), (240, "A#2"), (226, "B-2"),
    (214, "C-3"), (202, "C#3"), (190, "D-3"), (180, "D#3"), (170, "E-3"), (160, "F-3"),
    (151, "F#3"), (143, "G-3"), (135, "G#3"), (127, "A-3"), (120, "A#3"), (113, "B-3"),
];

/// Look up the note name for an exact period value.
pub fn note_name(period: u16) -> Option<&'static str> {
    // Periods are strictly descending.
    PERIOD_TABLE
        .binary_search_by(|&(p, _)| period.cmp(&p))
        .ok()
        .map(|i| PERIOD_TABLE[i].1)
}

/// How the note column of a cell is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteLabel {
    /// No note (period 0)
    Rest,
    /// Period found in [`PERIOD_TABLE`]
    Named(&'static str),
    /// Nonzero period with no table entry
    Raw(u16),
}

impl NoteLabel {
    pub fn from_period(period: u16) -> Self {
        if period == 0 {
            return NoteLabel::Rest;
        }
        match note_name(period) {
            Some(name) => NoteLabel::Named(name),
            None => NoteLabel::Raw(period),
        }
    }
}

impl fmt::Display for NoteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteLabel::Rest => f.write_str("---"),
            NoteLabel::Named(name) => f.write_str(name),
            NoteLabel::Raw(period) => write!(f, "{:03}", period),
        }
    }
}
