//! Cell formatting.
//!
//! Every column has a fixed width so rows line up in monospace output:
//! note 3, instrument 2, effect 3.

use ms_ir::{Cell, NoteLabel};

/// Width of a formatted cell with a named or three-digit note.
pub const CELL_WIDTH: usize = 10;

pub fn format_cell(cell: &Cell) -> String {
    format!(
        "{} {} {}",
        format_note(cell.note()),
        format_instrument(cell.instrument),
        format_effect(cell.effect, cell.param),
    )
}

pub fn format_note(note: NoteLabel) -> String {
    note.to_string()
}

pub fn format_instrument(inst: u8) -> String {
    format!("{:02X}", inst)
}

pub fn format_effect(effect: u8, param: u8) -> String {
    format!("{:X}{:02X}", effect & 0x0F, param)
}

pub fn format_row_label(row: usize) -> String {
    format!("{:02}", row)
}

/// Column heading for a channel, e.g. "Ch 1".
pub fn format_channel_name(index: usize) -> String {
    format!("Ch {}", index + 1)
}
