//! Instrument header types.

use arrayvec::ArrayString;

/// One sample header from the instrument table.
///
/// Lengths and loop points are stored in bytes, already doubled from the
/// word counts found in the file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instrument {
    /// Instrument name
    pub name: ArrayString<22>,
    /// Sample length in bytes
    pub length: u32,
    /// Finetune (-8 to 7)
    pub finetune: i8,
    /// Default volume as stored (0-64 in valid files)
    pub volume: u8,
    /// Loop start in bytes
    pub loop_start: u32,
    /// Loop length in bytes
    pub loop_length: u32,
}

impl Instrument {
    pub fn new(name: &str) -> Self {
        let mut inst = Self::default();
        let _ = inst.name.try_push_str(name);
        inst
    }

    /// Loops of one word or less are the "no loop" marker.
    pub fn has_loop(&self) -> bool {
        self.loop_length > 2
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.length == 0
    }
}
