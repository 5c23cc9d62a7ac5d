//! Bounds-checked access to a MOD buffer.
//!
//! MOD offsets are absolute, so unlike a cursor this reader only answers
//! "what is at offset N". Anything past the end comes back as `None` and the
//! caller decides how to degrade.

pub(crate) struct ModReader<'a> {
    data: &'a [u8],
}

impl<'a> ModReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn byte(&self, ofs: usize) -> Option<u8> {
        self.data.get(ofs).copied()
    }

    /// Exactly `len` bytes at `ofs`, or `None` if they run past the end.
    pub fn slice(&self, ofs: usize, len: usize) -> Option<&'a [u8]> {
        let end = ofs.checked_add(len)?;
        self.data.get(ofs..end)
    }

    /// Up to `len` bytes at `ofs`, cut short at the end of the buffer.
    pub fn slice_clamped(&self, ofs: usize, len: usize) -> &'a [u8] {
        let start = ofs.min(self.data.len());
        let end = ofs.saturating_add(len).min(self.data.len());
        &self.data[start..end]
    }
}
