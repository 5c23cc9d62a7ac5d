//! MOD layout variants.

use arrayvec::ArrayString;

/// Layout family of a MOD file, as inferred from its signature region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatVariant {
    /// Original Soundtracker layout: 15 instruments, 4 channels, no tag
    Legacy15,
    /// 31 instruments with a 4-byte printable tag at offset 1080
    Extended31 {
        channels: u8,
        tag: ArrayString<4>,
    },
}

impl FormatVariant {
    pub const fn instrument_count(&self) -> usize {
        match self {
            FormatVariant::Legacy15 => 15,
            FormatVariant::Extended31 { .. } => 31,
        }
    }

    pub const fn channels(&self) -> u8 {
        match self {
            FormatVariant::Legacy15 => 4,
            FormatVariant::Extended31 { channels, .. } => *channels,
        }
    }

    pub const fn has_signature_tag(&self) -> bool {
        matches!(self, FormatVariant::Extended31 { .. })
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            FormatVariant::Legacy15 => None,
            FormatVariant::Extended31 { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Size in bytes of everything before the first pattern.
    pub const fn header_len(&self) -> usize {
        let tag_len = if self.has_signature_tag() { 4 } else { 0 };
        20 + self.instrument_count() * 30 + 2 + 128 + tag_len
    }

    /// Size in bytes of one stored pattern.
    pub const fn pattern_len(&self) -> usize {
        crate::pattern::ROWS_PER_PATTERN * self.channels() as usize * 4
    }
}
