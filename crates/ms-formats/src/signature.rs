//! Signature tag sniffing.
//!
//! There is no version field in a MOD file. The four bytes at offset 1080
//! either hold a printable tag (31-instrument layouts) or the start of
//! pattern data (15-instrument Soundtracker layout). The tag table is
//! permissive: anything printable counts as a tag, and channel counts that
//! fail to parse fall back to 4.

use arrayvec::ArrayString;
use ms_ir::FormatVariant;

/// Offset of the 4-byte signature region.
pub const SIGNATURE_OFFSET: usize = 1080;

const DEFAULT_CHANNELS: u8 = 4;

/// Infer the layout variant of a MOD buffer.
pub fn detect_variant(data: &[u8]) -> FormatVariant {
    let Some(sig) = data.get(SIGNATURE_OFFSET..SIGNATURE_OFFSET + 4) else {
        return FormatVariant::Legacy15;
    };

    if !sig.iter().all(|b| (0x20..=0x7E).contains(b)) {
        return FormatVariant::Legacy15;
    }

    let mut tag = ArrayString::<4>::new();
    for &b in sig {
        tag.push(b as char);
    }

    FormatVariant::Extended31 {
        channels: channels_from_tag(&tag),
        tag,
    }
}

/// Channel count for a printable signature tag.
pub fn channels_from_tag(tag: &str) -> u8 {
    match tag {
        "M.K." | "M!K!" | "4CHN" | "FLT4" => 4,
        "6CHN" => 6,
        "8CHN" | "FLT8" => 8,
        _ => {
            if let Some(digits) = tag.strip_suffix("CH") {
                parse_channels(digits)
            } else if let Some(digits) = tag.strip_suffix("CHN") {
                parse_channels(digits)
            } else {
                DEFAULT_CHANNELS
            }
        }
    }
}

fn parse_channels(digits: &str) -> u8 {
    digits
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_CHANNELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_tag(tag: &[u8; 4]) -> Vec<u8> {
        let mut data = vec![0u8; 1084];
        data[1080..1084].copy_from_slice(tag);
        data
    }

    #[test]
    fn known_tags() {
        let cases: [(&[u8; 4], u8); 7] = [
            (b"M.K.", 4),
            (b"M!K!", 4),
            (b"4CHN", 4),
            (b"FLT4", 4),
            (b"6CHN", 6),
            (b"8CHN", 8),
            (b"FLT8", 8),
        ];
        for (tag, channels) in cases {
            let v = detect_variant(&with_tag(tag));
            assert_eq!(v.channels(), channels, "tag {:?}", tag);
            assert_eq!(v.instrument_count(), 31);
            assert_eq!(v.tag().map(str::as_bytes), Some(&tag[..]));
        }
    }

    #[test]
    fn numeric_ch_tags() {
        assert_eq!(channels_from_tag("10CH"), 10);
        assert_eq!(channels_from_tag("16CH"), 16);
        assert_eq!(channels_from_tag("32CH"), 32);
        assert_eq!(channels_from_tag(" 2CH"), 2);
    }

    #[test]
    fn numeric_chn_tags() {
        assert_eq!(channels_from_tag("2CHN"), 2);
        assert_eq!(channels_from_tag("5CHN"), 5);
        assert_eq!(channels_from_tag("7CHN"), 7);
    }

    #[test]
    fn unparseable_numeric_tags_fall_back_to_four() {
        assert_eq!(channels_from_tag("XXCH"), 4);
        assert_eq!(channels_from_tag("XCHN"), 4);
        assert_eq!(channels_from_tag("00CH"), 4);
        assert_eq!(channels_from_tag("-1CH"), 4);

        let v = detect_variant(&with_tag(b"XXCH"));
        assert_eq!(v.instrument_count(), 31);
        assert_eq!(v.channels(), 4);
    }

    #[test]
    fn unknown_printable_tag_is_extended() {
        for tag in [b"CD81", b"OCTA", b"N.T.", b"    "] {
            let v = detect_variant(&with_tag(tag));
            assert!(v.has_signature_tag());
            assert_eq!(v.instrument_count(), 31);
            assert_eq!(v.channels(), 4);
        }
    }

    #[test]
    fn non_printable_signature_is_legacy() {
        for tag in [b"\0\0\0\0", b"M.K\x7f", b"\x1fCHN", b"M.K\x80"] {
            assert_eq!(detect_variant(&with_tag(tag)), FormatVariant::Legacy15);
        }
    }

    #[test]
    fn short_buffer_is_legacy() {
        let mut data = vec![b'M'; 1083];
        data[1079..].copy_from_slice(b"M.K.");
        assert_eq!(detect_variant(&data), FormatVariant::Legacy15);
        assert_eq!(detect_variant(&[]), FormatVariant::Legacy15);
    }
}
