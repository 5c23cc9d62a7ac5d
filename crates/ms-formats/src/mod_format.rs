//! ProTracker MOD format decoder.
//!
//! Layout, with `n` = 15 or 31 instruments:
//!
//! ```text
//! 0               title (20 bytes)
//! 20              n instrument headers (30 bytes each)
//! 20 + n*30       song length
//! 20 + n*30 + 1   restart byte (ignored)
//! 20 + n*30 + 2   order table (128 bytes)
//! 20 + n*30 + 130 signature tag (4 bytes, 31-instrument layouts only)
//! ...             patterns (64 rows * channels * 4 bytes each)
//! ```

use ms_ir::{Cell, FormatVariant, Instrument, ModuleData, Pattern, MAX_ORDERS, TITLE_LEN};
use tracing::{debug, warn};

use crate::reader::ModReader;
use crate::sample_header::{parse_sample_header, parse_text, SAMPLE_HEADER_LEN};
use crate::signature::detect_variant;
use crate::FormatError;

/// Smallest buffer the decoder accepts.
pub const MIN_MODULE_LEN: usize = TITLE_LEN;

/// Load a MOD file from bytes.
///
/// Only a buffer too short for the title is an error. A missing song length
/// reads as zero, a cut-off order table keeps the entries present, and
/// patterns that do not fit in the buffer are dropped from the end.
pub fn load_mod(data: &[u8]) -> Result<ModuleData, FormatError> {
    if data.len() < MIN_MODULE_LEN {
        return Err(FormatError::TooShort { len: data.len() });
    }

    let reader = ModReader::new(data);
    let variant = detect_variant(data);
    debug!(
        tag = variant.tag().unwrap_or("none"),
        channels = variant.channels(),
        instruments = variant.instrument_count(),
        "detected MOD variant"
    );

    let title = parse_text(&data[..TITLE_LEN]);
    let mut module = ModuleData::new(&title, variant);
    module.instruments = parse_instruments(&reader, &variant);

    // Order list
    let song_length_offset = TITLE_LEN + variant.instrument_count() * SAMPLE_HEADER_LEN;
    let song_length = reader.byte(song_length_offset).unwrap_or(0) as usize;
    module.order = reader
        .slice_clamped(song_length_offset + 2, MAX_ORDERS)
        .iter()
        .take(song_length)
        .copied()
        .collect();
    debug!(song_length, orders = module.order.len(), "read order list");

    module.patterns = parse_patterns(&reader, &variant, module.pattern_count_declared());
    if module.is_truncated() {
        warn!(
            decoded = module.patterns.len(),
            declared = module.pattern_count_declared(),
            "pattern data truncated"
        );
    }

    Ok(module)
}

/// Parse the instrument table, skipping records cut off by the end of file.
fn parse_instruments(reader: &ModReader, variant: &FormatVariant) -> Vec<Instrument> {
    (0..variant.instrument_count())
        .map_while(|i| reader.slice(TITLE_LEN + i * SAMPLE_HEADER_LEN, SAMPLE_HEADER_LEN))
        .filter_map(|record| parse_sample_header(record).ok())
        .collect()
}

/// Parse up to `count` patterns, stopping at the first one that does not
/// fit in the buffer.
fn parse_patterns(reader: &ModReader, variant: &FormatVariant, count: usize) -> Vec<Pattern> {
    let base = variant.header_len();
    let pattern_len = variant.pattern_len();
    let mut patterns = Vec::with_capacity(count);

    for idx in 0..count {
        let offset = base + idx * pattern_len;
        let Some(bytes) = reader.slice(offset, pattern_len) else {
            debug!(pattern = idx, offset, len = reader.len(), "pattern runs past end of file");
            break;
        };
        patterns.push(parse_pattern(bytes, variant.channels()));
    }

    patterns
}

/// Parse one pattern's worth of cell records.
fn parse_pattern(data: &[u8], channels: u8) -> Pattern {
    Pattern {
        channels,
        data: data
            .chunks_exact(4)
            .map(|b| Cell::from_bytes([b[0], b[1], b[2], b[3]]))
            .collect(),
    }
}
