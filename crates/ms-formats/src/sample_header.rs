//! Instrument (sample header) records.

use binrw::io::Cursor;
use binrw::{BinRead, BinResult};
use ms_ir::Instrument;

/// Size of one header record in the instrument table.
pub(crate) const SAMPLE_HEADER_LEN: usize = 30;

/// On-disk layout of a sample header. Lengths are in 16-bit words.
#[derive(BinRead, Debug)]
#[br(big)]
struct SampleHeader {
    name: [u8; 22],
    length: u16,
    finetune: u8,
    volume: u8,
    loop_start: u16,
    loop_length: u16,
}

/// Decode one 30-byte record.
pub(crate) fn parse_sample_header(data: &[u8]) -> BinResult<Instrument> {
    let header = SampleHeader::read(&mut Cursor::new(data))?;

    let mut inst = Instrument::new(&parse_text(&header.name));
    inst.length = header.length as u32 * 2;
    inst.finetune = signed_nibble(header.finetune);
    inst.volume = header.volume;
    inst.loop_start = header.loop_start as u32 * 2;
    inst.loop_length = header.loop_length as u32 * 2;
    Ok(inst)
}

/// ASCII text from a fixed-width field: non-ASCII bytes dropped, trailing
/// NULs stripped.
pub(crate) fn parse_text(field: &[u8]) -> String {
    let text: String = field
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();
    text.trim_end_matches('\0').to_string()
}

fn signed_nibble(b: u8) -> i8 {
    let v = (b & 0x0F) as i8;
    if v > 7 {
        v - 16
    } else {
        v
    }
}
