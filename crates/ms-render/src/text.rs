//! Fixed-width text backend.

use std::io::Write;

use ms_ir::Instrument;

use crate::cell_format::{format_channel_name, CELL_WIDTH};
use crate::sheet::{PageHeader, SheetSink};
use crate::RenderError;

const FORM_FEED: char = '\x0C';

/// Writes pattern pages as plain monospace text.
///
/// ```text
/// Pattern 0
///    | Ch 1       | Ch 2       | Ch 3       | Ch 4
/// 00 | C-2 01 C40 | --- 00 000 | --- 00 000 | --- 00 000
/// ```
pub struct TextSink<W: Write> {
    out: W,
    page_breaks: bool,
    pages: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            page_breaks: false,
            pages: 0,
        }
    }

    /// Separate pages with a form feed instead of a blank line.
    pub fn with_page_breaks(mut self, page_breaks: bool) -> Self {
        self.page_breaks = page_breaks;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SheetSink for TextSink<W> {
    fn begin_document(&mut self, _title: &str) -> Result<(), RenderError> {
        Ok(())
    }

    fn summary(&mut self, entries: &[(&str, String)]) -> Result<(), RenderError> {
        for (key, value) in entries {
            writeln!(self.out, "{:<9} {}", format!("{}:", key), value)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn instruments(&mut self, instruments: &[(usize, &Instrument)]) -> Result<(), RenderError> {
        if instruments.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "Instruments:")?;
        for (num, inst) in instruments {
            writeln!(
                self.out,
                "{:02X}: {:<22} {:>6} {:>3} {:>3}{}",
                num,
                inst.name,
                inst.length,
                inst.volume,
                inst.finetune,
                if inst.has_loop() { " L" } else { "" },
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn begin_page(&mut self, header: &PageHeader) -> Result<(), RenderError> {
        if self.pages > 0 {
            if self.page_breaks {
                writeln!(self.out, "{}", FORM_FEED)?;
            } else {
                writeln!(self.out)?;
            }
        }
        self.pages += 1;

        writeln!(self.out, "Pattern {}", header.pattern)?;
        write!(self.out, "  ")?;
        for ch in 0..header.channels as usize {
            write!(self.out, " | {:<width$}", format_channel_name(ch), width = CELL_WIDTH)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn row(&mut self, label: &str, cells: &[String]) -> Result<(), RenderError> {
        write!(self.out, "{}", label)?;
        for cell in cells {
            write!(self.out, " | {:<width$}", cell, width = CELL_WIDTH)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), RenderError> {
        self.out.flush()?;
        Ok(())
    }
}
