//! HTML backend: one table per pattern page.

use std::io::Write;

use ms_ir::Instrument;

use crate::cell_format::format_channel_name;
use crate::sheet::{PageHeader, SheetSink};
use crate::RenderError;

const STYLE: &str = "body{font-family:monospace}\
table{border-collapse:collapse;margin-bottom:2em;page-break-after:always}\
td,th{border:1px solid #999;padding:0 .4em;white-space:pre}";

/// Writes a standalone HTML document.
pub struct HtmlSink<W: Write> {
    out: W,
}

impl<W: Write> HtmlSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SheetSink for HtmlSink<W> {
    fn begin_document(&mut self, title: &str) -> Result<(), RenderError> {
        let title = escape(title);
        writeln!(self.out, "<!DOCTYPE html>")?;
        writeln!(self.out, "<html><head><meta charset=\"utf-8\">")?;
        writeln!(self.out, "<title>{}</title>", title)?;
        writeln!(self.out, "<style>{}</style>", STYLE)?;
        writeln!(self.out, "</head><body>")?;
        writeln!(self.out, "<h1>{}</h1>", title)?;
        Ok(())
    }

    fn summary(&mut self, entries: &[(&str, String)]) -> Result<(), RenderError> {
        writeln!(self.out, "<dl>")?;
        for (key, value) in entries {
            writeln!(self.out, "<dt>{}</dt><dd>{}</dd>", escape(key), escape(value))?;
        }
        writeln!(self.out, "</dl>")?;
        Ok(())
    }

    fn instruments(&mut self, instruments: &[(usize, &Instrument)]) -> Result<(), RenderError> {
        if instruments.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "<h2>Instruments</h2>")?;
        writeln!(
            self.out,
            "<table><tr><th>#</th><th>Name</th><th>Length</th><th>Vol</th><th>Fine</th><th>Loop</th></tr>"
        )?;
        for (num, inst) in instruments {
            writeln!(
                self.out,
                "<tr><td>{:02X}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                num,
                escape(&inst.name),
                inst.length,
                inst.volume,
                inst.finetune,
                if inst.has_loop() { "yes" } else { "" },
            )?;
        }
        writeln!(self.out, "</table>")?;
        Ok(())
    }

    fn begin_page(&mut self, header: &PageHeader) -> Result<(), RenderError> {
        writeln!(
            self.out,
            "<h2 id=\"pos{}\">Pattern {}</h2>",
            header.position, header.pattern
        )?;
        write!(self.out, "<table><tr><th></th>")?;
        for ch in 0..header.channels as usize {
            write!(self.out, "<th>{}</th>", format_channel_name(ch))?;
        }
        writeln!(self.out, "</tr>")?;
        Ok(())
    }

    fn row(&mut self, label: &str, cells: &[String]) -> Result<(), RenderError> {
        write!(self.out, "<tr><th>{}</th>", escape(label))?;
        for cell in cells {
            write!(self.out, "<td>{}</td>", escape(cell))?;
        }
        writeln!(self.out, "</tr>")?;
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        writeln!(self.out, "</table>")?;
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), RenderError> {
        writeln!(self.out, "</body></html>")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Escape text for element content and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // control characters from title padding
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
