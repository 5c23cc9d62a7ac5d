//! Pattern sheet rendering for modsheet.
//!
//! Walks a decoded module's order list and lays each referenced pattern out
//! as a fixed-width grid. Backends implement [`SheetSink`].

mod cell_format;
mod html;
mod sheet;
mod text;

use std::fmt;
use std::str::FromStr;

use ms_ir::ModuleData;
use serde::{Deserialize, Serialize};

pub use cell_format::{
    format_cell, format_channel_name, format_effect, format_instrument, format_note,
    format_row_label, CELL_WIDTH,
};
pub use html::HtmlSink;
pub use sheet::{render, PageHeader, RenderOptions, RenderStats, SheetSink};
pub use text::TextSink;

/// Error type for rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Output sink could not be written
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    /// Requested output kind is not available
    #[error("unsupported output format: {0}")]
    Unsupported(String),
}

/// Document formats with a built-in sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    /// File extension for documents in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" | "htm" => Ok(OutputFormat::Html),
            other => Err(RenderError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Html => f.write_str("html"),
        }
    }
}

/// Render a whole document into memory.
pub fn render_to_bytes(
    module: &ModuleData,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<(Vec<u8>, RenderStats), RenderError> {
    match format {
        OutputFormat::Text => {
            let mut sink = TextSink::new(Vec::new()).with_page_breaks(options.page_breaks);
            let stats = render(module, &mut sink, options)?;
            Ok((sink.into_inner(), stats))
        }
        OutputFormat::Html => {
            let mut sink = HtmlSink::new(Vec::new());
            let stats = render(module, &mut sink, options)?;
            Ok((sink.into_inner(), stats))
        }
    }
}

/// Render a whole document into a string.
pub fn render_to_string(
    module: &ModuleData,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let (bytes, _) = render_to_bytes(module, format, options)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
