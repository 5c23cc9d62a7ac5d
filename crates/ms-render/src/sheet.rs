//! Order-list traversal and the output sink trait.

use ms_ir::{Instrument, ModuleData, ROWS_PER_PATTERN};
use tracing::{debug, trace};

use crate::cell_format::{format_cell, format_row_label};
use crate::RenderError;

/// Page header passed to sinks for each order position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageHeader {
    /// Position in the order list
    pub position: usize,
    /// Storage index of the pattern
    pub pattern: u8,
    /// Channels per row
    pub channels: u8,
}

/// Optional sections around the pattern pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Form feed between text pages instead of a blank line
    pub page_breaks: bool,
    /// Title, variant and counts before the first page
    pub summary: bool,
    /// List of named instruments before the first page
    pub instrument_table: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_breaks: false,
            summary: true,
            instrument_table: true,
        }
    }
}

impl RenderOptions {
    /// Pattern pages only.
    pub fn patterns_only() -> Self {
        Self {
            page_breaks: false,
            summary: false,
            instrument_table: false,
        }
    }
}

/// What a render pass produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub pages: usize,
    /// Order entries pointing at patterns that were not decoded
    pub skipped: usize,
}

/// Trait for document backends.
///
/// [`render`] drives the calls in document order: `begin_document`, then the
/// optional `summary` and `instruments` sections, then `begin_page` / `row`
/// / `end_page` for each page, then `end_document`.
pub trait SheetSink {
    fn begin_document(&mut self, title: &str) -> Result<(), RenderError>;

    /// Key/value lines describing the module.
    fn summary(&mut self, entries: &[(&str, String)]) -> Result<(), RenderError>;

    /// Named instruments with their 1-based numbers.
    fn instruments(&mut self, instruments: &[(usize, &Instrument)]) -> Result<(), RenderError>;

    fn begin_page(&mut self, header: &PageHeader) -> Result<(), RenderError>;

    /// One row: the 2-digit label then one formatted cell per channel.
    fn row(&mut self, label: &str, cells: &[String]) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    fn end_document(&mut self) -> Result<(), RenderError>;
}

/// Render a module into a sink, one page per order position.
///
/// Order entries that reference a pattern past the end of the decoded
/// pattern list are skipped.
pub fn render<S: SheetSink + ?Sized>(
    module: &ModuleData,
    sink: &mut S,
    options: &RenderOptions,
) -> Result<RenderStats, RenderError> {
    let mut stats = RenderStats::default();

    sink.begin_document(module.title.as_str())?;

    if options.summary {
        sink.summary(&summary_entries(module))?;
    }

    if options.instrument_table {
        let named: Vec<(usize, &Instrument)> = module
            .instruments
            .iter()
            .enumerate()
            .filter(|(_, inst)| !inst.is_empty())
            .map(|(i, inst)| (i + 1, inst))
            .collect();
        sink.instruments(&named)?;
    }

    for position in 0..module.order.len() {
        let Some((index, pattern)) = module.pattern_for_position(position) else {
            trace!(position, pattern = module.order[position], "skipping missing pattern");
            stats.skipped += 1;
            continue;
        };

        sink.begin_page(&PageHeader {
            position,
            pattern: index,
            channels: pattern.channels,
        })?;

        let mut cells = Vec::with_capacity(pattern.channels as usize);
        for (row_idx, row) in pattern.rows().enumerate().take(ROWS_PER_PATTERN) {
            cells.clear();
            cells.extend(row.iter().map(format_cell));
            sink.row(&format_row_label(row_idx), &cells)?;
        }

        sink.end_page()?;
        stats.pages += 1;
    }

    sink.end_document()?;
    debug!(pages = stats.pages, skipped = stats.skipped, "rendered pattern sheet");
    Ok(stats)
}

fn summary_entries(module: &ModuleData) -> Vec<(&'static str, String)> {
    let format = match module.variant.tag() {
        Some(tag) => format!("31 instruments, tag \"{}\"", tag),
        None => "15 instruments, no tag".to_string(),
    };
    let patterns = if module.is_truncated() {
        format!(
            "{} of {} (file truncated)",
            module.patterns.len(),
            module.pattern_count_declared()
        )
    } else {
        module.patterns.len().to_string()
    };

    vec![
        ("Title", module.title.to_string()),
        ("Format", format),
        ("Channels", module.channels.to_string()),
        ("Orders", module.order.len().to_string()),
        ("Patterns", patterns),
        ("Notes", module.note_count().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_ir::{FormatVariant, Pattern};

    /// Records sink calls as strings.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl SheetSink for Recorder {
        fn begin_document(&mut self, title: &str) -> Result<(), RenderError> {
            self.events.push(format!("doc {}", title));
            Ok(())
        }

        fn summary(&mut self, entries: &[(&str, String)]) -> Result<(), RenderError> {
            for (k, v) in entries {
                self.events.push(format!("{}: {}", k, v));
            }
            Ok(())
        }

        fn instruments(&mut self, instruments: &[(usize, &Instrument)]) -> Result<(), RenderError> {
            for (n, inst) in instruments {
                self.events.push(format!("inst {} {}", n, inst.name));
            }
            Ok(())
        }

        fn begin_page(&mut self, header: &PageHeader) -> Result<(), RenderError> {
            self.events.push(format!("page {} pat {}", header.position, header.pattern));
            Ok(())
        }

        fn row(&mut self, label: &str, cells: &[String]) -> Result<(), RenderError> {
            self.events.push(format!("{} {}", label, cells.join("|")));
            Ok(())
        }

        fn end_page(&mut self) -> Result<(), RenderError> {
            self.events.push("end page".to_string());
            Ok(())
        }

        fn end_document(&mut self) -> Result<(), RenderError> {
            self.events.push("end doc".to_string());
            Ok(())
        }
    }

    fn two_pattern_module() -> ModuleData {
        let mut module = ModuleData::new("demo", FormatVariant::Legacy15);
        let mut p0 = Pattern::new(4);
        p0.cell_mut(0, 0).period = 428;
        let mut p1 = Pattern::new(4);
        p1.cell_mut(5, 3).param = 0x12;
        module.patterns = vec![p0, p1];
        module
    }

    #[test]
    fn pages_follow_order_list() {
        let mut module = two_pattern_module();
        module.order = vec![1, 0, 1];

        let mut sink = Recorder::default();
        let stats = render(&module, &mut sink, &RenderOptions::patterns_only()).unwrap();

        assert_eq!(stats, RenderStats { pages: 3, skipped: 0 });
        let pages: Vec<&String> = sink.events.iter().filter(|e| e.starts_with("page")).collect();
        assert_eq!(pages, ["page 0 pat 1", "page 1 pat 0", "page 2 pat 1"]);
        // 3 pages * (header + 64 rows + end) + doc start/end
        assert_eq!(sink.events.len(), 3 * 66 + 2);
    }

    #[test]
    fn row_contents() {
        let mut module = two_pattern_module();
        module.order = vec![0];

        let mut sink = Recorder::default();
        render(&module, &mut sink, &RenderOptions::patterns_only()).unwrap();

        assert_eq!(sink.events[2], "00 C-2 00 000|--- 00 000|--- 00 000|--- 00 000");
        assert_eq!(sink.events[65], "63 --- 00 000|--- 00 000|--- 00 000|--- 00 000");
    }

    #[test]
    fn missing_patterns_are_skipped() {
        let mut module = two_pattern_module();
        module.order = vec![0, 7, 1, 2];

        let mut sink = Recorder::default();
        let stats = render(&module, &mut sink, &RenderOptions::patterns_only()).unwrap();

        assert_eq!(stats, RenderStats { pages: 2, skipped: 2 });
        assert!(sink.events.contains(&"page 2 pat 1".to_string()));
        assert!(!sink.events.iter().any(|e| e.contains("pat 7")));
    }

    #[test]
    fn summary_and_instruments() {
        let mut module = two_pattern_module();
        module.order = vec![0, 1, 2];
        module.instruments = vec![Instrument::new("kick"), Instrument::default(), Instrument::new("snare")];

        let mut sink = Recorder::default();
        render(&module, &mut sink, &RenderOptions::default()).unwrap();

        assert!(sink.events.contains(&"Title: demo".to_string()));
        assert!(sink.events.contains(&"Patterns: 2 of 3 (file truncated)".to_string()));
        assert!(sink.events.contains(&"Format: 15 instruments, no tag".to_string()));
        assert!(sink.events.contains(&"inst 1 kick".to_string()));
        assert!(sink.events.contains(&"inst 3 snare".to_string()));
        assert!(!sink.events.iter().any(|e| e.starts_with("inst 2")));
    }

    #[test]
    fn empty_order_list_renders_no_pages() {
        let module = two_pattern_module();
        let mut sink = Recorder::default();
        let stats = render(&module, &mut sink, &RenderOptions::patterns_only()).unwrap();
        assert_eq!(stats.pages, 0);
        assert_eq!(sink.events, ["doc demo", "end doc"]);
    }
}
