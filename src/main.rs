//! modsheet CLI: dump a MOD file's patterns as a text or HTML sheet.
//!
//! Usage:
//!   modsheet path/to/file.mod
//!   modsheet path/to/file.mod --format html --open
//!   modsheet path/to/file.mod --stdout

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use modsheet::config::Config;
use modsheet::export::{export, Destination, ExportError};
use modsheet::reveal::{reveal_folder, RevealError};
use ms_render::OutputFormat;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Dump ProTracker MOD patterns as printable pattern sheets
#[derive(Parser, Debug)]
#[command(name = "modsheet", version, about)]
struct Cli {
    /// MOD file to read
    file: Option<PathBuf>,

    /// Folder for the rendered document
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Document format: text or html
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the document to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Open the output folder when done
    #[arg(long)]
    open: bool,

    /// Config file (default: ./modsheet.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Separate text pages with form feeds
    #[arg(long)]
    page_breaks: bool,

    /// Leave out the module summary
    #[arg(long)]
    no_summary: bool,

    /// Leave out the instrument list
    #[arg(long)]
    no_instruments: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Flags win over the config file.
    fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.open {
            config.reveal = true;
        }
        if self.page_breaks {
            config.page_breaks = true;
        }
        if self.no_summary {
            config.summary = false;
        }
        if self.no_instruments {
            config.instrument_table = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("Could not determine working directory")?;
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;
    cli.apply(&mut config);

    let Some(input) = input_file(&cli) else {
        bail!("No file selected. Pass a .mod file to convert.");
    };

    let destination = if cli.stdout {
        Destination::Stdout
    } else {
        Destination::Folder(config.output_dir.clone())
    };

    let report = export(&input, &destination, config.format, &config.render_options())
        .map_err(|e| {
            let context = match &e {
                ExportError::Read { path, .. } => format!("Could not read file {}", path.display()),
                ExportError::Decode(_) => format!("Failed to parse MOD file {}", input.display()),
                ExportError::Render(_) => "Failed to render pattern sheet".to_string(),
                ExportError::Write { path, .. } => format!("Failed to save {}", path.display()),
            };
            anyhow::Error::new(e).context(context)
        })?;

    if report.stats.skipped > 0 {
        warn!(
            skipped = report.stats.skipped,
            "order entries point at patterns missing from the file"
        );
    }
    if let Some(path) = &report.written {
        info!(pages = report.stats.pages, "patterns saved in {}", path.display());
    }

    if config.reveal && !cli.stdout {
        match reveal_folder(&config.output_dir) {
            Ok(()) => {}
            Err(e @ RevealError::Missing(_)) => info!("{}", e),
            Err(e) => warn!("{}", e),
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "dialog")]
fn input_file(cli: &Cli) -> Option<PathBuf> {
    cli.file.clone().or_else(modsheet::pick::pick_mod_file)
}

#[cfg(not(feature = "dialog"))]
fn input_file(cli: &Cli) -> Option<PathBuf> {
    cli.file.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "modsheet",
            "song.mod",
            "-o",
            "sheets",
            "--format",
            "html",
            "--no-summary",
            "--open",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.output_dir, PathBuf::from("sheets"));
        assert_eq!(config.format, OutputFormat::Html);
        assert!(!config.summary);
        assert!(config.instrument_table);
        assert!(config.reveal);
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::parse_from(["modsheet", "song.mod"]);
        let mut config = Config {
            format: OutputFormat::Html,
            page_breaks: true,
            ..Config::default()
        };
        cli.apply(&mut config);

        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.page_breaks);
        assert_eq!(cli.file, Some(PathBuf::from("song.mod")));
    }

    #[test]
    fn bad_format_is_rejected() {
        assert!(Cli::try_parse_from(["modsheet", "song.mod", "-f", "pdf"]).is_err());
    }
}
