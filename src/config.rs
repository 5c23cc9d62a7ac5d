//! Export settings.
//!
//! Settings come from, in increasing priority: built-in defaults, a TOML
//! file, and command-line flags. The resolved [`Config`] is passed down
//! explicitly; nothing reads process-wide state after startup.
//!
//! ```toml
//! output_dir = "sheets"
//! format = "html"
//! page_breaks = false
//! summary = true
//! instrument_table = true
//! reveal = false
//! ```

use std::path::{Path, PathBuf};

use ms_render::{OutputFormat, RenderOptions};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE_NAME: &str = "modsheet.toml";

/// Default output folder, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where documents are written
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    /// Form feeds between text pages
    pub page_breaks: bool,
    pub summary: bool,
    pub instrument_table: bool,
    /// Open the output folder after a successful export
    pub reveal: bool,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            page_breaks: render.page_breaks,
            summary: render.summary,
            instrument_table: render.instrument_table,
            reveal: false,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must load. Otherwise [`CONFIG_FILE_NAME`] in `dir` is
    /// used if present, and defaults if not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            page_breaks: self.page_breaks,
            summary: self.summary,
            instrument_table: self.instrument_table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str("format = \"html\"\nreveal = true\n").unwrap();
        assert_eq!(config.format, OutputFormat::Html);
        assert!(config.reveal);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(config.summary);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml_str("colour = \"red\"").is_err());
        assert!(Config::from_toml_str("format = \"pdf\"").is_err());
    }

    #[test]
    fn render_options_follow_config() {
        let config = Config {
            page_breaks: true,
            summary: false,
            instrument_table: false,
            ..Config::default()
        };
        assert_eq!(
            config.render_options(),
            RenderOptions {
                page_breaks: true,
                summary: false,
                instrument_table: false,
            }
        );
    }
}
