//! Whole-file export: read, decode, render, write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ms_formats::FormatError;
use ms_ir::ModuleData;
use ms_render::{render_to_bytes, OutputFormat, RenderError, RenderOptions, RenderStats};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a valid module: {0}")]
    Decode(#[from] FormatError),
    #[error("failed to render: {0}")]
    Render(#[from] RenderError),
    #[error("failed to save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a rendered document goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// `<dir>/<input stem>.<ext>`, creating `dir` if needed
    Folder(PathBuf),
    Stdout,
}

#[derive(Debug)]
pub struct ExportReport {
    pub module: ModuleData,
    pub stats: RenderStats,
    /// File written, if any
    pub written: Option<PathBuf>,
}

/// Output path for an input file: same stem, format extension.
pub fn output_path(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "module".to_string());
    output_dir.join(format!("{}.{}", stem, format.extension()))
}

pub fn read_module(path: &Path) -> Result<ModuleData, ExportError> {
    let data = fs::read(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ms_formats::load_mod(&data)?)
}

/// Export one MOD file.
pub fn export(
    input: &Path,
    destination: &Destination,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<ExportReport, ExportError> {
    let module = read_module(input)?;
    info!(
        title = module.title.as_str(),
        channels = module.channels,
        patterns = module.patterns.len(),
        "loaded module"
    );

    let (document, stats) = render_to_bytes(&module, format, options)?;

    let written = match destination {
        Destination::Stdout => {
            let mut out = std::io::stdout().lock();
            out.write_all(&document)
                .and_then(|_| out.flush())
                .map_err(|source| ExportError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
            None
        }
        Destination::Folder(dir) => {
            let path = output_path(input, dir, format);
            fs::create_dir_all(dir)
                .and_then(|_| fs::write(&path, &document))
                .map_err(|source| ExportError::Write {
                    path: path.clone(),
                    source,
                })?;
            Some(path)
        }
    };

    Ok(ExportReport {
        module,
        stats,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_extension() {
        let path = output_path(Path::new("/music/kawaik1.mod"), Path::new("out"), OutputFormat::Text);
        assert_eq!(path, PathBuf::from("out/kawaik1.txt"));

        let path = output_path(Path::new("mod.noise"), Path::new("out"), OutputFormat::Html);
        assert_eq!(path, PathBuf::from("out/mod.html"));
    }

    #[test]
    fn output_path_without_stem() {
        let path = output_path(Path::new("/"), Path::new("out"), OutputFormat::Text);
        assert_eq!(path, PathBuf::from("out/module.txt"));
    }
}
