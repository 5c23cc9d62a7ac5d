//! Open the output folder in the desktop file manager.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum RevealError {
    #[error("no output folder at {}", .0.display())]
    Missing(PathBuf),
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn reveal_folder(dir: &Path) -> Result<(), RevealError> {
    if !dir.is_dir() {
        return Err(RevealError::Missing(dir.to_path_buf()));
    }
    tracing::info!(path = %dir.display(), "opening output folder");
    open::that(dir).map_err(|source| RevealError::Open {
        path: dir.to_path_buf(),
        source,
    })
}
