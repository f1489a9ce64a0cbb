//! Storage helpers for writing static assets to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::assets::{Asset, STATIC_ASSETS};

/// Errors that can occur while materializing assets.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl StorageError {
    /// The path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDir { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::CreateDir { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }
}

/// Write `contents` to `path`, creating missing parent directories first.
///
/// Existing files are truncated and replaced.
pub fn write_asset(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            tracing::debug!("Creating directory {}", parent.display());
        }
        fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents.as_ref()).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a set of assets beneath `root`, stopping at the first failure.
///
/// Returns the destination paths in write order.
pub fn write_assets(root: &Path, assets: &[Asset]) -> Result<Vec<PathBuf>, StorageError> {
    let mut written = Vec::with_capacity(assets.len());
    for asset in assets {
        let dest = asset.destination(root);
        write_asset(&dest, asset.contents)?;
        tracing::info!("Wrote {} ({} bytes)", dest.display(), asset.contents.len());
        written.push(dest);
    }
    Ok(written)
}

/// Write every bundled static asset beneath `root`.
pub fn write_static_assets(root: &Path) -> Result<Vec<PathBuf>, StorageError> {
    write_assets(root, STATIC_ASSETS)
}
