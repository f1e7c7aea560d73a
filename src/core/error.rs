//! Errors raised while resolving input paths

use std::io;
use std::path::{Path, PathBuf};

/// A user-supplied path (or a path found beneath it) that could not be resolved
///
/// Every variant names the offending path so it can be shown to the user as is.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Specified path does not exist - {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Specified path is not accessible ({source}) - {}", .path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Specified path is neither a file nor a directory - {}", .path.display())]
    Unsupported { path: PathBuf },
}

impl DiscoveryError {
    /// Classify an I/O failure on `path`
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Inaccessible { path, source }
        }
    }

    /// The path this error is about
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Inaccessible { path, .. }
            | Self::Unsupported { path } => path,
        }
    }
}

/// Result type for discovery operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
