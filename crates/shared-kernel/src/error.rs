// crates/shared-kernel/src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DirlsError {
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, DirlsError>;

impl DirlsError {
    pub fn infrastructure(&self) -> &InfrastructureError {
        match self {
            Self::Infrastructure(err) => err,
        }
    }
}

/// Filesystem and output errors raised while producing a listing.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// The path is missing, or names a regular or special file.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The entry was enumerated but no longer exists at metadata-query time.
    #[error("Entry '{path}' vanished before it could be described: {source}")]
    EntryVanished {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied while querying '{path}': {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to query metadata of '{path}': {source}")]
    MetadataQuery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl InfrastructureError {
    /// Classifies an I/O error raised by a metadata query on `path`.
    pub fn from_metadata_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::EntryVanished { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::MetadataQuery { path, source },
        }
    }
}

impl From<io::Error> for InfrastructureError {
    fn from(err: io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<io::Error> for DirlsError {
    fn from(err: io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}
