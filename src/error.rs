use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while building a [`FileMetadataReader`](crate::FileMetadataReader)
/// or hashing its file.
#[derive(Debug, Error)]
pub enum FileInfoError {
    /// The file carries no version-resource block, or it could not be located.
    #[error("unable to get file version information from '{path}': {reason}")]
    ResourceMissing { path: PathBuf, reason: String },

    /// A version-resource block exists but lists no language/codepage pair.
    #[error("no translations found in version information of '{path}'")]
    TranslationMissing { path: PathBuf },

    #[error("unable to {operation} file '{path}': {source}")]
    FileAccess {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileInfoError {
    pub(crate) fn resource_missing(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ResourceMissing {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn file_access(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileAccess {
            operation,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileInfoError>;
