use std::fs::{File, Metadata};
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{FileInfoError, Result};

/// File-system metadata captured when a reader is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStat {
    pub size: u64,
    pub modified: DateTime<Local>,
    /// Birth time, when the platform and file system record one.
    pub created: Option<DateTime<Local>>,
}

impl FileStat {
    /// Opens `path` and stats the open handle.
    pub fn capture(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| FileInfoError::file_access("open", path, e))?;
        let metadata = file
            .metadata()
            .map_err(|e| FileInfoError::file_access("stat", path, e))?;
        Self::from_metadata(path, &metadata)
    }

    pub fn from_metadata(path: &Path, metadata: &Metadata) -> Result<Self> {
        let modified = metadata
            .modified()
            .map_err(|e| FileInfoError::file_access("stat", path, e))?;
        Ok(FileStat {
            size: metadata.len(),
            modified: modified.into(),
            created: metadata.created().ok().map(DateTime::<Local>::from),
        })
    }

    pub fn has_creation_time(&self) -> bool {
        self.created.is_some()
    }
}
