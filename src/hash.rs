use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{FileInfoError, Result};

/// SHA-256 of the whole file at `path`, as lowercase hex.
pub fn sha256_file_hex(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| FileInfoError::file_access("open", path, e))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|e| FileInfoError::file_access("read", path, e))?;
    Ok(hex::encode(hasher.finalize()))
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
