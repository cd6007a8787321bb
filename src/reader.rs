use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{debug, warn};

use crate::constants::*;
use crate::error::{FileInfoError, Result};
use crate::hash::sha256_file_hex;
use crate::pe::{self, align_to_dword, VersionResource};
use crate::stat::FileStat;
use crate::translation::Translation;
use crate::version_info::{FixedFileInfo, VersionBlock};

/// Version-resource metadata of one executable or DLL.
///
/// Built once per path; every accessor afterwards reads captured state,
/// except [`content_hash`](Self::content_hash) which re-reads the file.
#[derive(Debug, Clone)]
pub struct FileMetadataReader {
    path: PathBuf,
    raw_block: Option<Vec<u8>>,
    block: VersionBlock,
    translation: Option<Translation>,
    stat: FileStat,
}

impl FileMetadataReader {
    /// Reads `path`, locates its version resource and stats the file.
    ///
    /// Fails with [`FileInfoError::ResourceMissing`] when the file has no
    /// version resource (including files that are not PE images), with
    /// [`FileInfoError::TranslationMissing`] when the resource lists no
    /// translation, and with [`FileInfoError::FileAccess`] when the file
    /// cannot be read or stat'd.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data =
            std::fs::read(path).map_err(|e| FileInfoError::file_access("read", path, e))?;
        let (raw_block, block) = load_version(path, &data)?;
        let stat = FileStat::capture(path)?;
        Ok(Self::assemble(path, raw_block, block, stat))
    }

    /// Builds a reader from an image already in memory. `path` is kept for
    /// error messages and [`content_hash`](Self::content_hash).
    pub fn from_bytes(path: impl AsRef<Path>, data: &[u8], stat: FileStat) -> Result<Self> {
        let path = path.as_ref();
        let (raw_block, block) = load_version(path, data)?;
        Ok(Self::assemble(path, raw_block, block, stat))
    }

    fn assemble(
        path: &Path,
        raw_block: Option<Vec<u8>>,
        block: VersionBlock,
        stat: FileStat,
    ) -> Self {
        let translation = block.translations().and_then(|t| t.first().copied());
        debug!(
            "{}: version block of {} bytes, translation {}",
            path.display(),
            raw_block.as_ref().map_or(0, Vec::len),
            translation.map_or_else(|| "-".to_string(), |t| t.key())
        );
        FileMetadataReader {
            path: path.to_path_buf(),
            raw_block,
            block,
            translation,
            stat,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The version resource bytes, or `None` if the block could not be read.
    pub fn raw_block(&self) -> Option<&[u8]> {
        self.raw_block.as_deref()
    }

    /// All translations listed by the resource, in block order.
    pub fn translations(&self) -> &[Translation] {
        self.block.translations().unwrap_or_default()
    }

    /// The translation every field lookup uses: the first one listed.
    pub fn translation(&self) -> Option<Translation> {
        self.translation
    }

    /// Value of `name` in the first translation's string table.
    ///
    /// `name` must match the field name exactly, including case. The table
    /// itself is found by its translation key ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.block.string(self.translation?, name)
    }

    /// Value of `name` in the string table of `translation`.
    pub fn get_in(&self, translation: Translation, name: &str) -> Option<&str> {
        self.block.string(translation, name)
    }

    /// Like [`get`](Self::get), but reports a missing field as `"-"`.
    pub fn lookup(&self, name: &str) -> String {
        self.get(name).unwrap_or(MISSING_FIELD).to_string()
    }

    pub fn file_description(&self) -> String {
        self.lookup(VS_FILE_DESCRIPTION)
    }

    pub fn file_version(&self) -> String {
        self.lookup(VS_FILE_VERSION)
    }

    pub fn product_version(&self) -> String {
        self.lookup(VS_PRODUCT_VERSION)
    }

    pub fn product_name(&self) -> String {
        self.lookup(VS_PRODUCT_NAME)
    }

    pub fn original_filename(&self) -> String {
        self.lookup(VS_ORIGINAL_FILENAME)
    }

    pub fn company_name(&self) -> String {
        self.lookup(VS_COMPANY_NAME)
    }

    pub fn legal_copyright(&self) -> String {
        self.lookup(VS_LEGAL_COPYRIGHT)
    }

    pub fn internal_name(&self) -> String {
        self.lookup(VS_INTERNAL_NAME)
    }

    pub fn comments(&self) -> String {
        self.lookup(VS_COMMENTS)
    }

    /// Any other string field. Field names are matched exactly and
    /// case-sensitively, so use the resource's capitalization, e.g.
    /// `"PrivateBuild"`. See [`get`](Self::get) for how the table is found.
    pub fn custom(&self, name: &str) -> String {
        self.lookup(name)
    }

    /// Every key/value pair of the first translation's table, in block order.
    pub fn strings(&self) -> &[(String, String)] {
        self.translation
            .and_then(|t| self.block.table(t))
            .map(|table| table.strings.as_slice())
            .unwrap_or_default()
    }

    pub fn fixed_info(&self) -> Option<&FixedFileInfo> {
        self.block.fixed()
    }

    /// SHA-256 of the file's current contents, in lowercase hex. The file is
    /// read again on every call.
    pub fn content_hash(&self) -> Result<String> {
        sha256_file_hex(&self.path)
    }

    pub fn stat(&self) -> &FileStat {
        &self.stat
    }

    /// `None` where the platform does not record a creation time.
    pub fn creation_time(&self) -> Option<DateTime<Local>> {
        self.stat.created
    }
}

fn load_version(path: &Path, data: &[u8]) -> Result<(Option<Vec<u8>>, VersionBlock)> {
    let mut storage = Vec::new();
    let image = align_to_dword(data, &mut storage);
    let resource = pe::version_resource(image)
        .map_err(|e| FileInfoError::resource_missing(path, e.to_string()))?;

    let bytes = match resource {
        VersionResource::Data(bytes) => bytes,
        VersionResource::Unreadable { rva, size } => {
            warn!(
                "{}: version block at RVA 0x{:08X} ({} bytes) is unreadable; fields read as '{}'",
                path.display(),
                rva,
                size,
                MISSING_FIELD
            );
            return Ok((None, VersionBlock::default()));
        }
    };

    let block = VersionBlock::parse(bytes)
        .map_err(|e| FileInfoError::resource_missing(path, e.to_string()))?;
    match block.translations() {
        Some(translations) if !translations.is_empty() => Ok((Some(bytes.to_vec()), block)),
        _ => Err(FileInfoError::TranslationMissing {
            path: path.to_path_buf(),
        }),
    }
}
