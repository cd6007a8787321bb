//! Reads the `VS_VERSIONINFO` block stored in an `RT_VERSION` resource.
//!
//! The block is walked with pelite's [`Visit`] interface, which descends a
//! fixed four levels (root, `StringFileInfo`/`VarFileInfo`, string table or
//! var, string) and skips anything it cannot parse. The visitor keeps string
//! tables and their strings in block order.

use std::fmt;

use log::debug;
use pelite::image::VS_FIXEDFILEINFO;
use pelite::resources::version_info::{VersionInfo, Visit};
use serde::Serialize;
use thiserror::Error;

use crate::constants::*;
use crate::pe::align_to_dword;
use crate::translation::Translation;

/// A `major.minor.patch.build` quadruple from `VS_FIXEDFILEINFO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedVersion(pub [u16; 4]);

impl fmt::Display for FixedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch, build] = self.0;
        write!(f, "{major}.{minor}.{patch}.{build}")
    }
}

impl Serialize for FixedVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Language-independent part of the version resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedFileInfo {
    pub file_version: FixedVersion,
    pub product_version: FixedVersion,
    pub file_flags_mask: u32,
    pub file_flags: u32,
    pub file_os: u32,
    pub file_type: u32,
    pub file_subtype: u32,
    pub file_date: u64,
}

impl FixedFileInfo {
    fn from_image(raw: &VS_FIXEDFILEINFO) -> Option<Self> {
        if raw.dwSignature != VS_FIXEDFILEINFO_SIGNATURE {
            return None;
        }
        let file = &raw.dwFileVersion;
        let product = &raw.dwProductVersion;
        Some(FixedFileInfo {
            file_version: FixedVersion([file.Major, file.Minor, file.Patch, file.Build]),
            product_version: FixedVersion([
                product.Major,
                product.Minor,
                product.Patch,
                product.Build,
            ]),
            file_flags_mask: raw.dwFileFlagsMask,
            file_flags: raw.dwFileFlags,
            file_os: raw.dwFileOS,
            file_type: raw.dwFileType,
            file_subtype: raw.dwFileSubtype,
            file_date: (u64::from(raw.dwFileDateMS) << 32) | u64::from(raw.dwFileDateLS),
        })
    }
}

/// Strings of one `StringFileInfo` sub-table, in block order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    pub key: String,
    pub strings: Vec<(String, String)>,
}

impl StringTable {
    /// Exact, case-sensitive match on the field name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.strings
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Why a byte block could not be read as a version resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("version block header is malformed")]
    Unparseable,

    #[error("unexpected version block root key '{0}'")]
    UnexpectedRoot(String),
}

/// Collects the first root node of a block.
#[derive(Default)]
struct Collector {
    root: Option<String>,
    fixed: Option<FixedFileInfo>,
    translations: Option<Vec<Translation>>,
    tables: Vec<StringTable>,
}

impl<'a> Visit<'a> for Collector {
    fn version_info(&mut self, key: &'a [u16], fixed: Option<&'a VS_FIXEDFILEINFO>) -> bool {
        if self.root.is_some() {
            return false;
        }
        let key = String::from_utf16_lossy(key);
        let accepted = key == VS_VERSION_INFO_KEY;
        if accepted {
            self.fixed = fixed.and_then(FixedFileInfo::from_image);
        }
        self.root = Some(key);
        accepted
    }

    fn string_table(&mut self, key: &'a [u16]) -> bool {
        self.tables.push(StringTable {
            key: String::from_utf16_lossy(key),
            strings: Vec::new(),
        });
        true
    }

    fn string(&mut self, key: &'a [u16], value: &'a [u16]) {
        if let Some(table) = self.tables.last_mut() {
            let pair = (String::from_utf16_lossy(key), String::from_utf16_lossy(value));
            table.strings.push(pair);
        }
    }

    fn var(&mut self, key: &'a [u16], value: &'a [u16]) {
        if String::from_utf16_lossy(key) == TRANSLATION_KEY {
            self.translations = Some(Translation::from_words(value));
        }
    }
}

/// Owned, parsed contents of a version resource block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionBlock {
    fixed: Option<FixedFileInfo>,
    /// `None` when the block has no `\VarFileInfo\Translation` value.
    translations: Option<Vec<Translation>>,
    tables: Vec<StringTable>,
}

impl VersionBlock {
    pub fn parse(data: &[u8]) -> Result<Self, BlockError> {
        let mut storage = Vec::new();
        let data = align_to_dword(data, &mut storage);
        let info = VersionInfo::try_from(data).map_err(|_| BlockError::Unparseable)?;

        let mut collector = Collector::default();
        info.visit(&mut collector);

        match collector.root {
            None => Err(BlockError::Unparseable),
            Some(key) if key != VS_VERSION_INFO_KEY => Err(BlockError::UnexpectedRoot(key)),
            Some(_) => {
                if collector.fixed.is_none() {
                    debug!("version block carries no VS_FIXEDFILEINFO");
                }
                Ok(VersionBlock {
                    fixed: collector.fixed,
                    translations: collector.translations,
                    tables: collector.tables,
                })
            }
        }
    }

    pub fn fixed(&self) -> Option<&FixedFileInfo> {
        self.fixed.as_ref()
    }

    pub fn translations(&self) -> Option<&[Translation]> {
        self.translations.as_deref()
    }

    pub fn tables(&self) -> &[StringTable] {
        &self.tables
    }

    /// The string table addressed by `translation`. Table keys are matched
    /// without regard to ASCII case.
    pub fn table(&self, translation: Translation) -> Option<&StringTable> {
        let key = translation.key();
        self.tables.iter().find(|t| t.key.eq_ignore_ascii_case(&key))
    }

    pub fn string(&self, translation: Translation, name: &str) -> Option<&str> {
        self.table(translation)?.get(name)
    }
}
