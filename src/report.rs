use std::io::{self, Write};
use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::constants::*;
use crate::error::Result;
use crate::reader::FileMetadataReader;
use crate::stat::FileStat;
use crate::translation::Translation;
use crate::version_info::FixedFileInfo;

/// What the command-line tool prints for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub file_description: String,
    pub file_version: String,
    pub product_name: String,
    pub product_version: String,
    pub original_filename: String,
    pub company_name: String,
    pub legal_copyright: String,
    /// Extra strings in the order they were collected: block order for
    /// `all_strings`, then `fields` in the order given.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "serialize_pairs")]
    pub custom: Vec<(String, String)>,
    pub translations: Vec<Translation>,
    pub fixed: Option<FixedFileInfo>,
    pub stat: FileStat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Fields the text report already prints under its own label.
const LABELED_FIELDS: [&str; 5] = [
    VS_FILE_DESCRIPTION,
    VS_FILE_VERSION,
    VS_PRODUCT_NAME,
    VS_PRODUCT_VERSION,
    VS_ORIGINAL_FILENAME,
];

fn serialize_pairs<S: Serializer>(
    pairs: &[(String, String)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(pairs.iter().map(|(key, value)| (key, value)))
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Extra string keys to look up.
    pub fields: Vec<String>,
    /// Include every string of the first translation.
    pub all_strings: bool,
    pub hash: bool,
}

impl FileReport {
    pub fn collect(reader: &FileMetadataReader, options: &ReportOptions) -> Result<Self> {
        let mut custom: Vec<(String, String)> = Vec::new();
        if options.all_strings {
            custom.extend(
                reader
                    .strings()
                    .iter()
                    .filter(|(key, _)| !LABELED_FIELDS.contains(&key.as_str()))
                    .cloned(),
            );
        }
        for field in &options.fields {
            if !custom.iter().any(|(key, _)| key == field) {
                custom.push((field.clone(), reader.custom(field)));
            }
        }

        let sha256 = if options.hash {
            Some(reader.content_hash()?)
        } else {
            None
        };

        Ok(FileReport {
            path: reader.path().to_path_buf(),
            file_description: reader.file_description(),
            file_version: reader.file_version(),
            product_name: reader.product_name(),
            product_version: reader.product_version(),
            original_filename: reader.original_filename(),
            company_name: reader.company_name(),
            legal_copyright: reader.legal_copyright(),
            custom,
            translations: reader.translations().to_vec(),
            fixed: reader.fixed_info().cloned(),
            stat: reader.stat().clone(),
            sha256,
        })
    }

    /// Labeled, one field per line.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Description : {}", self.file_description)?;
        writeln!(out, "File Version: {}", self.file_version)?;
        writeln!(out, "Product Name: {}", self.product_name)?;
        writeln!(out, "Prod Version: {}", self.product_version)?;
        writeln!(out, "Org Filename: {}", self.original_filename)?;
        for (key, value) in &self.custom {
            writeln!(out, "{key}: {value}")?;
        }
        if let Some(hash) = &self.sha256 {
            writeln!(out, "File Hash   : {hash}")?;
        }
        Ok(())
    }
}
