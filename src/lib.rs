//! Version-resource metadata for Windows executables and DLLs.
//!
//! ```no_run
//! use fileinfo::FileMetadataReader;
//!
//! let reader = FileMetadataReader::open("notepad.exe")?;
//! println!("{} {}", reader.product_name(), reader.file_version());
//! println!("{}", reader.content_hash()?);
//! # Ok::<(), fileinfo::FileInfoError>(())
//! ```
//!
//! The resource is read straight from the PE image, so this works on any
//! host. Missing fields read as `"-"` through the `String` accessors and as
//! `None` through [`FileMetadataReader::get`].

pub mod constants;
pub mod error;
pub mod hash;
pub mod pe;
pub mod reader;
pub mod report;
pub mod stat;
pub mod translation;
pub mod version_info;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod testing;

pub use error::{FileInfoError, Result};
pub use reader::FileMetadataReader;
pub use report::{FileReport, ReportOptions};
pub use stat::FileStat;
pub use translation::Translation;
pub use version_info::{FixedFileInfo, FixedVersion};
