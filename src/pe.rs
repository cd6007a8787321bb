//! Locates the `RT_VERSION` resource of a PE32 or PE32+ image.

use log::debug;
use pelite::image::IMAGE_DIRECTORY_ENTRY_RESOURCE;
use pelite::resources::{Directory, FindError, Name};
use pelite::PeFile;
use thiserror::Error;

use crate::constants::VS_VERSION_INFO_ID;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("not a valid PE file ({0})")]
    InvalidImage(pelite::Error),

    #[error("image has no resource directory")]
    NoResourceDirectory,

    #[error("image has no version resource")]
    NoVersionResource,

    #[error("malformed resource directory: {0}")]
    MalformedResources(&'static str),
}

impl From<FindError> for ImageError {
    fn from(err: FindError) -> Self {
        match err {
            FindError::NotFound => ImageError::NoVersionResource,
            FindError::UnDataEntry => {
                ImageError::MalformedResources("version entry is not a directory")
            }
            FindError::UnDirectory => {
                ImageError::MalformedResources("version language entry is a directory")
            }
            other => ImageError::MalformedResources(other.to_str()),
        }
    }
}

/// Where the version block of an image lives.
#[derive(Debug, PartialEq, Eq)]
pub enum VersionResource<'a> {
    Data(&'a [u8]),
    /// The resource tree names a block, but its bytes are not in the
    /// resource section on disk.
    Unreadable { rva: u32, size: u32 },
}

/// Returns `data` itself when it starts on a 4-byte boundary, otherwise a
/// 4-byte aligned copy held in `storage`. Image and version block views
/// need the alignment.
pub(crate) fn align_to_dword<'a>(data: &'a [u8], storage: &'a mut Vec<u8>) -> &'a [u8] {
    if data.as_ptr() as usize % 4 == 0 {
        return data;
    }
    storage.clear();
    storage.resize(data.len() + 3, 0);
    let start = (4 - storage.as_ptr() as usize % 4) % 4;
    storage[start..start + data.len()].copy_from_slice(data);
    &storage[start..start + data.len()]
}

/// Finds the version block: name ID 1 if present, otherwise the first
/// name, and under it the first language.
///
/// `image` must be 4-byte aligned (see [`align_to_dword`]).
pub fn version_resource(image: &[u8]) -> Result<VersionResource<'_>, ImageError> {
    let file = PeFile::from_bytes(image).map_err(ImageError::InvalidImage)?;

    let has_resources = file
        .data_directory()
        .get(IMAGE_DIRECTORY_ENTRY_RESOURCE)
        .is_some_and(|dir| dir.VirtualAddress != 0 && dir.Size != 0);
    if !has_resources {
        return Err(ImageError::NoResourceDirectory);
    }

    let resources = file
        .resources()
        .map_err(|e| ImageError::MalformedResources(e.to_str()))?;
    let root = resources
        .root()
        .map_err(|e| ImageError::MalformedResources(e.to_str()))?;

    let names = root.get_dir(Name::VERSION)?;
    let languages = preferred_name(names)?;
    let entry = languages.first_data()?;

    let (rva, size) = (entry.image().OffsetToData, entry.image().Size);
    debug!("Version resource data: RVA=0x{:08X}, Size={}", rva, size);
    if size == 0 {
        return Err(ImageError::NoVersionResource);
    }

    Ok(match entry.bytes() {
        Ok(bytes) => VersionResource::Data(bytes),
        Err(err) => {
            debug!("Version resource bytes not readable: {}", err);
            VersionResource::Unreadable { rva, size }
        }
    })
}

fn preferred_name(names: Directory<'_>) -> Result<Directory<'_>, ImageError> {
    match names.get_dir(Name::Id(VS_VERSION_INFO_ID)) {
        Err(FindError::NotFound) => Ok(names.first_dir()?),
        found => Ok(found?),
    }
}
