//! Version-resource constants.

// https://docs.microsoft.com/en-us/windows/win32/menurc/vs-versioninfo

/// Resource name ID resource compilers give the version block.
pub const VS_VERSION_INFO_ID: u32 = 1;

pub const VS_VERSION_INFO_KEY: &str = "VS_VERSION_INFO";
pub const TRANSLATION_KEY: &str = "Translation";

pub const VS_FIXEDFILEINFO_SIGNATURE: u32 = 0xFEEF_04BD;

// Well-known StringFileInfo keys.

pub const VS_COMMENTS: &str = "Comments";
pub const VS_COMPANY_NAME: &str = "CompanyName";
pub const VS_FILE_DESCRIPTION: &str = "FileDescription";
pub const VS_FILE_VERSION: &str = "FileVersion";
pub const VS_INTERNAL_NAME: &str = "InternalName";
pub const VS_LEGAL_COPYRIGHT: &str = "LegalCopyright";
pub const VS_ORIGINAL_FILENAME: &str = "OriginalFilename";
pub const VS_PRODUCT_NAME: &str = "ProductName";
pub const VS_PRODUCT_VERSION: &str = "ProductVersion";

/// Returned by string lookups when the field is not present.
pub const MISSING_FIELD: &str = "-";
