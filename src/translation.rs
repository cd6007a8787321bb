use std::fmt;

use serde::{Serialize, Serializer};

/// A language/codepage pair from `\VarFileInfo\Translation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Translation {
    pub language: u16,
    pub codepage: u16,
}

impl Translation {
    pub fn new(language: u16, codepage: u16) -> Self {
        Translation {
            language,
            codepage,
        }
    }

    /// Name of the `StringFileInfo` sub-table for this pair, e.g. `040904b0`.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Splits the `Translation` value into `(language, codepage)` word
    /// pairs. A trailing odd word is ignored.
    pub(crate) fn from_words(value: &[u16]) -> Vec<Translation> {
        value
            .chunks_exact(2)
            .map(|pair| Translation::new(pair[0], pair[1]))
            .collect()
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}{:04x}", self.language, self.codepage)
    }
}

impl Serialize for Translation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
