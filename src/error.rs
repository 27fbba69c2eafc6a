use std::fmt;

use thiserror::Error;

use crate::latin1::Unencodable;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Latin1Error {
    /// A character above U+00FF was found while encoding.
    Unencodable {
        character: char,
        byte_offset: usize,
        char_index: usize,
    },
}

impl fmt::Display for Latin1Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Latin1Error::Unencodable {
                character,
                byte_offset,
                ..
            } => write!(
                f,
                "character '{}' (U+{:04X}) at byte {} is not representable in ISO-8859-1",
                character, *character as u32, byte_offset
            ),
        }
    }
}

impl From<Unencodable> for Latin1Error {
    fn from(value: Unencodable) -> Self {
        Latin1Error::Unencodable {
            character: value.character,
            byte_offset: value.byte_offset,
            char_index: value.char_index,
        }
    }
}
