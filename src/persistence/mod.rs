//! Single-slot save/load
//!
//! Features:
//! - Plain-text record (position, lives, score, level tag, enemy count)
//! - One slot, overwritten on every save
//! - Strict parsing: a bad file is rejected before any state is touched

pub mod record;
pub mod slot;

pub use record::SaveRecord;
pub use slot::{FileSlot, MemorySlot, SaveSlot};

use std::fmt;

/// Why a save or load failed
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    /// Slot has never been written
    Empty,
    MissingField { field: &'static str },
    InvalidNumber { field: &'static str, value: String },
    UnknownLevel { tag: String },
    TrailingData { token: String },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "save file i/o: {e}"),
            Self::Empty => write!(f, "no saved game"),
            Self::MissingField { field } => write!(f, "save record missing {field}"),
            Self::InvalidNumber { field, value } => {
                write!(f, "save record {field} is not a valid number: {value:?}")
            }
            Self::UnknownLevel { tag } => write!(f, "unknown level tag in save: {tag:?}"),
            Self::TrailingData { token } => {
                write!(f, "unexpected data after save record: {token:?}")
            }
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
