//! Save slot backends

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PersistError, SaveRecord};

/// Somewhere a single save record can be kept
pub trait SaveSlot {
    /// Overwrite the slot
    fn save(&mut self, record: &SaveRecord) -> Result<(), PersistError>;

    /// Read the slot back. Fails without side effects on a missing or
    /// malformed record.
    fn load(&mut self) -> Result<SaveRecord, PersistError>;
}

/// Text file on disk
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveSlot for FileSlot {
    fn save(&mut self, record: &SaveRecord) -> Result<(), PersistError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, record.to_text())?;
        log::info!("Game saved to {}", self.path.display());
        Ok(())
    }

    fn load(&mut self) -> Result<SaveRecord, PersistError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(PersistError::Empty),
            Err(e) => return Err(e.into()),
        };
        let record = SaveRecord::parse(&text)?;
        log::info!("Game loaded from {}", self.path.display());
        Ok(record)
    }
}

/// In-memory slot holding the record's text, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    pub text: Option<String>,
}

impl MemorySlot {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl SaveSlot for MemorySlot {
    fn save(&mut self, record: &SaveRecord) -> Result<(), PersistError> {
        self.text = Some(record.to_text());
        Ok(())
    }

    fn load(&mut self) -> Result<SaveRecord, PersistError> {
        let text = self.text.as_deref().ok_or(PersistError::Empty)?;
        SaveRecord::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Level;

    fn record() -> SaveRecord {
        SaveRecord {
            x: 890.0,
            y: 512.5,
            lives: 2,
            score: 77,
            level: Level::Level4,
            enemy_count: 12,
        }
    }

    #[test]
    fn test_file_slot_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("savegame").join("savegame.save"));
        slot.save(&record()).unwrap();
        assert_eq!(slot.load().unwrap(), record());
    }

    #[test]
    fn test_file_slot_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("slot.save"));
        slot.save(&record()).unwrap();
        let newer = SaveRecord {
            score: 300,
            ..record()
        };
        slot.save(&newer).unwrap();
        assert_eq!(slot.load().unwrap(), newer);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("nothing.save"));
        assert!(matches!(slot.load(), Err(PersistError::Empty)));
    }

    #[test]
    fn test_memory_slot() {
        let mut slot = MemorySlot::default();
        assert!(matches!(slot.load(), Err(PersistError::Empty)));
        slot.save(&record()).unwrap();
        assert_eq!(slot.load().unwrap(), record());
    }
}
