//! JSON save file for the creature, kept in ~/.critter/.

use crate::core::constants::{
    BACKUP_FILE_NAME, CONFIG_FILE_NAME, LOG_FILE_NAME, SAVE_DIR_NAME, SAVE_FILE_NAME,
};
use crate::core::params::SimParams;
use crate::creature::types::Creature;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Save data error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// What was found on disk at startup.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Creature),
    Missing,
    /// The save could not be read. It was moved to `backup` when possible.
    Corrupt {
        backup: Option<PathBuf>,
        error: String,
    },
}

/// Owns the save directory.
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// The store in `~/.critter`, created if needed.
    pub fn new() -> Result<Self, StoreError> {
        let home_dir = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
        Self::with_dir(home_dir.join(SAVE_DIR_NAME))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_path(&self) -> PathBuf {
        self.dir.join(SAVE_FILE_NAME)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.dir.join(BACKUP_FILE_NAME)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE_NAME)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path().exists()
    }

    /// Writes the creature through a temp file so a crash never leaves a
    /// half-written save behind.
    pub fn save(&self, creature: &Creature) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(creature)?;
        let path = self.save_path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        tracing::info!(name = %creature.name, path = %path.display(), "saved creature");
        Ok(())
    }

    /// Reads the save and repairs it against `params`.
    ///
    /// Only an unreadable directory is an error. A save that exists but does
    /// not parse is moved aside and reported as [`LoadOutcome::Corrupt`].
    pub fn load(&self, now: i64, params: &SimParams) -> Result<LoadOutcome, StoreError> {
        let path = self.save_path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LoadOutcome::Missing),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Ok(self.quarantine(e.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Creature>(&json) {
            Ok(mut creature) => {
                creature.repair(now, params);
                Ok(LoadOutcome::Loaded(creature))
            }
            Err(e) => Ok(self.quarantine(e.to_string())),
        }
    }

    fn quarantine(&self, error: String) -> LoadOutcome {
        let backup = self.backup_path();
        let backup = match fs::rename(self.save_path(), &backup) {
            Ok(()) => Some(backup),
            Err(e) => {
                tracing::warn!("could not move corrupt save aside: {}", e);
                None
            }
        };
        tracing::warn!(%error, ?backup, "save file is corrupt, starting fresh");
        LoadOutcome::Corrupt { backup, error }
    }

    pub fn delete(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.save_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
