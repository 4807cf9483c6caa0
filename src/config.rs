use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NoteError, Result};
use crate::storage::{validate_key, FileKvStore, KvStore, SqliteKvStore, NOTES_KEY};

pub const CONFIG_FILE: &str = "config.yaml";

/// Which key-value backend holds the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    File,
    Sqlite,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::File => write!(f, "file"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Backend::File),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(format!(
                "Invalid backend: {}. Valid values: file, sqlite",
                s
            )),
        }
    }
}

fn default_storage_key() -> String {
    NOTES_KEY.to_string()
}

fn default_autosave() -> bool {
    true
}

/// Project configuration, read from `.pocketnote/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Persist after every mutation.
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            storage_key: default_storage_key(),
            autosave: default_autosave(),
        }
    }
}

impl Config {
    /// Load from `dir`. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)?;
        let config: Config = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&text)
                .map_err(|e| NoteError::Config(format!("{}: {}", path.display(), e)))?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage_key)
            .map_err(|_| NoteError::Config(format!("invalid storage_key '{}'", self.storage_key)))
    }

    /// Open the configured backend rooted at `dir`.
    pub fn open_kv(&self, dir: &Path) -> Result<Box<dyn KvStore>> {
        let kv: Box<dyn KvStore> = match self.backend {
            Backend::File => Box::new(FileKvStore::new(dir)),
            Backend::Sqlite => Box::new(SqliteKvStore::open(dir)?),
        };
        Ok(kv)
    }
}
