use crate::config::PersistPolicy;
use crate::error::StoreError;
use crate::store::{PersistedSearch, SearchState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key this client owns inside the storage file.
pub const STORE_KEY: &str = "github-search-storage";
const STORE_VERSION: u32 = 0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredEntry {
    pub state: PersistedSearch,
    pub version: u32,
    pub saved_at: DateTime<Utc>,
}

/// A JSON object of namespaced entries on disk. Other keys are carried
/// through untouched on save.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Storage::new(dir.join("reposearch").join("storage.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries on disk plus whether the file had to be discarded. An
    /// unparseable file reads as empty so a bad file never locks the user out.
    fn read_all(&self) -> Result<(Map<String, Value>, bool), StoreError> {
        if !self.path.exists() {
            return Ok((Map::new(), false));
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| self.io_err(source))?;
        if contents.trim().is_empty() {
            return Ok((Map::new(), false));
        }
        match serde_json::from_str(&contents) {
            Ok(entries) => Ok((entries, false)),
            Err(e) => {
                log::warn!(
                    "ignoring malformed store file {}: {}",
                    self.path.display(),
                    e
                );
                Ok((Map::new(), true))
            }
        }
    }

    fn write_all(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_err(source))?;
        }
        let contents = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Parse {
            path: self.path.display().to_string(),
            source,
        })?;
        fs::write(&self.path, contents).map_err(|source| self.io_err(source))
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    pub fn load_entry(&self) -> Result<Option<StoredEntry>, StoreError> {
        let (mut entries, _) = self.read_all()?;
        let Some(raw) = entries.remove(STORE_KEY) else {
            return Ok(None);
        };
        match serde_json::from_value::<StoredEntry>(raw) {
            Ok(entry) if entry.version == STORE_VERSION => Ok(Some(entry)),
            Ok(entry) => {
                log::warn!(
                    "ignoring stored search state with version {} (expected {})",
                    entry.version,
                    STORE_VERSION
                );
                Ok(None)
            }
            Err(e) => {
                log::warn!("ignoring unreadable stored search state: {}", e);
                Ok(None)
            }
        }
    }

    pub fn save_entry(&self, state: PersistedSearch) -> Result<(), StoreError> {
        let (mut entries, _) = self.read_all()?;
        let entry = StoredEntry {
            state,
            version: STORE_VERSION,
            saved_at: Utc::now(),
        };
        let value = serde_json::to_value(&entry).map_err(|source| StoreError::Parse {
            path: self.path.display().to_string(),
            source,
        })?;
        entries.insert(STORE_KEY.to_string(), value);
        self.write_all(&entries)
    }

    /// Drops this client's entry. Returns whether there was one. A malformed
    /// file is replaced by an empty object.
    pub fn remove_entry(&self) -> Result<bool, StoreError> {
        let (mut entries, corrupt) = self.read_all()?;
        let existed = entries.remove(STORE_KEY).is_some();
        if existed || corrupt {
            self.write_all(&entries)?;
        }
        Ok(existed)
    }

    /// Search state as of the last session, or defaults.
    pub fn hydrate(&self) -> Result<SearchState, StoreError> {
        let state = match self.load_entry()? {
            Some(entry) => SearchState::rehydrate(entry.state),
            None => SearchState::default(),
        };
        log::debug!(
            "hydrated search state from {}: {} repos, page {}",
            self.path.display(),
            state.repos.len(),
            state.current_page
        );
        Ok(state)
    }

    pub fn persist(&self, state: &SearchState, policy: PersistPolicy) -> Result<(), StoreError> {
        let everything = policy == PersistPolicy::Everything;
        self.save_entry(state.snapshot(everything))
    }
}
