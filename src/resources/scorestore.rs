//! Score persistence.
//!
//! The game keeps exactly one persisted value: the score at the moment the
//! last wave was exhausted. It lives under the key `lastScore` of the
//! `BubbleGamePrefs` namespace.
//!
//! Storage is injected through the [`ScoreStore`] trait so the game never
//! touches ambient global storage:
//! - [`IniScoreStore`] keeps the namespace as a section of an INI file.
//! - [`MemoryScoreStore`] keeps it in memory and counts writes; clones share
//!   the same slot, so a host (or test) can keep a handle and inspect it.
//!
//! [`ScorePersistence`] is the ECS resource wrapping the active store. Its
//! `load`/`save` never fail: errors are logged and reads fall back to 0.

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Namespace of the persisted values.
pub const PREFS_NAMESPACE: &str = "BubbleGamePrefs";
/// Key of the persisted last score.
pub const LAST_SCORE_KEY: &str = "lastScore";

/// Typed access to the persisted last score.
pub trait ScoreStore: Send + Sync {
    /// Read the last score. `Ok(None)` when nothing was stored yet.
    fn load_last_score(&self) -> Result<Option<u32>, String>;
    /// Store the last score.
    fn save_last_score(&mut self, score: u32) -> Result<(), String>;
}

/// Score store backed by an INI file.
pub struct IniScoreStore {
    path: PathBuf,
    ini: Ini,
}

impl IniScoreStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, String> {
        let path = path.into();
        // Case sensitive, so the key is kept as `lastScore`
        let mut ini = Ini::new_cs();
        if path.exists() {
            ini.load(&path)
                .map_err(|e| format!("Failed to load score store {:?}: {}", path, e))?;
            info!("Opened score store {:?}", path);
        } else {
            info!("Score store {:?} not found, starting empty", path);
        }
        Ok(IniScoreStore { path, ini })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for IniScoreStore {
    fn load_last_score(&self) -> Result<Option<u32>, String> {
        let value = self.ini.getuint(PREFS_NAMESPACE, LAST_SCORE_KEY)?;
        value
            .map(|v| u32::try_from(v).map_err(|e| format!("Stored score {} out of range: {}", v, e)))
            .transpose()
    }

    fn save_last_score(&mut self, score: u32) -> Result<(), String> {
        self.ini
            .set(PREFS_NAMESPACE, LAST_SCORE_KEY, Some(score.to_string()));
        self.ini
            .write(&self.path)
            .map_err(|e| format!("Failed to write score store {:?}: {}", self.path, e))
    }
}

#[derive(Debug, Default)]
struct MemorySlot {
    value: Option<u32>,
    writes: u64,
}

/// In-memory score store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    slot: Arc<Mutex<MemorySlot>>,
}

impl MemoryScoreStore {
    /// A store that already holds `score`.
    pub fn with_score(score: u32) -> Self {
        MemoryScoreStore {
            slot: Arc::new(Mutex::new(MemorySlot {
                value: Some(score),
                writes: 0,
            })),
        }
    }

    /// Currently stored value.
    pub fn value(&self) -> Option<u32> {
        self.slot.lock().ok().and_then(|slot| slot.value)
    }

    /// Number of successful saves.
    pub fn writes(&self) -> u64 {
        self.slot.lock().map(|slot| slot.writes).unwrap_or(0)
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_last_score(&self) -> Result<Option<u32>, String> {
        let slot = self.slot.lock().map_err(|e| e.to_string())?;
        Ok(slot.value)
    }

    fn save_last_score(&mut self, score: u32) -> Result<(), String> {
        let mut slot = self.slot.lock().map_err(|e| e.to_string())?;
        slot.value = Some(score);
        slot.writes += 1;
        Ok(())
    }
}

/// Resource owning the injected [`ScoreStore`].
#[derive(Resource)]
pub struct ScorePersistence {
    store: Box<dyn ScoreStore>,
    last_saved: Option<u32>,
}

impl ScorePersistence {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        ScorePersistence {
            store,
            last_saved: None,
        }
    }

    /// Read the persisted score, defaulting to 0 when absent or unreadable.
    pub fn load(&self) -> u32 {
        match self.store.load_last_score() {
            Ok(Some(score)) => score,
            Ok(None) => 0,
            Err(e) => {
                warn!("Could not read last score, starting from 0: {}", e);
                0
            }
        }
    }

    /// Persist `score`. Failures are logged and otherwise ignored.
    pub fn save(&mut self, score: u32) {
        match self.store.save_last_score(score) {
            Ok(()) => {
                debug!("Persisted last score {}", score);
                self.last_saved = Some(score);
            }
            Err(e) => warn!("Could not persist last score {}: {}", score, e),
        }
    }

    /// Value written by the most recent successful [`save`](Self::save) of this session.
    pub fn last_saved(&self) -> Option<u32> {
        self.last_saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "bubblepop_store_{}_{}.ini",
            name,
            std::process::id()
        ))
    }

    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn load_last_score(&self) -> Result<Option<u32>, String> {
            Err("disk on fire".to_string())
        }
        fn save_last_score(&mut self, _score: u32) -> Result<(), String> {
            Err("disk on fire".to_string())
        }
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let store = MemoryScoreStore::default();
        let mut handle = store.clone();
        assert_eq!(store.value(), None);

        handle.save_last_score(12).unwrap();
        assert_eq!(store.value(), Some(12));
        assert_eq!(store.writes(), 1);
        assert_eq!(store.load_last_score().unwrap(), Some(12));
    }

    #[test]
    fn test_persistence_defaults_to_zero_when_absent() {
        let persistence = ScorePersistence::new(Box::new(MemoryScoreStore::default()));
        assert_eq!(persistence.load(), 0);
    }

    #[test]
    fn test_persistence_tolerates_broken_store() {
        let mut persistence = ScorePersistence::new(Box::new(BrokenStore));
        assert_eq!(persistence.load(), 0);
        persistence.save(3);
        assert_eq!(persistence.last_saved(), None);
    }

    #[test]
    fn test_persistence_tracks_last_saved() {
        let store = MemoryScoreStore::with_score(7);
        let mut persistence = ScorePersistence::new(Box::new(store.clone()));
        assert_eq!(persistence.load(), 7);
        persistence.save(9);
        assert_eq!(persistence.last_saved(), Some(9));
        assert_eq!(store.value(), Some(9));
    }

    #[test]
    fn test_ini_store_missing_file_is_empty() {
        let path = temp_path("missing");
        std::fs::remove_file(&path).ok();
        let store = IniScoreStore::open(&path).unwrap();
        assert_eq!(store.load_last_score().unwrap(), None);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_ini_store_survives_reopen() {
        let path = temp_path("reopen");
        std::fs::remove_file(&path).ok();

        let mut store = IniScoreStore::open(&path).unwrap();
        store.save_last_score(7).unwrap();

        let reopened = IniScoreStore::open(&path).unwrap();
        assert_eq!(reopened.load_last_score().unwrap(), Some(7));

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(contents.contains("[BubbleGamePrefs]"));
        assert!(contents.contains("lastScore"));
    }

    #[test]
    fn test_ini_store_rejects_garbage_value() {
        let path = temp_path("garbage");
        std::fs::write(&path, "[BubbleGamePrefs]\nlastScore = lots\n").unwrap();
        let store = IniScoreStore::open(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(store.load_last_score().is_err());
        let persistence = ScorePersistence::new(Box::new(store));
        assert_eq!(persistence.load(), 0);
    }
}
