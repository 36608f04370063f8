//! Best-effort persistence of recently generated artifacts.
//!
//! The model follows browser local storage: a handful of well-known string
//! keys, each holding a JSON array of the most recent saves, newest first,
//! truncated to a small cap.  The whole list is read once at startup and
//! overwritten wholesale on every save — last writer wins, and an absent or
//! malformed key simply means "nothing saved yet".

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gradient::{GradientKind, GradientStop};
use crate::palette::Harmony;

/// Storage key for saved gradients.
pub const SAVED_GRADIENTS_KEY: &str = "savedGradients";
/// Most gradients kept.
pub const SAVED_GRADIENTS_CAP: usize = 6;
/// Storage key for saved palettes.
pub const SAVED_PALETTES_KEY: &str = "savedPalettes";
/// Most palettes kept.
pub const SAVED_PALETTES_CAP: usize = 5;

/// Failure to write to the backing store.  Reads never fail; see
/// [`RecentList::load`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A string key-value store, the shape of browser local storage.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory storage, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemStorage {
    entries: HashMap<String, String>,
}

impl Storage for MemStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage: one `{key}.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    pub fn new(dir: impl Into<PathBuf>) -> DirStorage {
        DirStorage { dir: dir.into() }
    }

    /// Storage under the platform data directory, e.g.
    /// `~/.local/share/{app}` on Linux.  `None` when the platform exposes
    /// no data directory.
    pub fn in_data_dir(app: &str) -> Option<DirStorage> {
        dirs::data_dir().map(|dir| DirStorage { dir: dir.join(app) })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for DirStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// A capped, newest-first list of saved artifacts under one storage key.
#[derive(Debug)]
pub struct RecentList<T> {
    key: &'static str,
    cap: usize,
    items: Vec<T>,
}

impl<T: Serialize + DeserializeOwned> RecentList<T> {
    /// An empty list.
    pub fn new(key: &'static str, cap: usize) -> RecentList<T> {
        RecentList { key, cap, items: Vec::new() }
    }

    /// Read the list from storage.  An absent key or content that fails to
    /// parse yields an empty list — stale state is never a startup error.
    pub fn load(key: &'static str, cap: usize, storage: &dyn Storage) -> RecentList<T> {
        let mut items: Vec<T> = match storage.get(key) {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("discarding malformed {key}: {err}");
                Vec::new()
            }),
        };
        items.truncate(cap);
        RecentList { key, cap, items }
    }

    /// Insert at the front and drop anything past the cap.
    pub fn insert(&mut self, item: T) {
        self.items.insert(0, item);
        self.items.truncate(self.cap);
    }

    /// Overwrite the stored list wholesale.
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StoreError> {
        storage.set(self.key, &serde_json::to_string(&self.items)?)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// A saved gradient snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGradient {
    /// Client-generated id (save time in unix milliseconds).
    pub id: u64,
    /// The rendered CSS gradient value.
    pub css: String,
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub colors: Vec<GradientStop>,
    pub timestamp_ms: u64,
}

impl SavedGradient {
    pub fn new(css: impl Into<String>, kind: GradientKind, colors: Vec<GradientStop>) -> Self {
        let now = unix_millis();
        SavedGradient { id: now, css: css.into(), kind, colors, timestamp_ms: now }
    }
}

/// A saved palette snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub id: u64,
    pub colors: Vec<String>,
    pub base_color: String,
    #[serde(rename = "type")]
    pub harmony: Harmony,
    pub timestamp_ms: u64,
}

impl SavedPalette {
    pub fn new(colors: Vec<String>, base_color: impl Into<String>, harmony: Harmony) -> Self {
        let now = unix_millis();
        SavedPalette { id: now, colors, base_color: base_color.into(), harmony, timestamp_ms: now }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{format_gradient, GradientKind, GradientStop};

    fn stops() -> Vec<GradientStop> {
        vec![GradientStop::new("#667eea", 0.), GradientStop::new("#764ba2", 100.)]
    }

    #[test]
    fn list_never_exceeds_cap() {
        let mut storage = MemStorage::default();
        let mut list = RecentList::new(SAVED_GRADIENTS_KEY, SAVED_GRADIENTS_CAP);
        for i in 0..10 {
            let css = format_gradient(&stops(), GradientKind::Linear, i as f64);
            list.insert(SavedGradient::new(css, GradientKind::Linear, stops()));
            list.save(&mut storage).unwrap();
            assert!(list.len() <= SAVED_GRADIENTS_CAP);
        }
        assert_eq!(list.len(), SAVED_GRADIENTS_CAP);
        // newest first
        assert!(list.items()[0].css.contains("9deg"));
    }

    #[test]
    fn round_trips_through_storage() {
        let mut storage = MemStorage::default();
        let mut list = RecentList::new(SAVED_PALETTES_KEY, SAVED_PALETTES_CAP);
        list.insert(SavedPalette::new(
            vec!["#000000".into(), "#ffffff".into()],
            "#000000",
            Harmony::Complementary,
        ));
        list.save(&mut storage).unwrap();

        let loaded: RecentList<SavedPalette> =
            RecentList::load(SAVED_PALETTES_KEY, SAVED_PALETTES_CAP, &storage);
        assert_eq!(loaded.items(), list.items());
    }

    #[test]
    fn malformed_state_defaults_to_empty() {
        let mut storage = MemStorage::default();
        storage.set(SAVED_GRADIENTS_KEY, "{not json").unwrap();
        let list: RecentList<SavedGradient> =
            RecentList::load(SAVED_GRADIENTS_KEY, SAVED_GRADIENTS_CAP, &storage);
        assert!(list.is_empty());

        let absent: RecentList<SavedGradient> =
            RecentList::load("neverWritten", SAVED_GRADIENTS_CAP, &storage);
        assert!(absent.is_empty());
    }

    #[test]
    fn oversized_stored_list_is_truncated_on_load() {
        let mut storage = MemStorage::default();
        let many: Vec<SavedPalette> = (0..10)
            .map(|_| {
                SavedPalette::new(vec!["#ffffff".into()], "#ffffff", Harmony::Shades)
            })
            .collect();
        storage.set(SAVED_PALETTES_KEY, &serde_json::to_string(&many).unwrap()).unwrap();
        let list: RecentList<SavedPalette> =
            RecentList::load(SAVED_PALETTES_KEY, SAVED_PALETTES_CAP, &storage);
        assert_eq!(list.len(), SAVED_PALETTES_CAP);
    }

    #[test]
    fn saved_gradient_serializes_kind_as_type() {
        let saved = SavedGradient::new("linear-gradient(…)", GradientKind::Conic, stops());
        let json = serde_json::to_string(&saved).unwrap();
        assert!(json.contains("\"type\":\"conic\""));
    }
}
