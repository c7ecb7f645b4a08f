// Per-lecture elapsed-time records
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use crate::catalog::LectureKey;
use crate::storage::KeyValueStore;

pub const PROGRESS_KEY: &str = "lecture-progress";

/// Map from lecture key to elapsed seconds. Written on every tick while
/// playing and on manual seek; entries are never evicted. Survives logout:
/// only the auth flag is cleared there, never this map.
pub struct ProgressStore {
    entries: Mutex<HashMap<LectureKey, u32>>,
    backing: Option<Arc<dyn KeyValueStore>>,
}

impl ProgressStore {
    /// Progress kept for the lifetime of the process only.
    pub fn in_memory() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            backing: None,
        }
    }

    /// Progress written through to `store` under [`PROGRESS_KEY`] and
    /// reloaded from it on construction. An unreadable or corrupt record
    /// starts the map empty rather than failing.
    pub fn persistent(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match store.get_string(PROGRESS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("discarding unreadable progress record: {e}");
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!("progress record load failed, starting empty: {e}");
                HashMap::new()
            }
        };

        Self {
            entries: Mutex::new(entries),
            backing: Some(store),
        }
    }

    /// Elapsed seconds for a lecture; unknown keys are 0.
    pub fn get(&self, key: &LectureKey) -> u32 {
        self.entries.lock().get(key).copied().unwrap_or(0)
    }

    /// Unconditional overwrite. Callers clamp against the lecture total
    /// before writing; the store itself does not validate.
    pub fn set(&self, key: &LectureKey, seconds: u32) {
        let mut entries = self.entries.lock();
        entries.insert(key.clone(), seconds);

        if let Some(store) = &self.backing {
            match serde_json::to_string(&*entries) {
                Ok(raw) => {
                    if let Err(e) = store.set_string(PROGRESS_KEY, &raw) {
                        // Keep the in-memory value; durability degrades,
                        // playback does not
                        warn!("progress write-through failed: {e}");
                    }
                }
                Err(e) => warn!("progress serialization failed: {e}"),
            }
        }
    }
}
