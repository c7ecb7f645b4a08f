// In-process simulated audio engine
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{AudioEngine, EngineError, EngineHandle};

#[derive(Debug)]
struct Slot {
    uri: String,
    playing: bool,
    volume: f32,
    position_ms: u64,
}

/// Engine that tracks command effects in memory without producing audio.
/// Stands in for a platform engine during development and in tests; the
/// coordinator cannot tell the difference.
pub struct FixtureEngine {
    slots: Mutex<HashMap<EngineHandle, Slot>>,
    next_handle: AtomicU64,
}

impl FixtureEngine {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            next_handle: AtomicU64::new(1),
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_playing(&self, handle: EngineHandle) -> bool {
        self.slots
            .lock()
            .get(&handle)
            .map(|slot| slot.playing)
            .unwrap_or(false)
    }

    pub fn position_ms(&self, handle: EngineHandle) -> Option<u64> {
        self.slots.lock().get(&handle).map(|slot| slot.position_ms)
    }

    pub fn volume(&self, handle: EngineHandle) -> Option<f32> {
        self.slots.lock().get(&handle).map(|slot| slot.volume)
    }

    pub fn source_uri(&self, handle: EngineHandle) -> Option<String> {
        self.slots.lock().get(&handle).map(|slot| slot.uri.clone())
    }

    fn with_slot<T>(
        &self,
        handle: EngineHandle,
        f: impl FnOnce(&mut Slot) -> T,
    ) -> Result<T, EngineError> {
        self.slots
            .lock()
            .get_mut(&handle)
            .map(f)
            .ok_or(EngineError::UnknownHandle(handle))
    }
}

impl Default for FixtureEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioEngine for FixtureEngine {
    async fn load(&self, uri: &str) -> Result<EngineHandle, EngineError> {
        let handle = EngineHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        self.slots.lock().insert(
            handle,
            Slot {
                uri: uri.to_string(),
                playing: false,
                volume: 1.0,
                position_ms: 0,
            },
        );
        Ok(handle)
    }

    async fn play(&self, handle: EngineHandle) -> Result<(), EngineError> {
        self.with_slot(handle, |slot| slot.playing = true)
    }

    async fn pause(&self, handle: EngineHandle) -> Result<(), EngineError> {
        self.with_slot(handle, |slot| slot.playing = false)
    }

    async fn set_volume(&self, handle: EngineHandle, volume: f32) -> Result<(), EngineError> {
        self.with_slot(handle, |slot| slot.volume = volume.clamp(0.0, 1.0))
    }

    async fn seek(&self, handle: EngineHandle, position_ms: u64) -> Result<(), EngineError> {
        self.with_slot(handle, |slot| slot.position_ms = position_ms)
    }

    async fn unload(&self, handle: EngineHandle) -> Result<(), EngineError> {
        self.slots
            .lock()
            .remove(&handle)
            .map(|_| ())
            .ok_or(EngineError::UnknownHandle(handle))
    }
}
