// Audio engine capability
pub mod fixture;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// All lectures stream from a fixed fixture file until a real content
/// backend exists.
pub const FIXTURE_SOURCE_URI: &str =
    "https://www2.cs.uic.edu/~i101/SoundFiles/BabyElephantWalk60.wav";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("audio engine unavailable")]
    Unavailable,
    #[error("failed to load '{uri}': {reason}")]
    Load { uri: String, reason: String },
    #[error("no loaded audio for handle {0}")]
    UnknownHandle(EngineHandle),
    #[error("engine command failed: {0}")]
    Command(String),
}

/// Identity of one loaded, playable audio instance. Minted by engine
/// implementations; opaque to everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineHandle(pub u64);

impl fmt::Display for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Commands issued to the underlying audio engine. Decode and output may
/// run on engine-owned threads; the coordinator only awaits command
/// completion and never blocks on playback itself.
#[async_trait]
pub trait AudioEngine: Send + Sync {
    async fn load(&self, uri: &str) -> Result<EngineHandle, EngineError>;
    async fn play(&self, handle: EngineHandle) -> Result<(), EngineError>;
    async fn pause(&self, handle: EngineHandle) -> Result<(), EngineError>;
    async fn set_volume(&self, handle: EngineHandle, volume: f32) -> Result<(), EngineError>;
    async fn seek(&self, handle: EngineHandle, position_ms: u64) -> Result<(), EngineError>;
    async fn unload(&self, handle: EngineHandle) -> Result<(), EngineError>;
}
