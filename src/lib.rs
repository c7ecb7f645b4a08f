// Subjct - lecture listening client core
// Module declarations
pub mod catalog;
pub mod duration;
pub mod engine;
pub mod player;
pub mod session;
pub mod storage;

pub use catalog::{Course, Lecture, LectureKey, Semester};
pub use engine::fixture::FixtureEngine;
pub use engine::{AudioEngine, EngineError, EngineHandle, FIXTURE_SOURCE_URI};
pub use player::{Coordinator, CoordinatorConfig, PlaybackPhase, PlaybackSnapshot, ProgressStore};
pub use session::{SessionError, SessionGate, AUTH_KEY};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError};
