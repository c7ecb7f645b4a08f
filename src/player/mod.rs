// Playback core: coordinator, progress tracking, tick scheduling
pub mod coordinator;
pub mod progress;
pub mod state;
mod ticker;

pub use coordinator::{Coordinator, CoordinatorConfig};
pub use progress::{ProgressStore, PROGRESS_KEY};
pub use state::{PlaybackPhase, PlaybackSnapshot};
