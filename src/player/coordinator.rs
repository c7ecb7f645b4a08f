// Playback coordination: single source of truth for what is playing and
// how far along it is
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog::{Lecture, LectureKey};
use crate::engine::{AudioEngine, EngineHandle, FIXTURE_SOURCE_URI};
use crate::storage::KeyValueStore;

use super::progress::ProgressStore;
use super::state::{EngineBinding, PlaybackPhase, PlaybackSnapshot, PlaybackState};
use super::ticker::{TickControl, Ticker};

pub struct CoordinatorConfig {
    /// Every lecture streams from this source until a real content backend
    /// exists.
    pub source_uri: String,
    /// When set, lecture progress is written through to the key-value
    /// store and restored on construction; otherwise it lives in memory
    /// only and is lost on restart.
    pub persist_progress: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            source_uri: FIXTURE_SOURCE_URI.to_string(),
            persist_progress: true,
        }
    }
}

/// Owns the single logical "now playing" slot: the focused lecture, the
/// live engine handle, elapsed/total time, volume, and per-lecture saved
/// progress. UI surfaces call the command methods and render from
/// [`Coordinator::snapshot`]; engine and persistence failures never escape
/// as errors, they degrade to state changes and warnings.
pub struct Coordinator {
    engine: Arc<dyn AudioEngine>,
    progress: Arc<ProgressStore>,
    state: Arc<Mutex<PlaybackState>>,
    ticker: Ticker,
    source_uri: String,
}

enum Action {
    Pause(EngineHandle),
    Resume(EngineHandle, u64),
    Switch {
        old: Option<EngineHandle>,
        generation: u64,
        key: LectureKey,
        total: u32,
        resume_at: u32,
        volume: f32,
    },
}

impl Coordinator {
    pub fn new(
        engine: Arc<dyn AudioEngine>,
        store: Arc<dyn KeyValueStore>,
        config: CoordinatorConfig,
    ) -> Self {
        let progress = if config.persist_progress {
            ProgressStore::persistent(store)
        } else {
            ProgressStore::in_memory()
        };

        Self {
            engine,
            progress: Arc::new(progress),
            state: Arc::new(Mutex::new(PlaybackState::default())),
            ticker: Ticker::new(),
            source_uri: config.source_uri,
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.state.lock().snapshot()
    }

    /// Focus a lecture for display without touching the audio engine. A
    /// different lecture already playing keeps playing.
    pub fn select_lecture(&self, lecture: &Lecture) {
        let mut state = self.state.lock();
        let key = lecture.key();
        state.total_time = lecture.duration_seconds();
        state.current_time = self.progress.get(&key).min(state.total_time);
        state.highlighted_lecture = Some(key);
        state.current_lecture = Some(lecture.clone());
    }

    /// Play/pause entry point. Same lecture as the engine binding flips
    /// between playing and paused without reloading; a different lecture
    /// tears the old handle down, binds the fixture source, restores saved
    /// progress, and starts playing. Overlapping switches are serialized by
    /// generation: a superseded switch unloads its own handle and backs
    /// out.
    pub async fn toggle_playback(&self, lecture: &Lecture) {
        let action = {
            let mut state = self.state.lock();
            let bound = state
                .binding
                .as_ref()
                .map(|binding| (binding.handle, binding.key.clone()));
            match bound {
                Some((handle, bound_key)) if bound_key == lecture.key() => {
                    if state.is_playing() {
                        state.phase = PlaybackPhase::Paused;
                        Action::Pause(handle)
                    } else {
                        let generation = state.generation;
                        state.phase = PlaybackPhase::Playing;
                        Action::Resume(handle, generation)
                    }
                }
                _ => {
                    state.generation += 1;
                    let key = lecture.key();
                    let total = lecture.duration_seconds();
                    let resume_at = self.progress.get(&key).min(total);
                    let old = state.binding.take().map(|binding| binding.handle);

                    state.phase = PlaybackPhase::Loading;
                    state.current_lecture = Some(lecture.clone());
                    state.highlighted_lecture = Some(key.clone());
                    state.total_time = total;
                    state.current_time = resume_at;

                    Action::Switch {
                        old,
                        generation: state.generation,
                        key,
                        total,
                        resume_at,
                        volume: state.volume,
                    }
                }
            }
        };

        match action {
            Action::Pause(handle) => {
                self.ticker.cancel();
                if let Err(e) = self.engine.pause(handle).await {
                    // The logical pause stands even if the engine refused
                    warn!("engine pause failed: {e}");
                }
            }
            Action::Resume(handle, generation) => {
                if let Err(e) = self.engine.play(handle).await {
                    warn!("engine resume failed: {e}");
                    let mut state = self.state.lock();
                    // A switch may have superseded this resume while the
                    // engine call was in flight; only roll back our own
                    if state.generation == generation {
                        state.phase = PlaybackPhase::Paused;
                    }
                    return;
                }
                self.start_ticker();
            }
            Action::Switch {
                old,
                generation,
                key,
                total,
                resume_at,
                volume,
            } => {
                self.switch_track(old, generation, key, total, resume_at, volume)
                    .await;
            }
        }
    }

    async fn switch_track(
        &self,
        old: Option<EngineHandle>,
        generation: u64,
        key: LectureKey,
        total: u32,
        resume_at: u32,
        volume: f32,
    ) {
        // The old lecture's clock must stop before any engine call lands
        self.ticker.cancel();

        if let Some(old) = old {
            if let Err(e) = self.engine.unload(old).await {
                warn!("unload of previous lecture failed: {e}");
            }
        }

        let handle = match self.engine.load(&self.source_uri).await {
            Ok(handle) => handle,
            Err(e) => {
                warn!("failed to load audio source: {e}");
                let mut state = self.state.lock();
                if state.generation == generation {
                    state.phase = PlaybackPhase::Idle;
                }
                return;
            }
        };

        if self.superseded(generation) {
            debug!("dropping superseded switch to {key}");
            self.discard(handle).await;
            return;
        }

        if resume_at > 0 {
            if let Err(e) = self.engine.seek(handle, u64::from(resume_at) * 1000).await {
                // Elapsed display still resumes from the stored value
                warn!("resume seek failed: {e}");
            }
        }
        if let Err(e) = self.engine.set_volume(handle, volume).await {
            warn!("volume apply failed: {e}");
        }

        let started = self.engine.play(handle).await;

        // Commit under the lock, but let the guard's scope close before any
        // further engine call so the future stays Send
        let committed = {
            let mut state = self.state.lock();
            if state.generation == generation {
                state.binding = Some(EngineBinding {
                    handle,
                    key: key.clone(),
                    total,
                });
                match &started {
                    Ok(()) => state.phase = PlaybackPhase::Playing,
                    // Never claim playback the engine did not start
                    Err(_) => state.phase = PlaybackPhase::Paused,
                }
                true
            } else {
                false
            }
        };

        if !committed {
            debug!("dropping superseded switch to {key}");
            self.discard(handle).await;
            return;
        }

        if let Err(e) = started {
            warn!("engine play failed: {e}");
            return;
        }

        self.start_ticker();
    }

    fn superseded(&self, generation: u64) -> bool {
        self.state.lock().generation != generation
    }

    async fn discard(&self, handle: EngineHandle) {
        if let Err(e) = self.engine.unload(handle).await {
            warn!("unload of superseded handle failed: {e}");
        }
    }

    /// Clamp to [0, 1], remember as the default for future loads, and apply
    /// to the live handle if one exists.
    pub async fn set_volume(&self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        let handle = {
            let mut state = self.state.lock();
            state.volume = volume;
            state.binding.as_ref().map(|binding| binding.handle)
        };

        if let Some(handle) = handle {
            if let Err(e) = self.engine.set_volume(handle, volume).await {
                warn!("live volume change failed: {e}");
            }
        }
    }

    /// Move the focused lecture to `seconds`, clamped to [0, total]. Writes
    /// through to the progress store; the engine reposition is best-effort
    /// and only issued when the focused lecture is the bound one.
    pub async fn seek(&self, seconds: i64) {
        let (key, clamped, handle) = {
            let mut state = self.state.lock();
            let Some(lecture) = &state.current_lecture else {
                return;
            };
            let key = lecture.key();
            let clamped = seconds.clamp(0, i64::from(state.total_time)) as u32;
            state.current_time = clamped;
            let handle = state
                .binding
                .as_ref()
                .filter(|binding| binding.key == key)
                .map(|binding| binding.handle);
            (key, clamped, handle)
        };

        self.progress.set(&key, clamped);

        if let Some(handle) = handle {
            if let Err(e) = self.engine.seek(handle, u64::from(clamped) * 1000).await {
                warn!("engine seek failed: {e}");
            }
        }
    }

    pub fn open_detail(&self, lecture: &Lecture) {
        let mut state = self.state.lock();
        state.selected_lecture = Some(lecture.clone());
        state.show_lecture_detail = true;
    }

    /// Open the detail sheet for whatever is bound to the mini-player.
    /// Nothing playing is a defined no-op, not an error.
    pub fn open_current_detail(&self) {
        let mut state = self.state.lock();
        if let Some(current) = state.current_lecture.clone() {
            state.selected_lecture = Some(current);
            state.show_lecture_detail = true;
        }
    }

    pub fn close_detail(&self) {
        self.state.lock().show_lecture_detail = false;
    }

    /// List-row label: the raw duration string for a lecture that was never
    /// started or has been completed, otherwise whole minutes left, rounded
    /// up.
    pub fn remaining_label(&self, lecture: &Lecture) -> String {
        let total = lecture.duration_seconds();
        let elapsed = self.progress.get(&lecture.key());
        if elapsed == 0 || elapsed >= total {
            return lecture.duration.clone();
        }
        format!("{} min left", (total - elapsed).div_ceil(60))
    }

    /// Fraction of the lecture completed in [0, 1]; 0 when the duration is
    /// malformed.
    pub fn fraction_complete(&self, lecture: &Lecture) -> f32 {
        let total = lecture.duration_seconds();
        if total == 0 {
            return 0.0;
        }
        (self.progress.get(&lecture.key()) as f32 / total as f32).min(1.0)
    }

    pub fn has_started(&self, lecture: &Lecture) -> bool {
        self.progress.get(&lecture.key()) > 0
    }

    /// Recorded elapsed seconds for a lecture key; 0 when never played.
    pub fn progress_seconds(&self, key: &LectureKey) -> u32 {
        self.progress.get(key)
    }

    fn start_ticker(&self) {
        let state = Arc::clone(&self.state);
        let progress = Arc::clone(&self.progress);
        let engine = Arc::clone(&self.engine);
        let generation = state.lock().generation;

        self.ticker.start(move || {
            let mut state = state.lock();
            if state.generation != generation || !state.is_playing() {
                return TickControl::Stop;
            }
            let Some(binding) = &state.binding else {
                return TickControl::Stop;
            };
            let key = binding.key.clone();
            let total = binding.total;
            let handle = binding.handle;

            let elapsed = (progress.get(&key) + 1).min(total);
            progress.set(&key, elapsed);

            // Mirror into the displayed clock only while the bound lecture
            // is also the focused one
            let focused = state.highlighted_lecture.as_ref() == Some(&key);
            if focused {
                state.current_time = elapsed;
            }

            if elapsed >= total {
                // Terminal for this play-through; stored progress stays at
                // the full total ("completed")
                state.phase = PlaybackPhase::Idle;
                debug!("lecture {key} reached its end at {total}s");
                let engine = Arc::clone(&engine);
                tokio::spawn(async move {
                    if let Err(e) = engine.pause(handle).await {
                        warn!("engine pause at end of lecture failed: {e}");
                    }
                });
                return TickControl::Stop;
            }

            TickControl::Continue
        });
    }
}
