// Playback state owned by the coordinator
use serde::Serialize;

use crate::catalog::{Lecture, LectureKey};
use crate::engine::EngineHandle;

/// Where the logical lecture slot is in its lifecycle.
///
/// `Idle` covers both "nothing ever bound" and "play-through ran to
/// completion"; in the latter case the engine handle is retained so that a
/// replay toggle resumes without a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaybackPhase {
    Idle,
    Loading,
    Playing,
    Paused,
}

/// The lecture currently bound to the live engine handle. Distinct from the
/// focused lecture: selecting a lecture for display never rebinds audio.
#[derive(Debug)]
pub(crate) struct EngineBinding {
    pub handle: EngineHandle,
    pub key: LectureKey,
    pub total: u32,
}

#[derive(Debug)]
pub(crate) struct PlaybackState {
    pub current_lecture: Option<Lecture>,
    pub phase: PlaybackPhase,
    pub volume: f32,
    pub current_time: u32,
    pub total_time: u32,
    pub highlighted_lecture: Option<LectureKey>,
    pub selected_lecture: Option<Lecture>,
    pub show_lecture_detail: bool,
    pub binding: Option<EngineBinding>,
    // Bumped on every track switch; stale switch completions check it and
    // back out instead of clobbering a newer switch
    pub generation: u64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_lecture: None,
            phase: PlaybackPhase::Idle,
            volume: 0.7,
            current_time: 0,
            total_time: 0,
            highlighted_lecture: None,
            selected_lecture: None,
            show_lecture_detail: false,
            binding: None,
            generation: 0,
        }
    }
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_lecture: self.current_lecture.clone(),
            phase: self.phase,
            is_playing: self.is_playing(),
            volume: self.volume,
            current_time: self.current_time,
            total_time: self.total_time,
            highlighted_lecture: self.highlighted_lecture.clone(),
            selected_lecture: self.selected_lecture.clone(),
            show_lecture_detail: self.show_lecture_detail,
        }
    }
}

/// Read-only projection handed to UI surfaces (mini-player, lecture lists,
/// detail sheet). UI never mutates playback state directly.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackSnapshot {
    pub current_lecture: Option<Lecture>,
    pub phase: PlaybackPhase,
    pub is_playing: bool,
    pub volume: f32,
    pub current_time: u32,
    pub total_time: u32,
    pub highlighted_lecture: Option<LectureKey>,
    pub selected_lecture: Option<Lecture>,
    pub show_lecture_detail: bool,
}
