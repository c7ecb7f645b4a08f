// Shared test doubles for coordinator tests
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use subjct::{AudioEngine, EngineError, EngineHandle, Lecture};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load(String),
    Play(EngineHandle),
    Pause(EngineHandle),
    SetVolume(EngineHandle, f32),
    Seek(EngineHandle, u64),
    Unload(EngineHandle),
}

/// Engine double that records every command and can be told to fail
/// individual commands.
pub struct RecordingEngine {
    calls: Mutex<Vec<EngineCall>>,
    next_handle: AtomicU64,
    fail_load: AtomicBool,
    fail_play: AtomicBool,
    fail_pause: AtomicBool,
    fail_seek: AtomicBool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_handle: AtomicU64::new(1),
            fail_load: AtomicBool::new(false),
            fail_play: AtomicBool::new(false),
            fail_pause: AtomicBool::new(false),
            fail_seek: AtomicBool::new(false),
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, matches: impl Fn(&EngineCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| matches(call)).count()
    }

    pub fn fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn fail_play(&self, fail: bool) {
        self.fail_play.store(fail, Ordering::SeqCst);
    }

    pub fn fail_pause(&self, fail: bool) {
        self.fail_pause.store(fail, Ordering::SeqCst);
    }

    pub fn fail_seek(&self, fail: bool) {
        self.fail_seek.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: EngineCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl AudioEngine for RecordingEngine {
    async fn load(&self, uri: &str) -> Result<EngineHandle, EngineError> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(EngineError::Load {
                uri: uri.to_string(),
                reason: "injected failure".to_string(),
            });
        }
        let handle = EngineHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));
        self.record(EngineCall::Load(uri.to_string()));
        Ok(handle)
    }

    async fn play(&self, handle: EngineHandle) -> Result<(), EngineError> {
        if self.fail_play.load(Ordering::SeqCst) {
            return Err(EngineError::Command("injected play failure".to_string()));
        }
        self.record(EngineCall::Play(handle));
        Ok(())
    }

    async fn pause(&self, handle: EngineHandle) -> Result<(), EngineError> {
        if self.fail_pause.load(Ordering::SeqCst) {
            return Err(EngineError::Command("injected pause failure".to_string()));
        }
        self.record(EngineCall::Pause(handle));
        Ok(())
    }

    async fn set_volume(&self, handle: EngineHandle, volume: f32) -> Result<(), EngineError> {
        self.record(EngineCall::SetVolume(handle, volume));
        Ok(())
    }

    async fn seek(&self, handle: EngineHandle, position_ms: u64) -> Result<(), EngineError> {
        if self.fail_seek.load(Ordering::SeqCst) {
            return Err(EngineError::Command("injected seek failure".to_string()));
        }
        self.record(EngineCall::Seek(handle, position_ms));
        Ok(())
    }

    async fn unload(&self, handle: EngineHandle) -> Result<(), EngineError> {
        self.record(EngineCall::Unload(handle));
        Ok(())
    }
}

pub fn lecture(course: &str, id: &str, duration: &str) -> Lecture {
    Lecture {
        id: id.to_string(),
        course: course.to_string(),
        title: format!("Lecture {id}"),
        instructor: "Dr. Michael Chen".to_string(),
        duration: duration.to_string(),
        date: "2024-03-17".to_string(),
        description: "Recorded class session.".to_string(),
    }
}

/// Advance paused virtual time one second at a time, yielding so the tick
/// task gets to run after each step.
pub async fn run_ticks(n: u32) {
    tokio::task::yield_now().await;
    for _ in 0..n {
        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
    }
}
