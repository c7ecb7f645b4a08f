// Session gate and progress durability working over one shared store
mod common;

use std::sync::Arc;

use common::{lecture, run_ticks, RecordingEngine};
use subjct::{
    Coordinator, CoordinatorConfig, KeyValueStore, MemoryStore, SessionGate, SqliteStore,
};

#[tokio::test(start_paused = true)]
async fn logout_keeps_lecture_progress() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let engine = Arc::new(RecordingEngine::new());
    let coord = Coordinator::new(engine, store.clone(), CoordinatorConfig::default());
    let gate = SessionGate::new(store.clone());
    gate.restore();
    gate.login().unwrap();

    let l = lecture("PHYS 211", "2", "55:30");
    coord.toggle_playback(&l).await;
    run_ticks(10).await;
    assert_eq!(coord.progress_seconds(&l.key()), 10);

    gate.logout().unwrap();

    assert!(!gate.is_authenticated());
    assert_eq!(coord.progress_seconds(&l.key()), 10);

    // The persisted record survives too; only the auth flag was removed
    let reopened = Coordinator::new(
        Arc::new(RecordingEngine::new()),
        store,
        CoordinatorConfig::default(),
    );
    assert_eq!(reopened.progress_seconds(&l.key()), 10);
}

#[tokio::test(start_paused = true)]
async fn progress_survives_restart_when_persisted() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("subjct.db");
    let l = lecture("CS 210", "1", "50:00");

    {
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::new(path.clone()).unwrap());
        let coord = Coordinator::new(
            Arc::new(RecordingEngine::new()),
            store,
            CoordinatorConfig::default(),
        );
        coord.toggle_playback(&l).await;
        run_ticks(7).await;
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::new(path).unwrap());
    let coord = Coordinator::new(
        Arc::new(RecordingEngine::new()),
        store,
        CoordinatorConfig::default(),
    );
    assert_eq!(coord.progress_seconds(&l.key()), 7);

    // Resuming picks up where the previous run stopped
    coord.select_lecture(&l);
    assert_eq!(coord.snapshot().current_time, 7);
}

#[tokio::test(start_paused = true)]
async fn in_memory_progress_is_lost_on_restart() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let config = || CoordinatorConfig {
        persist_progress: false,
        ..CoordinatorConfig::default()
    };
    let l = lecture("CS 210", "1", "50:00");

    let coord = Coordinator::new(Arc::new(RecordingEngine::new()), store.clone(), config());
    coord.toggle_playback(&l).await;
    run_ticks(5).await;
    assert_eq!(coord.progress_seconds(&l.key()), 5);

    let next = Coordinator::new(Arc::new(RecordingEngine::new()), store, config());
    assert_eq!(next.progress_seconds(&l.key()), 0);
}
