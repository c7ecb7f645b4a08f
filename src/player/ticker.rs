// 1-second logical playback clock
use parking_lot::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Stop,
}

/// Owned repeating timer with explicit start/cancel. At most one task is
/// ever live: starting always cancels the previous one, and dropping the
/// ticker cancels outright.
///
/// This is a logical clock. It never reads real engine position, so it can
/// drift from true audio time if the engine stalls; no correction is
/// attempted.
pub(crate) struct Ticker {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            task: Mutex::new(None),
        }
    }

    /// Run `on_tick` once per second until it returns [`TickControl::Stop`]
    /// or the ticker is cancelled. Must be called from within a tokio
    /// runtime.
    pub fn start<F>(&self, mut on_tick: F)
    where
        F: FnMut() -> TickControl + Send + 'static,
    {
        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
        }
        *task = Some(tokio::spawn(async move {
            let mut clock = interval(Duration::from_secs(1));
            // The first tick completes immediately; swallow it so ticks
            // land on whole-second boundaries after start
            clock.tick().await;
            loop {
                clock.tick().await;
                if on_tick() == TickControl::Stop {
                    break;
                }
            }
        }));
    }

    pub fn cancel(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    async fn run_ticks(n: u32) {
        tokio::task::yield_now().await;
        for _ in 0..n {
            tokio::time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let ticker = Ticker::new();
        let count = Arc::new(AtomicU32::new(0));
        let seen = count.clone();
        ticker.start(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            TickControl::Continue
        });

        run_ticks(3).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_the_task() {
        let ticker = Ticker::new();
        let count = Arc::new(AtomicU32::new(0));
        let seen = count.clone();
        ticker.start(move || {
            if seen.fetch_add(1, Ordering::SeqCst) + 1 >= 2 {
                TickControl::Stop
            } else {
                TickControl::Continue
            }
        });

        run_ticks(5).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let ticker = Ticker::new();
        let count = Arc::new(AtomicU32::new(0));
        let seen = count.clone();
        ticker.start(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            TickControl::Continue
        });

        run_ticks(2).await;
        ticker.cancel();
        run_ticks(3).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_task() {
        let ticker = Ticker::new();
        let first = Arc::new(AtomicU32::new(0));
        let second = Arc::new(AtomicU32::new(0));

        let seen = first.clone();
        ticker.start(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            TickControl::Continue
        });
        run_ticks(1).await;

        let seen = second.clone();
        ticker.start(move || {
            seen.fetch_add(1, Ordering::SeqCst);
            TickControl::Continue
        });
        run_ticks(3).await;

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 3);
    }
}
