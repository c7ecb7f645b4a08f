// Session gate: persisted auth flag deciding onboarding vs main app
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::storage::{KeyValueStore, StorageError};

pub const AUTH_KEY: &str = "auth-status";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to persist session state: {0}")]
    Persist(#[from] StorageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Loading,
    Ready { authenticated: bool },
}

/// Gates the initial navigation target. Until [`SessionGate::restore`] has
/// run, callers must treat the session as undecided and route nowhere.
///
/// Logout clears the auth flag only; lecture progress lives under its own
/// key and deliberately survives logout.
pub struct SessionGate {
    store: Arc<dyn KeyValueStore>,
    state: Mutex<GateState>,
}

impl SessionGate {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            state: Mutex::new(GateState::Loading),
        }
    }

    /// Resolve the persisted flag. Read failures default to not
    /// authenticated; access is never granted on a failed read.
    pub fn restore(&self) {
        let authenticated = match self.store.get_string(AUTH_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("auth flag read failed, treating as signed out: {e}");
                false
            }
        };
        *self.state.lock() = GateState::Ready { authenticated };
    }

    pub fn is_loading(&self) -> bool {
        *self.state.lock() == GateState::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            *self.state.lock(),
            GateState::Ready {
                authenticated: true
            }
        )
    }

    /// Persist the flag first; a write failure is a failed login attempt
    /// and leaves the gate signed out.
    pub fn login(&self) -> Result<(), SessionError> {
        self.store.set_string(AUTH_KEY, "true")?;
        *self.state.lock() = GateState::Ready {
            authenticated: true,
        };
        Ok(())
    }

    /// Sign out locally even if the store write fails; the error is still
    /// reported so the caller can surface it.
    pub fn logout(&self) -> Result<(), SessionError> {
        *self.state.lock() = GateState::Ready {
            authenticated: false,
        };
        self.store.remove_string(AUTH_KEY)?;
        Ok(())
    }
}
