//! Transient on-screen notifications with timed auto-dismiss.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use shared::domain::Severity;
use tokio::{runtime::Handle, task::JoinHandle};

use crate::ui::{lock, Notifier};

pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
}

#[derive(Default)]
struct ToastState {
    current: Option<Toast>,
    generation: u64,
    dismiss: Option<JoinHandle<()>>,
}

/// Single notification slot. Showing a toast replaces the current one and
/// restarts the dismiss timer; a superseded timer never hides a newer toast.
#[derive(Clone)]
pub struct ToastSurface {
    state: Arc<Mutex<ToastState>>,
    runtime: Handle,
    ttl: Duration,
}

impl ToastSurface {
    pub fn new(runtime: Handle, ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ToastState::default())),
            runtime,
            ttl,
        }
    }

    pub fn current(&self) -> Option<Toast> {
        lock(&self.state).current.clone()
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let mut state = lock(&self.state);
        state.generation = state.generation.wrapping_add(1);
        state.current = Some(Toast {
            message: message.into(),
            severity,
        });
        if let Some(previous) = state.dismiss.take() {
            previous.abort();
        }

        let generation = state.generation;
        let shared = Arc::clone(&self.state);
        let ttl = self.ttl;
        state.dismiss = Some(self.runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut state = lock(&shared);
            // An aborted timer may already be past its sleep and waiting on the lock.
            if state.generation == generation {
                state.current = None;
                state.dismiss = None;
            }
        }));
    }

    pub fn dismiss(&self) {
        let mut state = lock(&self.state);
        state.generation = state.generation.wrapping_add(1);
        state.current = None;
        if let Some(pending) = state.dismiss.take() {
            pending.abort();
        }
    }
}

impl Notifier for ToastSurface {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::warn!(severity = severity.as_str(), %message, "toast"),
            _ => tracing::info!(severity = severity.as_str(), %message, "toast"),
        }
        self.show(message, severity);
    }
}
