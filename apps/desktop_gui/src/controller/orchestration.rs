//! Command orchestration helpers from UI actions to backend command queue.

use client_core::BusyableControl;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues an operation unless its control is already busy. Returns whether it was queued.
pub fn dispatch_operation(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    trigger: &dyn BusyableControl,
    status: &mut String,
) -> bool {
    if !trigger.is_enabled() {
        tracing::debug!(command = cmd.name(), "control busy; ignoring trigger");
        return false;
    }

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd.name(), "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected; restart the app".to_string();
            false
        }
    }
}
