//! Runtime bridge between UI command queue and backend event intake.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use client_core::{HttpCodecBackend, OperationController, UiBindings};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use tokio::runtime::Runtime;

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

pub struct OperationWorker {
    pub controller: OperationController<HttpCodecBackend>,
    pub bindings: UiBindings,
}

/// Drains the command queue on a dedicated thread. Each operation runs as its
/// own task so the two panels never wait on each other.
pub fn launch(
    runtime: Runtime,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    worker: Arc<OperationWorker>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::RunOperation { mode } => {
                    let worker = Arc::clone(&worker);
                    let ui_tx = ui_tx.clone();
                    runtime.spawn(async move {
                        let result = worker.controller.run_panel(mode, &worker.bindings).await;
                        publish(&ui_tx, UiEvent::OperationFinished { mode, result });
                    });
                }
            }
        }
        tracing::info!("ui command queue closed; backend worker stopping");
    })
}

/// Hands an event to the UI thread. Returns whether it was delivered.
pub fn publish(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(event)) => {
            tracing::warn!(?event, "ui event queue is full; dropping backend event");
            false
        }
        Err(TrySendError::Disconnected(event)) => {
            tracing::warn!(?event, "ui event queue disconnected; dropping backend event");
            false
        }
    }
}
