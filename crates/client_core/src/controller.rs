//! Runs one encode or decode interaction end to end.
//!
//! The triggering control moves Idle -> Busy -> Idle. Busy is entered only
//! after validation passes and only on an enabled control. It is released by
//! [`BusyGuard`]'s `Drop`, so every exit path restores the control, including
//! a dropped future or a panic.

use std::sync::Arc;

use shared::domain::{Mode, OperationRequest, OperationResult, Severity};
use tracing::{debug, error, warn};

use crate::{
    error::OperationError,
    ui::{BusyableControl, Notifier, TextSurface, UiBindings},
    CodecBackend,
};

pub struct BusyGuard<'a> {
    control: &'a dyn BusyableControl,
    label: String,
    enabled: bool,
}

impl<'a> BusyGuard<'a> {
    pub fn acquire(control: &'a dyn BusyableControl, busy_label: &str) -> Self {
        let label = control.label();
        let enabled = control.is_enabled();
        control.set_enabled(false);
        control.set_label(busy_label);
        Self {
            control,
            label,
            enabled,
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.control.set_label(&self.label);
        self.control.set_enabled(self.enabled);
    }
}

pub struct OperationController<B> {
    backend: B,
    notifier: Arc<dyn Notifier>,
}

impl<B: CodecBackend> OperationController<B> {
    pub fn new(backend: B, notifier: Arc<dyn Notifier>) -> Self {
        Self { backend, notifier }
    }

    pub async fn perform_operation(
        &self,
        mode: Mode,
        raw_input: &str,
        control: &dyn BusyableControl,
        output: &dyn TextSurface,
    ) -> OperationResult {
        let Some(request) = OperationRequest::new(mode, raw_input) else {
            let err = OperationError::EmptyInput(mode);
            return self.fail(&err);
        };
        // A disabled control belongs to an operation already in flight.
        if !control.is_enabled() {
            return self.fail(&OperationError::InFlight(mode));
        }

        let _busy = BusyGuard::acquire(control, mode.busy_label());
        debug!(%mode, bytes = request.payload().len(), "dispatching operation");

        match self.backend.submit(&request).await {
            Ok(value) => {
                output.set_text(&value);
                self.notifier.notify(mode.success_message(), Severity::Success);
                OperationResult::Success { output: value }
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Reads the panel's input and runs the operation on the panel's own control and output.
    pub async fn run_panel(&self, mode: Mode, bindings: &UiBindings) -> OperationResult {
        let panel = bindings.panel(mode);
        let input = panel.input.text();
        self.perform_operation(mode, &input, panel.trigger.as_ref(), panel.output.as_ref())
            .await
    }

    fn fail(&self, err: &OperationError) -> OperationResult {
        if err.is_transport() {
            error!(error = %err, "operation failed in transport");
        } else {
            warn!(error = %err, "operation failed");
        }
        let message = err.user_message();
        self.notifier.notify(&message, Severity::Error);
        OperationResult::Failure { message }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
