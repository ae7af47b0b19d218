//! Backend-to-UI events.

use shared::domain::{Mode, OperationResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    OperationFinished {
        mode: Mode,
        result: OperationResult,
    },
}

pub fn status_line(mode: Mode, result: &OperationResult) -> String {
    match result {
        OperationResult::Success { output } => {
            format!("Last {mode}: ok ({} chars)", output.chars().count())
        }
        OperationResult::Failure { message } => format!("Last {mode}: {message}"),
    }
}
