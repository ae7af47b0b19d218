//! Backend commands queued from UI to backend worker.

use shared::domain::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    RunOperation { mode: Mode },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::RunOperation { mode: Mode::Encode } => "run_encode",
            BackendCommand::RunOperation { mode: Mode::Decode } => "run_decode",
        }
    }
}
