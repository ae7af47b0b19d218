use shared::domain::Mode;
use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred";

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("empty input for {0}")]
    EmptyInput(Mode),
    #[error("{0} already in flight on this control")]
    InFlight(Mode),
    #[error("backend rejected {mode} request with status {status}")]
    Backend {
        mode: Mode,
        status: u16,
        message: Option<String>,
    },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl OperationError {
    /// Text shown to the user. Transport detail never leaks past this point.
    pub fn user_message(&self) -> String {
        match self {
            OperationError::EmptyInput(mode) => mode.empty_input_message().to_string(),
            OperationError::InFlight(mode) => mode.in_progress_message().to_string(),
            OperationError::Backend { mode, message, .. } => message
                .as_deref()
                .filter(|message| !message.is_empty())
                .unwrap_or(mode.generic_failure_message())
                .to_string(),
            OperationError::Transport(_) | OperationError::MalformedResponse(_) => {
                NETWORK_ERROR_MESSAGE.to_string()
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            OperationError::Transport(_) | OperationError::MalformedResponse(_)
        )
    }
}
