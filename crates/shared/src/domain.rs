use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Encode, Mode::Decode];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }

    /// Path of the backend endpoint serving this mode.
    pub fn endpoint(self) -> &'static str {
        match self {
            Mode::Encode => "/api/encode",
            Mode::Decode => "/api/decode",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Mode::Encode => "Encoding...",
            Mode::Decode => "Decoding...",
        }
    }

    pub fn idle_label(self) -> &'static str {
        match self {
            Mode::Encode => "Encode",
            Mode::Decode => "Decode",
        }
    }

    pub fn empty_input_message(self) -> &'static str {
        match self {
            Mode::Encode => "Please enter text to encode",
            Mode::Decode => "Please enter base64 string to decode",
        }
    }

    pub fn generic_failure_message(self) -> &'static str {
        match self {
            Mode::Encode => "Encoding failed",
            Mode::Decode => "Decoding failed",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Mode::Encode => "Text encoded successfully!",
            Mode::Decode => "Text decoded successfully!",
        }
    }

    pub fn in_progress_message(self) -> &'static str {
        match self {
            Mode::Encode => "Encoding already in progress",
            Mode::Decode => "Decoding already in progress",
        }
    }

    pub fn cleared_message(self) -> &'static str {
        match self {
            Mode::Encode => "Encode fields cleared",
            Mode::Decode => "Decode fields cleared",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A validated request: only constructible with a payload that is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    mode: Mode,
    payload: String,
}

impl OperationRequest {
    /// Returns `None` when `raw_input` is blank. The payload keeps its original whitespace.
    pub fn new(mode: Mode, raw_input: impl Into<String>) -> Option<Self> {
        let payload = raw_input.into();
        if payload.trim().is_empty() {
            return None;
        }
        Some(Self { mode, payload })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    Success { output: String },
    Failure { message: String },
}

impl OperationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            OperationResult::Success { .. } => None,
            OperationResult::Failure { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_never_becomes_a_request() {
        assert!(OperationRequest::new(Mode::Encode, "").is_none());
        assert!(OperationRequest::new(Mode::Decode, " \n\t ").is_none());
    }

    #[test]
    fn request_keeps_untrimmed_payload() {
        let request = OperationRequest::new(Mode::Encode, "  hi \n").expect("request");
        assert_eq!(request.payload(), "  hi \n");
        assert_eq!(request.mode(), Mode::Encode);
    }

    #[test]
    fn modes_map_to_distinct_endpoints() {
        assert_eq!(Mode::Encode.endpoint(), "/api/encode");
        assert_eq!(Mode::Decode.endpoint(), "/api/decode");
    }
}
