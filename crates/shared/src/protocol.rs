use serde::{Deserialize, Serialize};

use crate::domain::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub encoded: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResponse {
    pub decoded: String,
}

/// Body of a non-success response. `error` may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

/// Pulls the mode-specific output field out of a success body.
pub fn output_from_success_body(mode: Mode, body: &[u8]) -> Result<String, serde_json::Error> {
    match mode {
        Mode::Encode => serde_json::from_slice::<EncodeResponse>(body).map(|res| res.encoded),
        Mode::Decode => serde_json::from_slice::<DecodeResponse>(body).map(|res| res.decoded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str("{}").expect("json");
        assert_eq!(body.error, None);
        assert_eq!(serde_json::to_string(&body).expect("json"), "{}");
    }

    #[test]
    fn success_body_requires_mode_field() {
        let encoded = output_from_success_body(Mode::Encode, br#"{"encoded":"aGk="}"#);
        assert_eq!(encoded.expect("encoded"), "aGk=");

        assert!(output_from_success_body(Mode::Decode, br#"{"encoded":"aGk="}"#).is_err());
    }
}
