use base64::{
    alphabet,
    engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
    Engine as _,
};
use shared::{
    domain::Mode,
    error::ApiError,
    protocol::{DecodeResponse, EncodeResponse, TextRequest},
};

/// Standard alphabet that tolerates non-zero trailing bits, so `SGl=` decodes like `SGk=`.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

pub fn encode_route() -> &'static str {
    Mode::Encode.endpoint()
}

pub fn decode_route() -> &'static str {
    Mode::Decode.endpoint()
}

/// Parses a `{"text": ...}` body. Non-JSON bodies, a missing field and an
/// empty `text` are all rejected as an invalid request.
pub fn parse_text_request(body: &[u8]) -> Result<TextRequest, ApiError> {
    let req: TextRequest =
        serde_json::from_slice(body).map_err(|_| ApiError::invalid_request())?;
    if req.text.is_empty() {
        return Err(ApiError::invalid_request());
    }
    Ok(req)
}

pub fn encode(req: &TextRequest) -> EncodeResponse {
    EncodeResponse {
        encoded: STANDARD.encode(req.text.as_bytes()),
    }
}

pub fn decode(req: &TextRequest) -> Result<DecodeResponse, ApiError> {
    let cleaned: String = req
        .text
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | ' '))
        .collect();

    let bytes = LENIENT_STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|_| ApiError::invalid_base64())?;

    Ok(DecodeResponse {
        decoded: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
