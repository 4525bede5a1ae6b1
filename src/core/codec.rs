//! Text ⇄ base64 transcoding.
//!
//! The panel transmits free-form text fields (display names, descriptions,
//! ban reasons, file and log contents) base64-encoded so they survive
//! transport untouched. Read paths decode, write paths encode.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Errors raised when decoding a base64 text field.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode a string as base64 over its UTF-8 bytes.
pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a base64 string back into UTF-8 text.
pub fn decode(encoded: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}
