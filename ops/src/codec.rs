use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::OpError;

/// Encodes the UTF-8 bytes of `text` as standard, padded base64.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes standard base64 into UTF-8 text.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// [`OpError::Decode`] if the input is not valid base64 or the decoded bytes
/// are not UTF-8.
pub fn decode_base64(text: &str) -> Result<String, OpError> {
    let bytes = STANDARD.decode(text.trim())?;
    Ok(String::from_utf8(bytes)?)
}
