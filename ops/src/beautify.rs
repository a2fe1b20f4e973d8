//! JSON and YAML pretty-printing.
//!
//! Both formatters keep the key order of the input and emit non-ASCII text
//! as-is rather than escaping it.

use crate::OpError;

/// Re-serializes JSON with 2-space indentation.
///
/// The output is stable: beautifying it again yields the same text.
///
/// # Errors
///
/// [`OpError::Parse`] if `input` is not valid JSON.
pub fn beautify_json(input: &str) -> Result<String, OpError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Re-serializes YAML in block style.
///
/// # Errors
///
/// [`OpError::Parse`] if `input` is not a single valid YAML document.
pub fn beautify_yaml(input: &str) -> Result<String, OpError> {
    let value: serde_yaml::Value = serde_yaml::from_str(input)?;
    let rendered = serde_yaml::to_string(&value)?;
    Ok(rendered.trim_end().to_string())
}
