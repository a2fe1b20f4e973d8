//! Unverified JWT inspection.
//!
//! The token's header and payload are decoded and returned as JSON. The
//! signature is never checked, and neither are the algorithm or any claim:
//! `alg: none`, unknown algorithms, expired tokens and forged or corrupted
//! signatures all decode the same as a genuine token.

use base64::Engine;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;

use crate::{Capabilities, OpError};

/// base64url that accepts segments with or without `=` padding.
#[cfg_attr(not(feature = "jwt"), allow(dead_code))]
const SEGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Header and payload of a decoded token, in the key order of the token.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Value,
}

impl DecodedJwt {
    /// Renders the header as 2-space-indented JSON.
    pub fn header_pretty(&self) -> String {
        pretty(&self.header)
    }

    /// Renders the payload as 2-space-indented JSON.
    pub fn payload_pretty(&self) -> String {
        pretty(&self.payload)
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Decodes a JWT without verifying its signature.
///
/// # Errors
///
/// - [`OpError::MissingDependency`] when `capabilities.jwt` is off.
/// - [`OpError::Decode`] when the token does not have three segments, or the
///   header or payload is not base64url-encoded JSON object.
pub fn decode_jwt(token: &str, capabilities: &Capabilities) -> Result<DecodedJwt, OpError> {
    if !capabilities.jwt {
        return Err(missing_dependency());
    }
    decode_unverified(token.trim())
}

fn missing_dependency() -> OpError {
    OpError::MissingDependency(
        "JWT decoding is not available in this build (rebuild toolbox-ops with the `jwt` feature)"
            .to_string(),
    )
}

#[cfg(feature = "jwt")]
fn decode_unverified(token: &str) -> Result<DecodedJwt, OpError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header, payload, _signature] = segments.as_slice() else {
        return Err(OpError::Decode(format!(
            "invalid JWT: expected 3 segments, found {}",
            segments.len()
        )));
    };

    let decoded = DecodedJwt {
        header: decode_segment("header", header)?,
        payload: decode_segment("payload", payload)?,
    };
    tracing::debug!(
        alg = decoded.header.get("alg").and_then(serde_json::Value::as_str).unwrap_or("<unset>"),
        "Decoded JWT without signature verification"
    );
    Ok(decoded)
}

#[cfg(not(feature = "jwt"))]
fn decode_unverified(_token: &str) -> Result<DecodedJwt, OpError> {
    Err(missing_dependency())
}

/// Decodes one base64url segment into a JSON object.
#[cfg_attr(not(feature = "jwt"), allow(dead_code))]
fn decode_segment(name: &str, segment: &str) -> Result<Value, OpError> {
    let bytes = SEGMENT_ENGINE
        .decode(segment)
        .map_err(|e| OpError::Decode(format!("invalid JWT {name} ({e})")))?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| OpError::Decode(format!("invalid JWT {name} ({e})")))?;
    if !value.is_object() {
        return Err(OpError::Decode(format!(
            "invalid JWT {name}: expected a JSON object"
        )));
    }
    Ok(value)
}
