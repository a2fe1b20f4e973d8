//! Handler error type.

use thiserror::Error;
use toolbox_core::ErrorKind;

/// Failure raised by an operation handler.
///
/// The `Display` impl is the message shown to the user; [`OpError::kind`]
/// places it in the shared taxonomy.
#[derive(Debug, Error)]
pub enum OpError {
    /// Input is not valid base64, not UTF-8, or not a well-formed JWT.
    #[error("decode error: {0}")]
    Decode(String),

    /// Input is not a valid document of the named format.
    #[error("{format} error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// An external program is missing, failed, or timed out.
    #[error("{tool} error: {message}")]
    ExternalTool {
        tool: &'static str,
        message: String,
    },

    /// DNS resolution failed or the record type is not supported.
    #[error("DNS error: {0}")]
    Resolution(String),

    /// An optional capability was left out of this build.
    #[error("{0}")]
    MissingDependency(String),
}

impl OpError {
    /// Returns the taxonomy entry for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode(_) => ErrorKind::DecodeError,
            Self::Parse { .. } => ErrorKind::ParseError,
            Self::ExternalTool { .. } => ErrorKind::ExternalToolError,
            Self::Resolution(_) => ErrorKind::ResolutionError,
            Self::MissingDependency(_) => ErrorKind::MissingDependency,
        }
    }
}

impl From<base64::DecodeError> for OpError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for OpError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Decode(format!("decoded bytes are not valid UTF-8 ({err})"))
    }
}

impl From<serde_json::Error> for OpError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            format: "JSON",
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for OpError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse {
            format: "YAML",
            message: err.to_string(),
        }
    }
}

impl From<hickory_resolver::error::ResolveError> for OpError {
    fn from(err: hickory_resolver::error::ResolveError) -> Self {
        Self::Resolution(err.to_string())
    }
}
