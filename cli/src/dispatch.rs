//! Routes a validated request to exactly one operation handler.

use toolbox_core::{EXIT_SUCCESS, ErrorKind, ParsedRequest, Request};
use toolbox_ops::{
    Capabilities, DEFAULT_PING_COUNT, OpError, PingOptions, beautify_json, beautify_yaml,
    decode_base64, decode_jwt, dns_lookup, encode_base64, generate_id, hash_text, ping,
};
use tracing::{debug, info};

/// Outcome of one invocation, consumed by the output formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    Success { message: String },
    Failure { kind: ErrorKind, message: String },
}

impl OperationResult {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success { .. } => EXIT_SUCCESS,
            Self::Failure { kind, .. } => kind.exit_code(),
        }
    }
}

/// Converts `parsed` into a typed [`Request`] and runs its handler.
///
/// Handler failures are returned as [`OperationResult::Failure`], never
/// propagated.
pub fn dispatch(parsed: &ParsedRequest, capabilities: &Capabilities) -> OperationResult {
    let request = match Request::from_parsed(parsed) {
        Ok(request) => request,
        Err(err) => {
            return OperationResult::Failure {
                kind: err.kind(),
                message: err.to_string(),
            };
        }
    };

    info!(operation = request.operation(), "Dispatching");
    match run(&request, capabilities) {
        Ok(message) => OperationResult::Success { message },
        Err(err) => {
            debug!(operation = request.operation(), kind = %err.kind(), error = %err, "Operation failed");
            OperationResult::Failure {
                kind: err.kind(),
                message: err.to_string(),
            }
        }
    }
}

fn run(request: &Request, capabilities: &Capabilities) -> Result<String, OpError> {
    match request {
        Request::GenerateId => Ok(format!("UUIDv4: {}", generate_id())),
        Request::Hash(params) => Ok(format!(
            "{} hash: {}",
            params.algorithm.as_str().to_uppercase(),
            hash_text(params.algorithm, &params.text)
        )),
        Request::EncodeBase64(params) => Ok(format!("Base64: {}", encode_base64(&params.text))),
        Request::DecodeBase64(params) => {
            decode_base64(&params.text).map(|text| format!("Decoded: {text}"))
        }
        Request::DecodeJwt(params) => {
            let decoded = decode_jwt(&params.token, capabilities)?;
            Ok(format!(
                "Header:\n{}\nPayload:\n{}",
                decoded.header_pretty(),
                decoded.payload_pretty()
            ))
        }
        Request::BeautifyJson(params) => beautify_json(&params.input),
        Request::BeautifyYaml(params) => beautify_yaml(&params.input),
        Request::Ping(params) => {
            ping(&params.host, &PingOptions::default())?;
            Ok(format!(
                "Ping {}: {DEFAULT_PING_COUNT} echo requests completed",
                params.host.trim()
            ))
        }
        Request::DnsLookup(params) => {
            dns_lookup(&params.host, &params.record).map(|records| records.join("\n"))
        }
    }
}
