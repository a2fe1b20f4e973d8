//! DNS lookups through the system resolver configuration.

use std::str::FromStr;

use hickory_resolver::Resolver;
use hickory_resolver::proto::rr::RecordType;
use tracing::debug;

use crate::OpError;

/// Resolves `record` records for `host`, one rendered record per entry, in
/// the order the resolver returned them.
///
/// # Errors
///
/// [`OpError::Resolution`] for an empty host, an unsupported record type,
/// NXDOMAIN, an empty answer, or a resolver timeout.
pub fn dns_lookup(host: &str, record: &str) -> Result<Vec<String>, OpError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(OpError::Resolution("host cannot be empty".to_string()));
    }
    let record_type = parse_record_type(record)?;

    let resolver = Resolver::from_system_conf()
        .map_err(|e| OpError::Resolution(format!("cannot load resolver configuration: {e}")))?;
    debug!(host, record = %record_type, "Resolving");

    let lookup = resolver.lookup(host, record_type)?;
    let records: Vec<String> = lookup.iter().map(|rdata| rdata.to_string()).collect();
    if records.is_empty() {
        return Err(OpError::Resolution(format!(
            "no {record_type} records found for {host}"
        )));
    }
    debug!(host, count = records.len(), "Resolved");
    Ok(records)
}

/// Parses a record type name case-insensitively (`a`, `MX`, `txt`, ...).
pub fn parse_record_type(record: &str) -> Result<RecordType, OpError> {
    let name = record.trim().to_ascii_uppercase();
    RecordType::from_str(&name).map_err(|_| {
        OpError::Resolution(format!("unsupported record type '{}'", record.trim()))
    })
}
