//! Operation handlers for the toolbox CLI.
//!
//! Each handler is a plain function from typed input to a result, with no
//! shared state:
//!
//! - [`generate_id`]: random UUID v4.
//! - [`hash_text`]: MD5 / SHA-1 / SHA-256 / SHA-512 hex digests.
//! - [`encode_base64`] / [`decode_base64`]: standard base64.
//! - [`decode_jwt`]: header and payload of a JWT, signature not verified.
//! - [`beautify_json`] / [`beautify_yaml`]: pretty-printing.
//! - [`ping`]: runs the system `ping` program.
//! - [`dns_lookup`]: resolves records through the system resolver.
//!
//! Failures are reported as [`OpError`], which maps onto the shared
//! [`ErrorKind`](toolbox_core::ErrorKind) taxonomy.
//!
//! # Features
//!
//! - `jwt` (default): enables [`decode_jwt`]. Without it the handler
//!   reports a missing dependency; see [`Capabilities`].
//!
//! # Example
//!
//! ```
//! use toolbox_core::HashAlgorithm;
//! use toolbox_ops::{decode_base64, encode_base64, hash_text};
//!
//! assert_eq!(encode_base64("secret123"), "c2VjcmV0MTIz");
//! assert_eq!(decode_base64("c2VjcmV0MTIz").unwrap(), "secret123");
//! assert_eq!(
//!     hash_text(HashAlgorithm::Sha256, "hello"),
//!     "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
//! );
//! ```

mod beautify;
mod capability;
mod codec;
mod dns;
mod error;
mod hash;
mod id;
mod jwt;
mod ping;

pub use beautify::{beautify_json, beautify_yaml};
pub use capability::{Capabilities, capabilities};
pub use codec::{decode_base64, encode_base64};
pub use dns::{dns_lookup, parse_record_type};
pub use error::OpError;
pub use hash::hash_text;
pub use id::generate_id;
pub use jwt::{DecodedJwt, decode_jwt};
pub use ping::{DEFAULT_PING_COUNT, DEFAULT_PING_TIMEOUT, PingOptions, ping};
