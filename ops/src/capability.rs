//! Optional capabilities, resolved once per process.

use std::sync::OnceLock;

/// Which optional handlers this build can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// JWT decoding (cargo feature `jwt`).
    pub jwt: bool,
}

impl Capabilities {
    /// Reads the capabilities compiled into this build.
    pub fn detect() -> Self {
        Self {
            jwt: cfg!(feature = "jwt"),
        }
    }
}

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

/// Process-wide capabilities, detected on first use.
pub fn capabilities() -> &'static Capabilities {
    CAPABILITIES.get_or_init(Capabilities::detect)
}
