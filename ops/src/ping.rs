//! Ping through the system `ping` program.

use std::io::ErrorKind;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Duration;

use tracing::{debug, info};
use wait_timeout::ChildExt;

use crate::OpError;

/// Number of echo requests sent per invocation.
pub const DEFAULT_PING_COUNT: u32 = 4;
/// Upper bound on how long the `ping` process may run.
pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_secs(30);

const PING_PROGRAM: &str = "ping";

#[derive(Debug, Clone)]
pub struct PingOptions {
    pub count: u32,
    pub timeout: Duration,
}

impl Default for PingOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_PING_COUNT,
            timeout: DEFAULT_PING_TIMEOUT,
        }
    }
}

/// Pings `host`, streaming the program's output straight to the terminal.
///
/// # Errors
///
/// [`OpError::ExternalTool`] if the host is malformed, `ping` is not
/// installed, exits unsuccessfully (e.g. the host is unreachable), or runs
/// past `options.timeout`.
pub fn ping(host: &str, options: &PingOptions) -> Result<(), OpError> {
    let host = host.trim();
    if host.is_empty() || host.starts_with('-') || host.chars().any(char::is_whitespace) {
        return Err(ping_error(format!("invalid host '{host}'")));
    }

    info!(host, count = options.count, "Pinging host");
    let mut command = Command::new(PING_PROGRAM);
    command.args(ping_args(host, options.count));
    match options.run(&mut command)? {
        Some(status) if status.success() => Ok(()),
        Some(status) => Err(ping_error(format!("host '{host}' unreachable ({status})"))),
        None => Err(ping_error(format!(
            "timed out after {}s",
            options.timeout.as_secs_f32()
        ))),
    }
}

impl PingOptions {
    /// Spawns `command` with inherited output and waits up to `self.timeout`.
    ///
    /// Returns `None` when the child was killed for running too long.
    fn run(&self, command: &mut Command) -> Result<Option<ExitStatus>, OpError> {
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    ping_error("the `ping` program is not available on this system".to_string())
                }
                _ => ping_error(format!("failed to start ping: {e}")),
            })?;

        match child.wait_timeout(self.timeout) {
            Ok(Some(status)) => Ok(Some(status)),
            Ok(None) => {
                debug!(timeout_ms = self.timeout.as_millis() as u64, "Ping timed out, killing process");
                reap(&mut child);
                Ok(None)
            }
            Err(e) => {
                reap(&mut child);
                Err(ping_error(format!("wait failed: {e}")))
            }
        }
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn ping_error(message: String) -> OpError {
    OpError::ExternalTool {
        tool: "ping",
        message,
    }
}

/// Builds the platform-specific argument list.
fn ping_args(host: &str, count: u32) -> Vec<String> {
    let count_flag = if cfg!(windows) { "-n" } else { "-c" };
    vec![count_flag.to_string(), count.to_string(), host.to_string()]
}
