//! Diagnostic logging for netopsctl
//!
//! stdout carries the generated text so it can be piped or pasted as-is;
//! tracing output always goes to stderr.
//!
//! Filter priority:
//! 1. $NETOPS_LOG (EnvFilter syntax)
//! 2. -v (debug) / -vv (trace)
//! 3. `[log] level` from config (default "warn")

use tracing_subscriber::EnvFilter;

/// Environment variable holding an EnvFilter directive
pub const LOG_ENV: &str = "NETOPS_LOG";

/// Directive used when NETOPS_LOG is unset
pub fn filter_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.trim().to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(verbose: u8, configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    EnvFilter::try_new(filter_directive(verbose, configured))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, configured: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
