//! Env-gated debug logging
//!
//! Set `KILN_LOG` to any value to see what the scaffolder is doing under the
//! hood (invocations, written files, resolved configuration). Output goes to
//! stderr so it never mixes with the generator's own output on stdout.

/// Environment variable that enables debug output
pub const LOG_ENV_VAR: &str = "KILN_LOG";

/// Whether debug logging is switched on for this process
pub fn enabled() -> bool {
    std::env::var_os(LOG_ENV_VAR).is_some()
}

/// Emit a debug line tagged with the calling module
pub fn debug(scope: &str, msg: impl std::fmt::Display) {
    if enabled() {
        eprintln!("[DEBUG kiln::{}] {}", scope, msg);
    }
}
