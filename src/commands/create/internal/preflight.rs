//! Toolchain preflight

use colored::*;

use crate::log;
use crate::process::Toolchain;

/// Programs from the toolchain that do not resolve on PATH
pub fn missing_tools(tools: &Toolchain) -> Vec<&str> {
    [tools.npm.as_str(), tools.npx.as_str()]
        .into_iter()
        .filter(|program| match which::which(program) {
            Ok(path) => {
                log::debug("preflight", format_args!("{} -> {}", program, path.display()));
                false
            }
            Err(_) => true,
        })
        .collect()
}

/// Warn (without failing) about missing tools; the spawn will fail loudly later
pub fn warn_missing_tools(tools: &Toolchain) {
    for program in missing_tools(tools) {
        println!(
            "{}",
            format!("⚠️  '{program}' not found on PATH - install Node.js or set KILN_NPM/KILN_NPX")
                .yellow()
        );
    }
}
