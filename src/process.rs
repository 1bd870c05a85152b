//! External process invocation
//!
//! The scaffolder never parses what the generator or package manager prints.
//! It only needs "did it exit 0?", so everything goes through the narrow
//! [`CommandRunner`] seam. [`SystemRunner`] spawns real processes with the
//! operator's terminal inherited; tests plug in a recorder instead.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::log;

/// External tools the scaffolder delegates to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Package manager (`npm install`, `npm create`)
    Npm,
    /// Package runner (`npx create-react-app`, `npx tailwindcss`)
    Npx,
}

/// Resolved program names for each [`Tool`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub npm: String,
    pub npx: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            npm: "npm".to_string(),
            npx: "npx".to_string(),
        }
    }
}

impl Toolchain {
    pub fn program(&self, tool: Tool) -> &str {
        match tool {
            Tool::Npm => &self.npm,
            Tool::Npx => &self.npx,
        }
    }
}

/// One external command: program, arguments, working directory, extra env
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub envs: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            envs: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How an external command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs external commands to completion
///
/// Implementations must block until the command exits. An `Err` means the
/// command could not be started at all.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus>;
}

/// Spawns real processes with stdin/stdout/stderr inherited from the terminal
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ExitStatus> {
        log::debug(
            "process",
            format_args!("running `{}` in {}", invocation, invocation.cwd.display()),
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .envs(invocation.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to start `{}`", invocation.program))?;

        log::debug("process", format_args!("`{}` finished: {:?}", invocation, status));
        Ok(status.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_invocation_display_joins_args() {
        let inv = Invocation::new("npx", Path::new("/tmp/app"))
            .args(["create-react-app", ".", "--template", "typescript"])
            .env("ADBLOCK", "1");
        assert_eq!(inv.to_string(), "npx create-react-app . --template typescript");
        assert_eq!(inv.envs, vec![("ADBLOCK".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_toolchain_resolves_programs() {
        let tools = Toolchain {
            npm: "pnpm".to_string(),
            npx: "pnpx".to_string(),
        };
        assert_eq!(tools.program(Tool::Npm), "pnpm");
        assert_eq!(tools.program(Tool::Npx), "pnpx");
    }

    #[test]
    fn test_exit_status_success_only_on_zero() {
        assert!(ExitStatus::from_code(0).success());
        assert!(!ExitStatus::from_code(1).success());
        assert_eq!(ExitStatus::from_code(127).to_string(), "exit code 127");
    }

    #[test]
    fn test_system_runner_reports_spawn_failure() -> Result<()> {
        let temp = TempDir::new()?;
        let inv = Invocation::new("kiln-definitely-not-a-real-binary", temp.path());
        assert!(SystemRunner.run(&inv).is_err());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_uses_working_directory() -> Result<()> {
        let temp = TempDir::new()?;
        let inv = Invocation::new("sh", temp.path()).args(["-c", "touch marker && exit 3"]);
        let status = SystemRunner.run(&inv)?;
        assert_eq!(status.code(), Some(3));
        assert!(temp.path().join("marker").exists());
        Ok(())
    }
}
