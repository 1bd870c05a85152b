//! Error taxonomy for a scaffolding run.
//!
//! Every variant is fatal to the run. Operator cancellation is not an error
//! and is reported through [`crate::scaffold::Outcome::Cancelled`] instead.

use std::path::PathBuf;

/// Failures that end a scaffolding run with a non-zero exit code
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// No project name was supplied
    #[error("Please provide a project name, e.g. my-app")]
    InvalidArgument,

    /// Project name contains characters outside `[A-Za-z0-9-]`
    #[error("Invalid project name '{name}'! Use only letters, numbers, and hyphens.")]
    InvalidName { name: String },

    /// Generator or package manager exited unsuccessfully (or never started)
    #[error("`{command}` failed: {status}")]
    ExternalCommandFailure { command: String, status: String },

    /// package.json is missing or is not a JSON object
    #[error("Cannot read manifest {}: {reason}", path.display())]
    ManifestReadError { path: PathBuf, reason: String },
}

impl ScaffoldError {
    /// Errors raised before anything touched the filesystem
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScaffoldError::InvalidArgument | ScaffoldError::InvalidName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(ScaffoldError::InvalidArgument.is_validation());
        assert!(ScaffoldError::InvalidName {
            name: "a b".to_string()
        }
        .is_validation());
        assert!(!ScaffoldError::ExternalCommandFailure {
            command: "npm install".to_string(),
            status: "exit code 1".to_string(),
        }
        .is_validation());
    }

    #[test]
    fn test_messages_name_the_culprit() {
        let err = ScaffoldError::InvalidName {
            name: "My App!".to_string(),
        };
        assert!(err.to_string().contains("'My App!'"));

        let err = ScaffoldError::ManifestReadError {
            path: PathBuf::from("demo/package.json"),
            reason: "not found".to_string(),
        };
        assert!(err.to_string().contains("demo/package.json"));
    }
}
