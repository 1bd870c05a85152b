//! Project name validation

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::ScaffoldError;
use crate::flavor::Flavor;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("static pattern compiles"))
}

/// A validated request, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    project_name: String,
    flavor: Flavor,
    root: PathBuf,
}

impl ScaffoldRequest {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// `<base_dir>/<project_name>`
    pub fn root(&self) -> &Path {
        &self.root
    }
}

pub fn is_valid_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

/// Validate the raw name argument. Touches nothing on disk.
pub fn validate(
    raw_name: Option<&str>,
    flavor: Flavor,
    base_dir: &Path,
) -> Result<ScaffoldRequest, ScaffoldError> {
    let name = raw_name.ok_or(ScaffoldError::InvalidArgument)?;
    if !is_valid_name(name) {
        return Err(ScaffoldError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(ScaffoldRequest {
        project_name: name.to_string(),
        flavor,
        root: base_dir.join(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_digits_hyphens() {
        for name in ["my-app", "MyApp", "app2", "-", "A-1-b", "123"] {
            assert!(is_valid_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_rejects_everything_else() {
        for name in [
            "", "My App!", "my app", "a/b", "../app", "app_1", "app.js", "ñandú", "app\n",
        ] {
            assert!(!is_valid_name(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_missing_name_is_invalid_argument() {
        let err = validate(None, Flavor::Classic, Path::new(".")).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidArgument));
    }

    #[test]
    fn test_bad_name_is_invalid_name() {
        let err = validate(Some("My App!"), Flavor::Vite, Path::new(".")).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName { ref name } if name == "My App!"));
    }

    #[test]
    fn test_root_is_joined_onto_base() {
        let req = validate(Some("my-app"), Flavor::Vite, Path::new("/work")).unwrap();
        assert_eq!(req.root(), Path::new("/work/my-app"));
        assert_eq!(req.project_name(), "my-app");
        assert_eq!(req.flavor(), Flavor::Vite);
    }
}
