//! Single source of truth for filesystem layout.
//!
//! No I/O here. User-level paths live under `~/.kiln/`, project-level paths
//! are relative to the generated project root.
//!
//! ```text
//! ~/.kiln/
//! └── config.toml              # Optional user config
//!
//! <project>/
//! ├── package.json             # Manifest (produced by the generator)
//! ├── .env.example
//! └── src/
//!     ├── components/{ui,forms,layout}/
//!     ├── pages/ hooks/ utils/ services/ types/ store/ contexts/ lib/
//!     └── assets/{images,styles}/
//! ```

use std::path::{Path, PathBuf};

/// User's kiln home directory: `~/.kiln/`
pub fn kiln_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kiln")
}

/// User config file: `~/.kiln/config.toml`
pub fn config_path() -> PathBuf {
    kiln_home().join("config.toml")
}

/// Paths inside a generated project
pub mod project {
    use super::*;

    /// Empty placeholder written into every planned directory
    pub const MARKER_FILE: &str = ".gitkeep";

    /// Package manifest file name
    pub const MANIFEST: &str = "package.json";

    /// Directories created under every project, regardless of flavor
    pub const FOLDER_PLAN: &[&str] = &[
        "src/components/ui",
        "src/components/forms",
        "src/components/layout",
        "src/pages",
        "src/hooks",
        "src/utils",
        "src/services",
        "src/types",
        "src/store",
        "src/contexts",
        "src/assets/images",
        "src/assets/styles",
        "src/lib",
    ];

    /// `<root>/package.json`
    pub fn manifest_path(root: &Path) -> PathBuf {
        root.join(MANIFEST)
    }

    /// `<root>/<dir>/.gitkeep`
    pub fn marker_path(root: &Path, dir: &str) -> PathBuf {
        root.join(dir).join(MARKER_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_lives_in_kiln_home() {
        assert!(config_path().starts_with(kiln_home()));
        assert!(config_path().ends_with(".kiln/config.toml"));
    }

    #[test]
    fn test_folder_plan_is_relative_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for dir in project::FOLDER_PLAN {
            assert!(Path::new(dir).is_relative());
            assert!(seen.insert(*dir), "duplicate entry {dir}");
        }
        assert_eq!(project::FOLDER_PLAN.len(), 13);
    }
}
