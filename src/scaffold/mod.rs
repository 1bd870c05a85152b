//! React project scaffolding
//!
//! Public interface for the single, flavor-parameterized workflow. The
//! implementation lives in `internal/`; this file only wires the pieces
//! a caller can swap (process runner, confirmation, toolchain).
//!
//! # Example
//!
//! ```no_run
//! use kiln::flavor::Flavor;
//! use kiln::process::{SystemRunner, Toolchain};
//! use kiln::prompt::AssumeYes;
//! use kiln::scaffold::{Outcome, Scaffolder};
//!
//! let mut confirm = AssumeYes;
//! let mut scaffolder = Scaffolder::new(".", Toolchain::default(), &SystemRunner, &mut confirm);
//! match scaffolder.run(Some("my-app"), Flavor::Vite)? {
//!     Outcome::Created { root } => println!("created {}", root.display()),
//!     Outcome::Cancelled => {}
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::flavor::{Flavor, FlavorProfile};
use crate::process::{CommandRunner, Toolchain};
use crate::prompt::Confirm;

pub use internal::manifest::{merge_scripts, merge_scripts_into};
pub use internal::validation::{is_valid_name, validate, ScaffoldRequest};

/// How a run that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Project generated at `root`
    Created { root: PathBuf },
    /// Operator declined to reuse an existing directory; nothing was changed
    Cancelled,
}

/// Runs the scaffolding workflow against a base directory
pub struct Scaffolder<'a> {
    base_dir: PathBuf,
    tools: Toolchain,
    runner: &'a dyn CommandRunner,
    confirm: &'a mut dyn Confirm,
}

impl<'a> Scaffolder<'a> {
    /// `base_dir` is where the project directory gets created
    pub fn new(
        base_dir: impl AsRef<Path>,
        tools: Toolchain,
        runner: &'a dyn CommandRunner,
        confirm: &'a mut dyn Confirm,
    ) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            tools,
            runner,
            confirm,
        }
    }

    /// Run every step for `raw_name`.
    ///
    /// # Errors
    ///
    /// Fails with a [`crate::error::ScaffoldError`] when the name is missing
    /// or invalid (before any filesystem change), when the generator or
    /// package manager exits non-zero, or when package.json cannot be read
    /// at patch time. Partial output from a failed run stays on disk.
    pub fn run(&mut self, raw_name: Option<&str>, flavor: Flavor) -> Result<Outcome> {
        internal::run(self, raw_name, flavor)
    }
}

/// Create the folder plan and write the flavor's example files under `root`
///
/// Safe to re-run: directories are reused and files rewritten identically.
pub fn materialize(root: &Path, profile: &FlavorProfile, project_name: &str) -> Result<()> {
    internal::materialize::create_folders(root)?;
    internal::materialize::write_files(root, &profile.files, project_name)
}

/// Apply the flavor's config overwrites and package.json script merge
pub fn apply_patches(root: &Path, profile: &FlavorProfile, project_name: &str) -> Result<()> {
    internal::patch::apply_patches(root, &profile.patches, project_name)
}
