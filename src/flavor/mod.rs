//! Project flavors
//!
//! A flavor decides which generator builds the base project and which
//! packages, example files, and config overrides go on top of it. The
//! workflow itself is flavor-agnostic: it asks [`profile`] for a
//! [`FlavorProfile`] and executes it.

pub mod classic;
pub mod vite;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::process::{Invocation, Tool, Toolchain};

/// Which base template the project is generated from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// create-react-app with the TypeScript template
    #[default]
    Classic,
    /// Vite with the React template
    Vite,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::Classic => write!(f, "classic"),
            Flavor::Vite => write!(f, "vite"),
        }
    }
}

/// Get the profile for a flavor
pub fn profile(flavor: Flavor) -> FlavorProfile {
    match flavor {
        Flavor::Classic => classic::profile(),
        Flavor::Vite => vite::profile(),
    }
}

/// One external command the workflow runs, before tool resolution
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Progress line printed before the command starts
    pub label: &'static str,
    pub tool: Tool,
    pub args: &'static [&'static str],
    pub envs: &'static [(&'static str, &'static str)],
}

impl Step {
    pub fn invocation(&self, tools: &Toolchain, cwd: &Path) -> Invocation {
        self.envs.iter().fold(
            Invocation::new(tools.program(self.tool), cwd).args(self.args.iter().copied()),
            |inv, (key, value)| inv.env(*key, *value),
        )
    }
}

/// Dependency category packages are installed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMode {
    Runtime,
    Dev,
}

/// Packages installed in a single package-manager call
#[derive(Debug, Clone, Copy)]
pub struct PackageSet {
    pub mode: InstallMode,
    pub packages: &'static [&'static str],
}

impl PackageSet {
    /// `npm install [-D] <all packages>`
    pub fn invocation(&self, tools: &Toolchain, cwd: &Path) -> Invocation {
        let mut args = vec!["install"];
        if self.mode == InstallMode::Dev {
            args.push("-D");
        }
        args.extend(self.packages.iter().copied());
        Invocation::new(tools.program(Tool::Npm), cwd).args(args)
    }
}

/// A file written verbatim (after `{{.name}}` substitution)
#[derive(Debug, Clone, Copy)]
pub struct StaticFile {
    /// Path relative to the project root
    pub path: &'static str,
    pub template: &'static str,
}

impl StaticFile {
    pub fn render(&self, project_name: &str) -> String {
        self.template.replace("{{.name}}", project_name)
    }
}

/// A change applied to a generated config file
#[derive(Debug, Clone)]
pub enum ConfigPatch {
    /// Replace the file wholesale
    Overwrite(StaticFile),
    /// Insert or replace named entries under `scripts` in package.json
    MergeScripts(&'static [(&'static str, &'static str)]),
}

/// Everything flavor-specific about a run
#[derive(Debug, Clone)]
pub struct FlavorProfile {
    pub flavor: Flavor,
    /// Human name used in progress messages ("React", "Vite + React")
    pub title: &'static str,
    /// Commands that produce the base project
    pub generate: Vec<Step>,
    pub packages: PackageSet,
    /// Commands run after the package install (tool initialization)
    pub post_install: Vec<Step>,
    /// Example sources, overwritten unconditionally
    pub files: Vec<StaticFile>,
    pub patches: Vec<ConfigPatch>,
    /// Command that starts the dev server, shown in the summary
    pub start_command: &'static str,
    /// Installed capabilities, shown in the summary
    pub highlights: &'static [&'static str],
    pub farewell: &'static str,
}

impl FlavorProfile {
    /// Script entries merged into package.json, if any
    pub fn scripts(&self) -> &'static [(&'static str, &'static str)] {
        self.patches
            .iter()
            .find_map(|patch| match patch {
                ConfigPatch::MergeScripts(entries) => Some(*entries),
                ConfigPatch::Overwrite(_) => None,
            })
            .unwrap_or(&[])
    }
}

/// Index stylesheet with the Tailwind layers, identical for every flavor
pub(crate) const INDEX_CSS: StaticFile = StaticFile {
    path: "src/index.css",
    template: include_str!("../../resources/templates/react/shared/index.css.tmpl"),
};

/// `npx tailwindcss init -p`, shared by every flavor
pub(crate) const TAILWIND_INIT: Step = Step {
    label: "⚙️  Initializing Tailwind CSS...",
    tool: Tool::Npx,
    args: &["tailwindcss", "init", "-p"],
    envs: &[],
};
