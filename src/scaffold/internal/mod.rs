//! Internal implementation of the scaffolding workflow

pub mod exec;
pub mod guard;
pub mod manifest;
pub mod materialize;
pub mod patch;
pub mod report;
pub mod validation;

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io;

use crate::flavor::{self, FlavorProfile};
use crate::log;
use crate::prompt::Decision;

use self::exec::run_labeled;
use self::guard::check_overwrite;
use self::materialize::{create_folders, write_files};
use self::patch::apply_patches;
use self::report::print_summary;
use self::validation::{validate, ScaffoldRequest};

use super::{Outcome, Scaffolder};

/// Validate → guard → generate → install → init → materialize → patch → report
pub fn run(
    scaffolder: &mut Scaffolder<'_>,
    raw_name: Option<&str>,
    flavor: flavor::Flavor,
) -> Result<Outcome> {
    // Nothing may touch the filesystem before this passes
    let request = validate(raw_name, flavor, &scaffolder.base_dir)?;
    let profile = flavor::profile(request.flavor());
    log::debug(
        "scaffold",
        format_args!("request {:?} with flavor {}", request.project_name(), flavor),
    );

    if check_overwrite(&request, &mut *scaffolder.confirm)? == Decision::Cancel {
        println!("{}", "Operation cancelled.".yellow());
        return Ok(Outcome::Cancelled);
    }

    println!(
        "{}",
        format!(
            "🚀 Creating {} project '{}'...",
            profile.title,
            request.project_name()
        )
        .blue()
    );
    fs::create_dir_all(request.root())
        .with_context(|| format!("Failed to create {}", request.root().display()))?;

    generate(scaffolder, &request, &profile)?;
    install(scaffolder, &request, &profile)?;

    create_folders(request.root())?;
    write_files(request.root(), &profile.files, request.project_name())?;
    apply_patches(request.root(), &profile.patches, request.project_name())?;

    print_summary(&mut io::stdout(), &profile, request.project_name());

    Ok(Outcome::Created {
        root: request.root().to_path_buf(),
    })
}

fn generate(
    scaffolder: &Scaffolder<'_>,
    request: &ScaffoldRequest,
    profile: &FlavorProfile,
) -> Result<()> {
    for step in &profile.generate {
        let invocation = step.invocation(&scaffolder.tools, request.root());
        run_labeled(scaffolder.runner, step.label, &invocation)?;
    }
    println!(
        "{}",
        format!("✓ {} project created successfully!", profile.title).green()
    );
    Ok(())
}

fn install(
    scaffolder: &Scaffolder<'_>,
    request: &ScaffoldRequest,
    profile: &FlavorProfile,
) -> Result<()> {
    let invocation = profile
        .packages
        .invocation(&scaffolder.tools, request.root());
    run_labeled(
        scaffolder.runner,
        "🎨 Installing Tailwind CSS and UI libraries...",
        &invocation,
    )?;

    for step in &profile.post_install {
        let invocation = step.invocation(&scaffolder.tools, request.root());
        run_labeled(scaffolder.runner, step.label, &invocation)?;
    }
    Ok(())
}
