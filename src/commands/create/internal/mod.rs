//! Internal implementation for the create command

pub mod preflight;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::flavor::Flavor;
use crate::process::SystemRunner;
use crate::prompt::{AssumeYes, Confirm, PromptConfirm};
use crate::scaffold::{validate, Outcome, Scaffolder};

pub fn execute_create(name: Option<String>, flavor: Option<Flavor>, yes: bool) -> Result<Outcome> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    // Bad input fails before config or PATH are even looked at
    validate(name.as_deref(), flavor.unwrap_or_default(), &cwd)?;

    let config = Config::load()?;
    let flavor = flavor.unwrap_or(config.default_flavor);
    let tools = config.toolchain();
    preflight::warn_missing_tools(&tools);

    let mut stdin_prompt;
    let mut assume_yes = AssumeYes;
    let confirm: &mut dyn Confirm = if yes {
        &mut assume_yes
    } else {
        stdin_prompt = PromptConfirm::stdio();
        &mut stdin_prompt
    };

    Scaffolder::new(&cwd, tools, &SystemRunner, confirm).run(name.as_deref(), flavor)
}
