//! Final summary for the operator

use colored::*;
use std::io::Write;

use crate::flavor::FlavorProfile;

/// Print next steps and what was installed. Write errors are ignored.
pub fn print_summary(out: &mut dyn Write, profile: &FlavorProfile, project_name: &str) {
    let _ = write_summary(out, profile, project_name);
}

fn write_summary(
    out: &mut dyn Write,
    profile: &FlavorProfile,
    project_name: &str,
) -> std::io::Result<()> {
    writeln!(out, "{}", "✓ All packages installed successfully!".green())?;
    writeln!(out, "{}", "✓ Project setup completed!".green())?;

    writeln!(out, "\n{}", "🌈 Next steps:".magenta())?;
    writeln!(out, "{}", format!("  cd {project_name}").cyan())?;
    writeln!(out, "{}", format!("  {}", profile.start_command).cyan())?;

    let scripts: Vec<&str> = profile.scripts().iter().map(|(name, _)| *name).collect();
    if !scripts.is_empty() {
        writeln!(out, "\n{}", "🧰 Added scripts:".yellow())?;
        writeln!(out, "  {}", scripts.join(", "))?;
    }

    writeln!(out, "\n{}", "📦 Installed packages:".yellow())?;
    for item in profile.highlights {
        writeln!(out, "  • {item}")?;
    }

    writeln!(out, "\n{}", profile.farewell.green())?;
    out.flush()
}
