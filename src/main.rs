use clap::Parser;
use std::process::ExitCode;

use kiln::commands;
use kiln::Flavor;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a React project with Tailwind and a batteries-included stack", long_about = None)]
struct Cli {
    /// Project name (letters, numbers, and hyphens); pass names starting
    /// with '-' after `--`, e.g. `-- -demo`
    name: Option<String>,

    /// Base template: classic (create-react-app + TypeScript) or vite
    #[arg(short, long, value_enum)]
    flavor: Option<Flavor>,

    /// Reuse an existing directory without asking
    #[arg(short, long)]
    yes: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return commands::create::usage_error(err),
    };
    commands::create::finish(commands::create::execute(cli.name, cli.flavor, cli.yes))
}
