use clap::Parser;
use std::process::ExitCode;

use kiln::commands::create;
use kiln::Flavor;

#[derive(Parser)]
#[command(name = "create-react")]
#[command(about = "Create a create-react-app (TypeScript) project with Tailwind and friends")]
struct Args {
    /// Project name (letters, numbers, and hyphens); pass names starting
    /// with '-' after `--`, e.g. `-- -demo`
    name: Option<String>,

    /// Reuse an existing directory without asking
    #[arg(short, long)]
    yes: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return create::usage_error(err),
    };
    create::finish(create::execute(args.name, Some(Flavor::Classic), args.yes))
}
