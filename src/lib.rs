pub mod commands;
pub mod config;
pub mod error;
pub mod flavor;
pub mod log;
pub mod paths;
pub mod process;
pub mod prompt;
pub mod scaffold;

// Re-export commonly used types
pub use config::Config;
pub use error::ScaffoldError;
pub use flavor::Flavor;
pub use scaffold::{Outcome, Scaffolder};
