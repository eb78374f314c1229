pub mod completions;
pub mod inspect;
pub mod path;
pub mod validate;

use clap::{Parser, Subcommand};

/// vecscene - SVG path and scene tree parser
#[derive(Parser, Debug)]
#[command(name = "vecscene")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse documents and print their scene trees as JSON
    Inspect(inspect::InspectArgs),

    /// Parse and lint documents
    Validate(validate::ValidateArgs),

    /// Parse a single path data string
    Path(path::PathArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
