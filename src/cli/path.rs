//! Path command: parse one path data string.

use clap::Args;

use crate::error::Result;
use crate::parser::parse_path_data;
use crate::render::{trace_commands, PathDataWriter};

/// Parse a single path data string
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Path data, e.g. "M0,0 l10-10 z"
    #[arg(allow_hyphen_values = true)]
    pub data: String,

    /// Print absolute path data instead of one command per line
    #[arg(long)]
    pub absolute: bool,
}

pub fn run(args: PathArgs) -> Result<()> {
    let commands = parse_path_data(&args.data)?;

    if args.absolute {
        let mut writer = PathDataWriter::new();
        trace_commands(&mut writer, &commands);
        println!("{}", writer.to_path_data());
    } else {
        for command in &commands {
            println!("{command}");
        }
    }

    Ok(())
}
