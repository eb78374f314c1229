//! Inspect command: dump parsed scene trees as JSON.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::discovery::{discover_paths, load_document};
use crate::error::{Result, SceneError};
use crate::output::{display_path, Printer};
use crate::types::SceneDocument;

/// Parse documents and print their scene trees as JSON
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Files or directories to inspect
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Serialize)]
struct Inspected<'a> {
    file: String,
    document: &'a SceneDocument,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let discovery = discover_paths(&args.files)?;

    for file in &discovery.files {
        let document = load_document(file)?;
        printer.status("Parsed", &display_path(file));

        let entry = Inspected {
            file: display_path(file),
            document: &document,
        };
        println!("{}", to_json(&entry, args.pretty)?);
    }

    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    json.map_err(|e| SceneError::Parse {
        message: format!("Failed to serialize scene: {}", e),
        help: None,
    })
}
