//! Validate command: parse and lint documents.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover, discover_paths, load_document};
use crate::error::{Result, SceneError};
use crate::output::{display_path, plural, Printer};
use crate::validation::{validate_document, Severity, ValidationResult};

/// Parse and lint documents
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to validate (default: project in current directory)
    pub files: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub deny_warnings: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.files.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.files)?
    };
    let deny_warnings = args.deny_warnings || discovery.manifest.deny_warnings;

    let mut failed = 0;
    let mut warnings = 0;

    for file in &discovery.files {
        let shown = display_path(file);

        let document = match load_document(file) {
            Ok(document) => document,
            Err(e) => {
                printer.error("Failed", &format!("{}: {}", shown, describe_chain(&e)));
                failed += 1;
                continue;
            }
        };

        let result = validate_document(&document);
        print_diagnostics(printer, &shown, &result);

        warnings += result.warning_count();
        if result.has_errors() || (deny_warnings && result.has_warnings()) {
            failed += 1;
        } else if result.has_warnings() {
            printer.warning("Checked", &shown);
        } else {
            printer.status("Checked", &shown);
        }
    }

    let summary = format!(
        "{}, {} failed, {}",
        plural(discovery.files.len(), "document", "documents"),
        failed,
        plural(warnings, "warning", "warnings")
    );

    if failed > 0 {
        return Err(SceneError::Parse {
            message: format!("Validation failed: {}", summary),
            help: None,
        });
    }

    printer.status("Finished", &summary);
    Ok(())
}

fn print_diagnostics(printer: &Printer, file: &str, result: &ValidationResult) {
    for d in result.iter() {
        let is_error = d.severity == Severity::Error;
        eprintln!(
            "  {}[{}] {}: {}",
            printer.severity(&d.severity.to_string(), is_error),
            d.code,
            file,
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("    {} {}", printer.dim("help:"), help);
        }
    }
}

/// Render an error with its element annotations on one line.
fn describe_chain(error: &SceneError) -> String {
    let mut parts = Vec::new();
    let mut current = error;
    while let SceneError::Element { source, .. } = current {
        parts.push(current.to_string());
        current = source;
    }
    parts.push(current.to_string());
    parts.join(": ")
}
