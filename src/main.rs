use clap::Parser;
use miette::Result;
use vecscene::cli::{Cli, Commands};
use vecscene::logging::init_logging;
use vecscene::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Inspect(args) => vecscene::cli::inspect::run(args, &printer)?,
        Commands::Validate(args) => vecscene::cli::validate::run(args, &printer)?,
        Commands::Path(args) => vecscene::cli::path::run(args)?,
        Commands::Completions(args) => vecscene::cli::completions::run(args)?,
    }

    Ok(())
}
