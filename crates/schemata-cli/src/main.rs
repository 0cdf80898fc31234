//! # schemata CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;
use schemata_cli::check;

/// schemata — validate untyped documents against declarative schemas.
#[derive(Parser, Debug)]
#[command(name = "schemata", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a document against a schema descriptor.
    Check(check::CheckArgs),
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            let outcome = check::run(&args);
            match outcome.as_ref().map(|result| check::render(result, args.format)) {
                Ok(Ok(text)) => println!("{text}"),
                Ok(Err(e)) => {
                    eprintln!("error: {e:#}");
                    return ExitCode::from(check::EXIT_ERROR);
                }
                Err(e) => eprintln!("error: {e:#}"),
            }
            ExitCode::from(check::exit_code(&outcome))
        }
    }
}
