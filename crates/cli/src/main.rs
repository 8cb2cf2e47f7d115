use crate::{commands::Commands, error::CliError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod pipeline;

#[derive(Parser)]
#[command(
    name = "pushdown",
    version = "0.1.0",
    about = "Inspect and compile pushed-down filter strings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Parse { filter, json } => pipeline::parse_filter(&filter, json)?,
        Commands::Prune {
            filter,
            backend,
            capabilities,
            columns,
        } => pipeline::prune_filter(
            &filter,
            backend,
            capabilities.as_deref(),
            columns.as_deref(),
        )?,
        Commands::Sql {
            filter,
            columns,
            dialect,
            quote,
        } => pipeline::sql_where(&filter, &columns, dialect.into(), &quote)?,
    };

    println!("{output}");
    Ok(())
}
