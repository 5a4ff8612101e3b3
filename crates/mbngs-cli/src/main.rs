//! CLI entry point - the composition root.
//!
//! Builds the client from the global options, then dispatches to the
//! handler for the chosen command. Results go to stdout, errors to stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mbngs_cli::{Cli, CliError, ClientSettings, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let client = bootstrap(&ClientSettings::from_cli(&cli))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Lookup(args) => handlers::lookup::execute(&client, args, &mut out).await?,
        Commands::Search(args) => handlers::search::execute(&client, args, &mut out).await?,
        Commands::Browse(args) => handlers::browse::execute(&client, args, &mut out).await?,
        Commands::Discid(args) => handlers::discid::execute(&client, args, &mut out).await?,
        Commands::Isrc(args) => handlers::identifiers::isrc(&client, args, &mut out).await?,
        Commands::Iswc(args) => handlers::identifiers::iswc(&client, args, &mut out).await?,
        Commands::Collections(args) => {
            handlers::collections::execute(&client, args, &mut out).await?;
        }
        Commands::CoverArt(args) => handlers::cover_art::execute(&client, args, &mut out).await?,
    }

    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
