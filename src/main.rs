use clap::Parser;
use tracing_subscriber::EnvFilter;

use pawns_only_chess::chess_errors::ChessErrors;
use pawns_only_chess::console::cli_args::CliArgs;
use pawns_only_chess::console::console_loop::run_stdio_session;

fn main() -> Result<(), ChessErrors> {
    // Diagnostics go to stderr; stdout carries the game protocol only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    run_stdio_session(&args.session_config())?;
    Ok(())
}
