//! Claim Cipher CLI - Turn insurance estimates into filled claim forms.

use claimcipher_cli::commands;
use claimcipher_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr when `--verbose` is passed or `RUST_LOG` is set.
fn init_logging(verbose: bool) {
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !verbose && !has_rust_log {
        return;
    }

    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> claimcipher_cli::Result<()> {
    // Load config from --config, else ~/.claimcipher/config.toml
    let config = match &cli.config {
        Some(path) => Config::load_explicit(path)?,
        None => Config::load()?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Process(args) => commands::execute_process(args, &config, &formatter),
        Command::Parse(args) => commands::execute_parse(args, &config, &formatter),
        Command::Decode(args) => commands::execute_decode(args, &config, &formatter),
        Command::Fields(args) => commands::execute_fields(args, &config, &formatter),
    }
}
