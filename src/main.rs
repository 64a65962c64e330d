// src/main.rs

mod commands;

use anyhow::Result;
use clap::Parser;
use pantry::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest {
            ingredients,
            catalog,
        } => commands::suggest(&ingredients, catalog),
        Commands::Show { name, catalog } => commands::show(&name, catalog),
        Commands::List { catalog } => commands::list(catalog),
        #[cfg(feature = "server")]
        Commands::Serve {
            bind,
            config,
            catalog,
        } => commands::serve(&bind, config, catalog),
        #[cfg(feature = "speech")]
        Commands::Listen {
            endpoint,
            audio,
            timeout_secs,
            catalog,
        } => commands::listen(&endpoint, audio, timeout_secs, catalog),
    }
}
