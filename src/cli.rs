// src/cli.rs

//! CLI definitions for pantry
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author = "Pantry Contributors")]
#[command(version)]
#[command(about = "Recipe lookup with ingredient matching", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest recipes sharing at least one of the given ingredients
    Suggest {
        /// Comma-separated ingredient list (e.g., "tomato, chicken, onion")
        ingredients: String,

        /// Path to a TOML catalog file (builtin catalog when omitted)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Show a recipe by exact name (case/whitespace-insensitive)
    Show {
        /// Recipe name
        name: String,

        /// Path to a TOML catalog file (builtin catalog when omitted)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// List every recipe in the catalog
    List {
        /// Path to a TOML catalog file (builtin catalog when omitted)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Start the web UI
    #[cfg(feature = "server")]
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        bind: String,

        /// Path to a TOML server config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Path to a TOML catalog file (builtin catalog when omitted)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Transcribe recorded audio and search by the recognized ingredients
    #[cfg(feature = "speech")]
    Listen {
        /// Speech-to-text endpoint URL
        #[arg(long)]
        endpoint: String,

        /// Recorded audio file to transcribe
        #[arg(long)]
        audio: PathBuf,

        /// Capture timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,

        /// Path to a TOML catalog file (builtin catalog when omitted)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}
