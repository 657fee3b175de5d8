//! Command-line flags. These override every other configuration source.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// contacts - CRUD service for contacts in JSON, XML, CSV and text
#[derive(Parser, Debug, Default)]
#[command(name = "contacts")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML configuration file (default: ./contacts.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// SQLite connection URL
    #[arg(long)]
    pub database_url: Option<String>,

    /// Insert three sample contacts when the store is empty.
    ///
    /// Off by default: a fresh store starts empty unless this flag, `seed = true`
    /// or `CONTACTS_SEED=true` asks for the samples.
    #[arg(long)]
    pub seed: bool,

    /// Default log level (RUST_LOG directives still apply)
    #[arg(long)]
    pub log_level: Option<String>,
}
