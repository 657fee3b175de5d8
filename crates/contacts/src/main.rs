//! Contacts service binary
//!
//! Binary name: `contacts`

use clap::Parser;
use contacts::{cli::Args, load_config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args).await?;
    logging::init_tracing(config.level())?;

    server::run(config).await
}
