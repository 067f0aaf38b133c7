#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use clap::Parser;
use memdrift_agent::config::{Cli, Settings};
use memdrift_agent::serve;
use tracing::info;

fn init_tracing() {
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env());
    fmt.json().init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let settings = Settings::from_cli(Cli::parse())?;
    let bind = "0.0.0.0:23456";
    info!(bind, server = %settings.server_name, "starting agent");
    serve(settings, bind).await?;
    Ok(())
}
