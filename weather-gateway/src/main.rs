//! Binary crate for the `weather-gateway` HTTP server.
//!
//! This crate focuses on:
//! - Parsing process flags and environment
//! - Logging setup
//! - Serving the gateway routes

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
