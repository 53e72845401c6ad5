use anyhow::{Context, Result};
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};
use tokio::net::TcpListener;
use tracing::{info, warn};
use weather_core::{Config, Gateway, provider::provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-gateway", version, about = "Weather gateway HTTP server")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, env = "GATEWAY_LISTEN", default_value = "127.0.0.1:8000")]
    pub listen: SocketAddr,

    /// TOML config file; defaults to the platform config directory.
    #[arg(long, env = "GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        init_tracing();

        let config = self.load_config()?;
        if config.api_key.is_empty() {
            warn!("WEATHER_API_KEY is not set; upstream calls will be rejected");
        }

        let provider = provider_from_config(&config)?;
        let gateway = Gateway::new(provider, config.default_city.clone());

        let listener = TcpListener::bind(self.listen)
            .await
            .with_context(|| format!("Failed to bind {}", self.listen))?;

        info!(
            addr = %listener.local_addr()?,
            upstream = %config.base_url,
            default_city = gateway.default_city(),
            timeout_secs = config.timeout_secs,
            "weather gateway listening"
        );

        weather_gateway::serve(listener, gateway).await
    }

    fn load_config(&self) -> Result<Config> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => Config::config_file_path()?,
        };
        info!(path = %path.display(), "loading configuration");

        Ok(Config::load_from(&path)?.with_env(|key| std::env::var(key).ok()))
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
