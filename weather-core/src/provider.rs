use crate::{Config, provider::openweather::OpenWeatherProvider};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Upstream endpoint a gateway operation maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Current,
    Forecast,
}

impl Endpoint {
    /// Path segment appended to the provider base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Current => "weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A completed upstream exchange, successful or not.
///
/// The body is kept as the exact bytes received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl ProviderReply {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Body as text; invalid UTF-8 is an error, never replaced.
    pub fn text(&self) -> anyhow::Result<&str> {
        std::str::from_utf8(&self.body).context("Upstream response body is not valid UTF-8")
    }
}

/// Source of raw upstream replies.
///
/// `Err` means the exchange itself failed (connect, timeout, body read);
/// any reply that arrived is `Ok`, whatever its status.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, endpoint: Endpoint, city: &str) -> anyhow::Result<ProviderReply>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    Ok(Arc::new(OpenWeatherProvider::from_config(config)?))
}
