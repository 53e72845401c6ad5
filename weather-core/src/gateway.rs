//! Framework-independent gateway operations.
//!
//! Each operation is `(city, provider) -> Result<_, GatewayError>`; the HTTP
//! layer only translates queries in and results out.

use anyhow::Context;
use serde_json::{Value, value::RawValue};
use std::sync::Arc;
use tracing::{error, instrument, warn};

use crate::{
    error::GatewayError,
    pop::attach_pop,
    provider::{Endpoint, ProviderReply, WeatherProvider},
};

#[derive(Debug, Clone)]
pub struct Gateway {
    provider: Arc<dyn WeatherProvider>,
    default_city: String,
}

impl Gateway {
    pub fn new(provider: Arc<dyn WeatherProvider>, default_city: impl Into<String>) -> Self {
        Self {
            provider,
            default_city: default_city.into(),
        }
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// Blank or absent cities fall back to the configured default.
    pub fn resolve_city<'a>(&'a self, city: Option<&'a str>) -> &'a str {
        match city {
            Some(c) if !c.trim().is_empty() => c,
            _ => &self.default_city,
        }
    }

    /// Current weather with the derived `pop` field attached.
    #[instrument(skip_all, fields(city = %self.resolve_city(city)))]
    pub async fn current_weather(&self, city: Option<&str>) -> Result<Value, GatewayError> {
        let city = self.resolve_city(city);

        let outcome = async {
            let reply = self.fetch_successful(Endpoint::Current, city).await?;
            let mut body: Value = serde_json::from_str(reply.text()?)
                .context("Failed to parse OpenWeather current JSON")?;
            attach_pop(&mut body)?;
            Ok::<_, GatewayError>(body)
        }
        .await;

        log_failure(outcome)
    }

    /// Forecast passthrough; the upstream body is returned byte for byte.
    #[instrument(skip_all, fields(city = %self.resolve_city(city)))]
    pub async fn forecast(&self, city: Option<&str>) -> Result<Box<RawValue>, GatewayError> {
        let city = self.resolve_city(city);

        let outcome = async {
            let reply = self.fetch_successful(Endpoint::Forecast, city).await?;
            let raw: Box<RawValue> = serde_json::from_str(reply.text()?)
                .context("Failed to parse OpenWeather forecast JSON")?;
            Ok::<_, GatewayError>(raw)
        }
        .await;

        log_failure(outcome)
    }

    async fn fetch_successful(
        &self,
        endpoint: Endpoint,
        city: &str,
    ) -> Result<ProviderReply, GatewayError> {
        let reply = self.provider.fetch(endpoint, city).await?;

        if !reply.status.is_success() {
            warn!(
                %endpoint,
                status = %reply.status,
                body = %truncate_body(&String::from_utf8_lossy(&reply.body)),
                "upstream rejected request"
            );
            return Err(GatewayError::UpstreamRejected {
                status: reply.status,
            });
        }

        Ok(reply)
    }
}

fn log_failure<T>(outcome: Result<T, GatewayError>) -> Result<T, GatewayError> {
    if let Err(GatewayError::Unavailable(err)) = &outcome {
        error!(error = %format!("{err:#}"), "weather service unavailable");
    }
    outcome
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
