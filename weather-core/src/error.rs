//! Error taxonomy exposed to gateway callers.

use reqwest::StatusCode;
use thiserror::Error;

pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found or API error";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Weather service unavailable";

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The upstream call completed with a non-success status.
    #[error("Upstream rejected the request with status {status}")]
    UpstreamRejected { status: StatusCode },

    /// Transport failure, timeout, malformed body or missing fields.
    #[error("Weather service unavailable: {0:#}")]
    Unavailable(#[from] anyhow::Error),
}

impl GatewayError {
    /// HTTP status reported to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UpstreamRejected { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed message safe to hand to clients; internal detail stays in logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::UpstreamRejected { .. } => CITY_NOT_FOUND_MESSAGE,
            Self::Unavailable(_) => SERVICE_UNAVAILABLE_MESSAGE,
        }
    }
}
