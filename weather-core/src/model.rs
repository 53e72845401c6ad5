use serde::Serialize;

use crate::error::GatewayError;

/// Query accepted by both gateway endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

impl WeatherQuery {
    /// Build from raw query pairs. A repeated `city` keeps the last value;
    /// unknown parameters are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let city = pairs
            .into_iter()
            .filter(|(key, _)| key == "city")
            .map(|(_, value)| value)
            .last();

        Self { city }
    }
}

/// Body returned to callers on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&GatewayError> for ErrorBody {
    fn from(err: &GatewayError) -> Self {
        Self {
            error: err.public_message().to_string(),
        }
    }
}
