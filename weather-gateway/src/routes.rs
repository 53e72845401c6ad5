//! HTTP layer powered by Axum.
//!
//! Handlers only translate query strings into gateway calls and gateway
//! results into responses.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;
use weather_core::{ErrorBody, Gateway, GatewayError, WeatherQuery};

/// Builds the API router around a shared gateway.
pub fn router(gateway: Gateway) -> Router {
    Router::new()
        .route("/weather", get(weather))
        .route("/forecast", get(forecast))
        .route("/health", get(health))
        .with_state(gateway)
}

// Raw pairs rather than a typed query, so a repeated `city` cannot be rejected.
type RawQuery = Query<Vec<(String, String)>>;

async fn weather(
    State(gateway): State<Gateway>,
    Query(pairs): RawQuery,
) -> Result<Json<Value>, ApiError> {
    let query = WeatherQuery::from_pairs(pairs);
    let body = gateway.current_weather(query.city.as_deref()).await?;
    Ok(Json(body))
}

async fn forecast(
    State(gateway): State<Gateway>,
    Query(pairs): RawQuery,
) -> Result<Response, ApiError> {
    let query = WeatherQuery::from_pairs(pairs);
    let raw = gateway.forecast(query.city.as_deref()).await?;
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        raw.get().to_owned(),
    )
        .into_response())
}

async fn health() -> &'static str {
    "ok"
}

/// Gateway failure rendered as `{ "error": ... }` with the mapped status.
#[derive(Debug)]
pub struct ApiError(GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0.status_code(), Json(ErrorBody::from(&self.0))).into_response()
    }
}
