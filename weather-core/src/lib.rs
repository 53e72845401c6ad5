//! Core library for the weather gateway.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the upstream weather provider
//! - The gateway operations and their error taxonomy
//! - The locally derived `pop` estimate
//!
//! It is used by `weather-gateway`, but has no dependency on any web framework.

pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod pop;
pub mod provider;

pub use config::Config;
pub use error::GatewayError;
pub use gateway::Gateway;
pub use model::{ErrorBody, WeatherQuery};
pub use provider::{Endpoint, ProviderReply, WeatherProvider};
