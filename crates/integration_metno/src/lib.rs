//! MET Norway weather integration
//!
//! Client for the MET Norway locationforecast API
//! (<https://api.met.no/weatherapi/locationforecast/2.0/documentation>).
//! Produces a two-day dashboard forecast: per-timestep temperature with a
//! sparsified weather-icon signal, and an hourly precipitation rate.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration
//! crates. [`WeatherClient`] defines the interface, implemented by
//! [`MetNoClient`]. Weather condition codes are translated to icon
//! identifiers through the fixed lookup in [`icons`]; unknown codes fall back
//! to [`icons::FALLBACK_ICON`] with a logged warning instead of failing the
//! fetch.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_metno::{MetNoClient, MetNoConfig, WeatherClient};
//!
//! let config = MetNoConfig::new("my-dashboard/1.0 contact@example.com");
//! let client = MetNoClient::new(&config)?;
//!
//! let forecast = client.fetch_forecast(60.17, 24.94).await?;
//! println!("{} temperature points", forecast.temperature.len());
//! ```

mod client;
mod config;
mod error;
pub mod icons;
mod models;

pub use client::{MetNoClient, WeatherClient};
pub use config::MetNoConfig;
pub use error::WeatherError;
pub use models::{PrecipitationPoint, TemperaturePoint, WeatherForecast};
