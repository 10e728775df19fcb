//! Fingrid open-data integration
//!
//! Client for the Fingrid open-data API (<https://data.fingrid.fi>).
//! Fetches the electricity consumption, production and wind power forecasts
//! for the next 24 hours as parallel time series.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration
//! crates. [`GridClient`] defines the interface, implemented by
//! [`FingridClient`]. All three dataset requests of a single
//! [`GridClient::fetch_forecast`] call are dispatched concurrently and joined;
//! if any of them fails the whole call fails without a partial result.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_fingrid::{FingridClient, FingridConfig, GridClient};
//!
//! let config = FingridConfig::new("my-api-key");
//! let client = FingridClient::new(&config)?;
//!
//! let sets = client.fetch_forecast().await?;
//! println!("{} consumption points", sets.consumption.len());
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{FingridClient, GridClient};
pub use config::FingridConfig;
pub use error::GridError;
pub use models::{Dataset, GridDataSets, TimePoint};
