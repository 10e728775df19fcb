//! Weather data models
//!
//! Output types for the dashboard forecast and raw response types for the
//! locationforecast compact format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One temperature observation with an optional icon reference
///
/// `symbol` is `None` for timesteps where no icon is shown; icons are only
/// emitted at 6-hour granularity to avoid visual noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePoint {
    /// Forecast timestep
    pub time: DateTime<Utc>,
    /// Instantaneous air temperature in °C
    pub temperature: f64,
    /// Icon reference for the presentation layer, if one is shown
    pub symbol: Option<String>,
}

/// One precipitation observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationPoint {
    /// Forecast timestep
    pub time: DateTime<Utc>,
    /// Precipitation in mm per hour
    pub precipitation: f64,
}

/// Two-day dashboard forecast
///
/// Both sequences are truncated by the same cutoff: two days past the first
/// timestep of the upstream response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    /// Temperature per timestep, with the sparsified icon signal
    pub temperature: Vec<TemperaturePoint>,
    /// Precipitation per timestep
    pub precipitation: Vec<PrecipitationPoint>,
}

/// Raw locationforecast compact response
#[derive(Debug, Clone, Deserialize)]
pub struct RawResponse {
    pub properties: RawProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProperties {
    pub timeseries: Vec<RawEntry>,
}

/// One raw timestep entry
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    pub time: String,
    pub data: RawEntryData,
}

/// Detail blocks of one timestep
///
/// The instant block is required; a response without it is a shape mismatch
/// and fails deserialization. Only the `next_*_hours` blocks are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntryData {
    pub instant: RawInstant,
    #[serde(default)]
    pub next_1_hours: Option<RawPeriod>,
    #[serde(default)]
    pub next_6_hours: Option<RawPeriod>,
    #[serde(default)]
    pub next_12_hours: Option<RawPeriod>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInstant {
    pub details: RawInstantDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInstantDetails {
    pub air_temperature: f64,
}

/// Forecast block covering the next 1, 6 or 12 hours
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPeriod {
    #[serde(default)]
    pub summary: Option<RawSummary>,
    #[serde(default)]
    pub details: Option<RawPeriodDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSummary {
    #[serde(default)]
    pub symbol_code: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPeriodDetails {
    #[serde(default)]
    pub precipitation_amount: Option<f64>,
}
