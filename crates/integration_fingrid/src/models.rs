//! Grid data models
//!
//! Types for representing forecast time series from the Fingrid open-data API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The forecast datasets consumed by the dashboard
///
/// Variable identifiers are documented at <https://data.fingrid.fi/en/dataset/>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Electricity consumption forecast, MW, hourly
    ConsumptionForecast,
    /// Electricity production prediction, MWh, hourly
    ProductionForecast,
    /// Wind power generation forecast, MW, hourly
    WindPowerForecast,
}

impl Dataset {
    /// The Fingrid variable id selecting this dataset
    #[must_use]
    pub const fn variable_id(self) -> u32 {
        match self {
            Self::ConsumptionForecast => 166,
            Self::ProductionForecast => 241,
            Self::WindPowerForecast => 245,
        }
    }
}

/// A single forecast observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Start of the observation period
    pub time: DateTime<Utc>,
    /// Forecast value in the dataset's unit (MW or MWh)
    pub value: f64,
}

/// The three forecast series returned by one fetch
///
/// Each series follows the upstream response order (chronological, ascending).
/// No deduplication or gap-filling is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDataSets {
    /// Electricity consumption forecast
    pub consumption: Vec<TimePoint>,
    /// Electricity production prediction
    pub production: Vec<TimePoint>,
    /// Wind power generation forecast
    pub wind: Vec<TimePoint>,
}

/// Raw event record from the API
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub start_time: String,
    pub value: f64,
}
