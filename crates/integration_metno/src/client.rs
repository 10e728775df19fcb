//! MET Norway locationforecast client
//!
//! HTTP client for the locationforecast 2.0 compact endpoint
//! (<https://api.met.no/weatherapi/locationforecast/2.0/#!/data/get_compact>).

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::MetNoConfig;
use crate::error::WeatherError;
use crate::icons;
use crate::models::{
    PrecipitationPoint, RawEntryData, RawPeriod, RawResponse, TemperaturePoint, WeatherForecast,
};

/// Length of the forecast window kept from the response, anchored at the
/// first timestep
const FORECAST_WINDOW_DAYS: i64 = 2;

/// Icons are only shown at this granularity to avoid visual noise
const ICON_STRIDE: usize = 6;

/// Trait for weather forecast clients
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the two-day forecast for a location
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherForecast, WeatherError>;
}

/// MET Norway HTTP client implementation
#[derive(Debug)]
pub struct MetNoClient {
    client: Client,
    config: MetNoConfig,
}

impl MetNoClient {
    /// Create a new MET Norway client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &MetNoConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Build the compact endpoint URL for a location
    fn build_compact_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/compact?lat={latitude}&lon={longitude}",
            self.config.base_url
        )
    }

    /// Parse a timestep string to `DateTime<Utc>`
    fn parse_datetime(s: &str) -> Result<DateTime<Utc>, WeatherError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Utc.from_utc_datetime(&dt));
        }

        Err(WeatherError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }

    /// The symbol code of a forecast block, with empty strings treated as
    /// absent
    fn symbol_code(period: Option<&RawPeriod>) -> Option<&str> {
        period
            .and_then(|p| p.summary.as_ref())
            .map(|s| s.symbol_code.as_str())
            .filter(|code| !code.is_empty())
    }

    /// Pick the icon reference for the timestep at `index`
    ///
    /// Only every sixth timestep carries an icon. The 6-hour summary is
    /// preferred over the 12-hour one; unknown codes resolve to the
    /// fallback icon.
    fn pick_symbol(data: &RawEntryData, index: usize) -> Option<String> {
        if index % ICON_STRIDE != 1 {
            return None;
        }

        let code = Self::symbol_code(data.next_6_hours.as_ref())
            .or_else(|| Self::symbol_code(data.next_12_hours.as_ref()))
            .unwrap_or("undefined");

        Some(icons::icon_reference(icons::resolve_icon(code)))
    }

    /// A block's precipitation as an hourly rate, with zero treated as
    /// absent so that selection falls through to the next block
    fn hourly_rate(period: Option<&RawPeriod>, hours: f64) -> Option<f64> {
        period
            .and_then(|p| p.details.as_ref())
            .and_then(|d| d.precipitation_amount)
            .map(|amount| amount / hours)
            .filter(|rate| *rate != 0.0)
    }

    /// Derive the precipitation rate for one timestep
    ///
    /// The most precise available estimate wins: the 1-hour amount as-is,
    /// else the 6-hour amount divided by 6, else the 12-hour amount divided
    /// by 12, else zero. Sources are never combined.
    fn precipitation(data: &RawEntryData) -> f64 {
        Self::hourly_rate(data.next_1_hours.as_ref(), 1.0)
            .or_else(|| Self::hourly_rate(data.next_6_hours.as_ref(), 6.0))
            .or_else(|| Self::hourly_rate(data.next_12_hours.as_ref(), 12.0))
            .unwrap_or(0.0)
    }

    /// Shape the raw timeseries into the dashboard forecast
    ///
    /// One cutoff, two days past the first timestep, truncates both output
    /// sequences.
    fn build_forecast(raw: RawResponse) -> Result<WeatherForecast, WeatherError> {
        let timeseries = raw.properties.timeseries;

        let Some(first) = timeseries.first() else {
            return Ok(WeatherForecast {
                temperature: Vec::new(),
                precipitation: Vec::new(),
            });
        };

        let cutoff =
            Self::parse_datetime(&first.time)? + chrono::Duration::days(FORECAST_WINDOW_DAYS);

        let mut temperature = Vec::with_capacity(timeseries.len());
        let mut precipitation = Vec::with_capacity(timeseries.len());

        for (index, entry) in timeseries.iter().enumerate() {
            let time = Self::parse_datetime(&entry.time)?;
            if time >= cutoff {
                continue;
            }

            temperature.push(TemperaturePoint {
                time,
                temperature: entry.data.instant.details.air_temperature,
                symbol: Self::pick_symbol(&entry.data, index),
            });

            precipitation.push(PrecipitationPoint {
                time,
                precipitation: Self::precipitation(&entry.data),
            });
        }

        Ok(WeatherForecast {
            temperature,
            precipitation,
        })
    }
}

#[async_trait]
impl WeatherClient for MetNoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherForecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.build_compact_url(latitude, longitude);
        debug!(%url, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    WeatherError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let raw: RawResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let forecast = Self::build_forecast(raw)?;

        debug!(
            temperature = forecast.temperature.len(),
            precipitation = forecast.precipitation.len(),
            "Weather forecast fetched"
        );

        Ok(forecast)
    }
}
