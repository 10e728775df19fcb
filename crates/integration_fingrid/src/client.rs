//! Fingrid open-data client
//!
//! HTTP client for the Fingrid open-data API
//! (<https://data.fingrid.fi/en/pages/apis>). Dates in request URLs must be
//! ISO 8601 without fractional seconds.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::FingridConfig;
use crate::error::GridError;
use crate::models::{Dataset, GridDataSets, RawEvent, TimePoint};

/// Length of the forecast window requested from each dataset
const FORECAST_WINDOW_HOURS: i64 = 24;

/// Trait for grid data clients
#[async_trait]
pub trait GridClient: Send + Sync {
    /// Fetch the consumption, production and wind forecasts for the next
    /// 24 hours
    async fn fetch_forecast(&self) -> Result<GridDataSets, GridError>;
}

/// Fingrid open-data HTTP client implementation
#[derive(Debug)]
pub struct FingridClient {
    client: Client,
    config: FingridConfig,
}

impl FingridClient {
    /// Create a new Fingrid client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &FingridConfig) -> Result<Self, GridError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GridError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the events URL for one dataset
    ///
    /// The three URLs of a single fetch differ only in the variable id path
    /// segment; `start_time` and `end_time` are shared.
    fn build_events_url(&self, dataset: Dataset, start_time: &str, end_time: &str) -> String {
        format!(
            "{}/variable/{}/events/json?start_time={start_time}&end_time={end_time}",
            self.config.base_url,
            dataset.variable_id()
        )
    }

    /// Format a timestamp as ISO 8601 with whole seconds and a bare `Z`
    fn format_timestamp(time: DateTime<Utc>) -> String {
        time.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Parse an upstream `start_time` string to `DateTime<Utc>`
    fn parse_datetime(s: &str) -> Result<DateTime<Utc>, GridError> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }

        // Fingrid has historically served offsets without a colon ("+0000")
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z") {
            return Ok(dt.with_timezone(&Utc));
        }

        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(Utc.from_utc_datetime(&dt));
        }

        Err(GridError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }

    /// Convert raw event records to time points, preserving order
    fn convert_events(raw: Vec<RawEvent>) -> Result<Vec<TimePoint>, GridError> {
        raw.into_iter()
            .map(|event| {
                Ok(TimePoint {
                    time: Self::parse_datetime(&event.start_time)?,
                    value: event.value,
                })
            })
            .collect()
    }

    /// Fetch one dataset's events for the given window
    async fn fetch_series(
        &self,
        dataset: Dataset,
        start_time: &str,
        end_time: &str,
    ) -> Result<Vec<TimePoint>, GridError> {
        let url = self.build_events_url(dataset, start_time, end_time);

        debug!(?dataset, %url, "Fetching grid forecast series");

        let response = self
            .client
            .get(&url)
            .header("x-api-key", &self.config.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GridError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GridError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GridError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GridError::ParseError(e.to_string()))?;

        let raw: Vec<RawEvent> =
            serde_json::from_str(&body).map_err(|e| GridError::ParseError(e.to_string()))?;

        Self::convert_events(raw)
    }
}

#[async_trait]
impl GridClient for FingridClient {
    #[instrument(skip(self))]
    async fn fetch_forecast(&self) -> Result<GridDataSets, GridError> {
        let start = Utc::now();
        let end = start + chrono::Duration::hours(FORECAST_WINDOW_HOURS);

        let start_time = Self::format_timestamp(start);
        let end_time = Self::format_timestamp(end);

        // All three requests are in flight at once; the first failure fails
        // the whole call without a partial result.
        let (consumption, production, wind) = tokio::try_join!(
            self.fetch_series(Dataset::ConsumptionForecast, &start_time, &end_time),
            self.fetch_series(Dataset::ProductionForecast, &start_time, &end_time),
            self.fetch_series(Dataset::WindPowerForecast, &start_time, &end_time),
        )?;

        debug!(
            consumption = consumption.len(),
            production = production.len(),
            wind = wind.len(),
            "Grid forecast fetched"
        );

        Ok(GridDataSets {
            consumption,
            production,
            wind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> FingridClient {
        FingridClient::new(&FingridConfig::new("test-key")).expect("client creation")
    }

    #[test]
    fn test_build_events_url() {
        let client = test_client();
        let url = client.build_events_url(
            Dataset::ConsumptionForecast,
            "2024-01-01T00:00:00Z",
            "2024-01-02T00:00:00Z",
        );
        assert_eq!(
            url,
            "https://api.fingrid.fi/v1/variable/166/events/json\
             ?start_time=2024-01-01T00:00:00Z&end_time=2024-01-02T00:00:00Z"
        );
    }

    #[test]
    fn test_urls_differ_only_in_variable_id() {
        let client = test_client();
        let start = "2024-01-01T00:00:00Z";
        let end = "2024-01-02T00:00:00Z";

        let urls = [
            client.build_events_url(Dataset::ConsumptionForecast, start, end),
            client.build_events_url(Dataset::ProductionForecast, start, end),
            client.build_events_url(Dataset::WindPowerForecast, start, end),
        ];

        assert_ne!(urls[0], urls[1]);
        assert_ne!(urls[0], urls[2]);
        assert_ne!(urls[1], urls[2]);
        for url in &urls {
            assert!(url.contains("start_time=2024-01-01T00:00:00Z"));
            assert!(url.contains("end_time=2024-01-02T00:00:00Z"));
        }
    }

    #[test]
    fn test_format_timestamp_strips_subseconds() {
        let time = DateTime::parse_from_rfc3339("2024-01-01T12:30:45.123Z")
            .expect("valid timestamp")
            .with_timezone(&Utc);
        assert_eq!(
            FingridClient::format_timestamp(time),
            "2024-01-01T12:30:45Z"
        );
    }

    #[test]
    fn test_parse_datetime_rfc3339() {
        let dt = FingridClient::parse_datetime("2024-01-01T00:00:00Z").expect("should parse");
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_datetime_compact_offset() {
        let dt = FingridClient::parse_datetime("2024-01-01T02:00:00+0200").expect("should parse");
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_datetime_naive() {
        let dt = FingridClient::parse_datetime("2024-01-01T00:00:00").expect("should parse");
        assert_eq!(dt.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(FingridClient::parse_datetime("not a date").is_err());
        assert!(FingridClient::parse_datetime("2024-01-01").is_err());
    }

    #[test]
    fn test_convert_events_preserves_order_and_values() {
        let raw = vec![
            RawEvent {
                start_time: "2024-01-01T00:00:00Z".to_string(),
                value: 9500.0,
            },
            RawEvent {
                start_time: "2024-01-01T01:00:00Z".to_string(),
                value: 9400.5,
            },
        ];

        let points = FingridClient::convert_events(raw).expect("should convert");
        assert_eq!(points.len(), 2);
        assert!((points[0].value - 9500.0).abs() < f64::EPSILON);
        assert!((points[1].value - 9400.5).abs() < f64::EPSILON);
        assert!(points[0].time < points[1].time);
    }

    #[test]
    fn test_convert_events_bad_timestamp_fails() {
        let raw = vec![RawEvent {
            start_time: "garbage".to_string(),
            value: 1.0,
        }];
        assert!(FingridClient::convert_events(raw).is_err());
    }

    #[test]
    fn test_client_creation() {
        assert!(FingridClient::new(&FingridConfig::new("key")).is_ok());
    }
}
