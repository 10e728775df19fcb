//! Integration tests for the Fingrid client (wiremock-based)

use integration_fingrid::{FingridClient, FingridConfig, GridClient, GridError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_events_json(base_value: f64) -> serde_json::Value {
    serde_json::json!([
        { "start_time": "2024-01-01T00:00:00+0000", "value": base_value },
        { "start_time": "2024-01-01T01:00:00+0000", "value": base_value + 100.0 },
        { "start_time": "2024-01-01T02:00:00+0000", "value": base_value + 200.0 }
    ])
}

fn create_test_client(mock_server: &MockServer) -> FingridClient {
    let config = FingridConfig::for_testing(mock_server.uri());
    #[allow(clippy::expect_used)]
    FingridClient::new(&config).expect("Failed to create client")
}

/// Mount one events mock per dataset, each returning a distinct series
async fn setup_dataset_mocks(mock_server: &MockServer) {
    for (variable_id, base_value) in [(166, 9000.0), (241, 8000.0), (245, 1000.0)] {
        Mock::given(method("GET"))
            .and(path(format!("/variable/{variable_id}/events/json")))
            .and(header("x-api-key", "test-key"))
            .and(header("accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(sample_events_json(base_value)),
            )
            .mount(mock_server)
            .await;
    }
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_fetch_forecast_success() {
    let mock_server = MockServer::start().await;
    setup_dataset_mocks(&mock_server).await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast().await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let sets = result.unwrap();
    assert_eq!(sets.consumption.len(), 3);
    assert_eq!(sets.production.len(), 3);
    assert_eq!(sets.wind.len(), 3);

    // Values copied verbatim from the upstream arrays
    assert!((sets.consumption[0].value - 9000.0).abs() < f64::EPSILON);
    assert!((sets.production[1].value - 8100.0).abs() < f64::EPSILON);
    assert!((sets.wind[2].value - 1200.0).abs() < f64::EPSILON);

    // Timestamps parsed from upstream ISO 8601 strings
    assert_eq!(
        sets.consumption[0].time.to_rfc3339(),
        "2024-01-01T00:00:00+00:00"
    );
}

#[tokio::test]
async fn test_all_three_requests_share_one_window() {
    let mock_server = MockServer::start().await;
    setup_dataset_mocks(&mock_server).await;

    let client = create_test_client(&mock_server);
    client.fetch_forecast().await.expect("fetch should succeed");

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 3);

    let windows: Vec<(String, String)> = requests
        .iter()
        .map(|request| {
            let mut start = None;
            let mut end = None;
            for (key, value) in request.url.query_pairs() {
                match key.as_ref() {
                    "start_time" => start = Some(value.to_string()),
                    "end_time" => end = Some(value.to_string()),
                    _ => {}
                }
            }
            (start.expect("start_time sent"), end.expect("end_time sent"))
        })
        .collect();

    // One shared window across the three dataset requests
    assert_eq!(windows[0], windows[1]);
    assert_eq!(windows[1], windows[2]);

    // ISO 8601 with whole seconds and a bare Z, no fractional part
    let (start, end) = &windows[0];
    assert!(start.ends_with('Z'), "start_time not Z-terminated: {start}");
    assert!(!start.contains('.'), "start_time has subseconds: {start}");
    assert!(end.ends_with('Z'), "end_time not Z-terminated: {end}");
    assert!(!end.contains('.'), "end_time has subseconds: {end}");

    // Requests differ only in the variable id path segment
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert!(paths.contains(&"/variable/166/events/json"));
    assert!(paths.contains(&"/variable/241/events/json"));
    assert!(paths.contains(&"/variable/245/events/json"));
}

#[tokio::test]
async fn test_empty_series_is_valid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let sets = client.fetch_forecast().await.expect("fetch should succeed");

    assert!(sets.consumption.is_empty());
    assert!(sets.production.is_empty());
    assert!(sets.wind.is_empty());
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_one_failing_dataset_fails_the_whole_fetch() {
    let mock_server = MockServer::start().await;

    for variable_id in [166, 241] {
        Mock::given(method("GET"))
            .and(path(format!("/variable/{variable_id}/events/json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_events_json(100.0)))
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/variable/245/events/json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast().await;

    assert!(
        matches!(result, Err(GridError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_unauthorized_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast().await;

    assert!(
        matches!(result, Err(GridError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast().await;

    assert!(
        matches!(result, Err(GridError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_bad_timestamp_in_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "start_time": "not-a-date", "value": 1.0 }
        ])))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_forecast().await;

    assert!(
        matches!(result, Err(GridError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}
