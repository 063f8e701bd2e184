//! Integration tests for the REST API client
//!
//! Test coverage:
//! - Shift and event fetches against a mock HTTP server
//! - Bearer token and query parameters
//! - Bare and wrapped list payloads
//! - Retry on transient statuses, no retry on permanent ones

mod common;

use mockito::{Matcher, Server};
use turnos::domain::models::ApiConfig;
use turnos::{
    ApiClient, CurrentUser, DateRange, EventClassifier, EventFilter, EventQuery, EventSource,
    RecordId, ShiftQuery, ShiftResolver, ShiftSource, SourceError,
};

fn config_for(server: &Server, max_retries: u32) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server.url()),
        max_retries,
        initial_backoff_ms: 1,
        max_backoff_ms: 5,
        timeout_secs: 5,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_fetch_shifts_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/turnos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::shifts_payload())
        .create_async()
        .await;

    let client = ApiClient::from_config(&config_for(&server, 0)).unwrap();
    let shifts = client.fetch_shifts(&ShiftQuery::default()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0].name, "Oficina");
    assert_eq!(shifts[0].schedule_name.as_deref(), Some("Administración"));
    assert_eq!(shifts[1].end_time, "06:00");

    let days = ShiftResolver::new().resolve(&shifts, [common::date(2024, 6, 15)]);
    assert_eq!(days.get(common::date(2024, 6, 15)).flatten().unwrap().name, "Guardia nocturna");
}

#[tokio::test]
async fn test_fetch_shifts_sends_user_and_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/turnos")
        .match_query(Matcher::UrlEncoded("user_id".into(), "7".into()))
        .match_header("authorization", "Bearer s3cret")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let config = ApiConfig {
        token: Some("s3cret".to_string()),
        ..config_for(&server, 0)
    };
    let client = ApiClient::from_config(&config).unwrap();
    let shifts = client.fetch_shifts(&ShiftQuery::for_user(7)).await.unwrap();

    mock.assert_async().await;
    assert!(shifts.is_empty());
}

#[tokio::test]
async fn test_fetch_events_wrapped_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/eventos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2024-06-01".into()),
            Matcher::UrlEncoded("to".into(), "2024-06-30".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(common::events_payload())
        .create_async()
        .await;

    let client = ApiClient::from_config(&config_for(&server, 0)).unwrap();
    let query = EventQuery {
        from: common::date(2024, 6, 1),
        to: common::date(2024, 6, 30),
        user_id: None,
    };
    let events = client.fetch_events(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(events.len(), 4);

    let user = CurrentUser {
        id: Some(RecordId::Number(7)),
        department_id: Some(RecordId::Number(3)),
    };
    let window = DateRange::month(2024, 6).unwrap();
    let visible = EventClassifier::new().visible(&events, &user, EventFilter::default(), window);
    let titles: Vec<&str> = visible.iter().map(|c| c.event.title.as_str()).collect();
    assert_eq!(titles, vec!["Reunión de área", "Médico", "Feriado"]);
}

#[tokio::test]
async fn test_transient_status_is_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/turnos")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("maintenance")
        .expect(3)
        .create_async()
        .await;

    let client = ApiClient::from_config(&config_for(&server, 2)).unwrap();
    let err = client.fetch_shifts(&ShiftQuery::default()).await.unwrap_err();

    mock.assert_async().await;
    match err {
        SourceError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_permanent_status_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/turnos")
        .match_query(Matcher::Any)
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let client = ApiClient::from_config(&config_for(&server, 3)).unwrap();
    let err = client.fetch_shifts(&ShiftQuery::default()).await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, SourceError::Status { status: 404, .. }));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/turnos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>login</html>")
        .create_async()
        .await;

    let client = ApiClient::from_config(&config_for(&server, 2)).unwrap();
    let err = client.fetch_shifts(&ShiftQuery::default()).await.unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}

#[tokio::test]
async fn test_error_object_with_ok_status_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/turnos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Token inválido"}"#)
        .create_async()
        .await;

    let client = ApiClient::from_config(&config_for(&server, 0)).unwrap();
    let err = client.fetch_shifts(&ShiftQuery::default()).await.unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}
