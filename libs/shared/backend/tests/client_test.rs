use assert_matches::assert_matches;
use serde_json::json;
use wiremock::{MockServer, Mock, ResponseTemplate};
use wiremock::matchers::{body_json, header, method, path};

use shared_backend::{BookingBackend, MediturnosClient};
use shared_models::error::PREFERENCE_FAILED;
use shared_models::BookingError;
use shared_utils::test_utils::{sample_payload, MockBackendResponses, TestConfig};

fn client_for(mock_server: &MockServer) -> MediturnosClient {
    MediturnosClient::new(&TestConfig::new(&mock_server.uri()).to_app_config())
}

#[tokio::test]
async fn test_list_doctors_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/medicos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockBackendResponses::doctor_list()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let doctors = client_for(&mock_server).list_doctors().await.unwrap();

    assert_eq!(doctors.len(), 5);
    assert_eq!(doctors[0].id, 3);
    assert_eq!(doctors[0].name, "Dr. Gómez");
    assert_eq!(doctors[2].price, 9500.5);
}

#[tokio::test]
async fn test_list_doctors_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/medicos"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).list_doctors().await;

    assert_matches!(result, Err(BookingError::Http { status: 503, .. }));
}

#[tokio::test]
async fn test_list_doctors_rejects_non_array_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/medicos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "medicos": [] })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).list_doctors().await;

    assert_matches!(result, Err(BookingError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_list_doctors_transport_error() {
    let client = MediturnosClient::new(&TestConfig::unreachable().to_app_config());

    let result = client.list_doctors().await;

    assert_matches!(result, Err(BookingError::Transport(_)));
}

#[tokio::test]
async fn test_create_preference_sends_json_payload() {
    let mock_server = MockServer::start().await;
    let payload = sample_payload(4);

    Mock::given(method("POST"))
        .and(path("/api/crear-preferencia"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "nombre": "Ana Pérez",
            "email": "ana@example.com",
            "especialidad": "Cardiología",
            "medico_id": 4,
            "fecha": "2026-11-02",
            "hora": "10:30",
            "motivo": "Control anual"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            MockBackendResponses::preference_response("https://pay.example/x"),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server).create_preference(&payload).await.unwrap();

    assert_eq!(response.payment_link(), Some("https://pay.example/x"));
}

#[tokio::test]
async fn test_create_preference_without_link() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/crear-preferencia"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let response = client_for(&mock_server)
        .create_preference(&sample_payload(1))
        .await
        .unwrap();

    assert_eq!(response.payment_link(), None);
}

#[tokio::test]
async fn test_create_preference_prefers_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/crear-preferencia"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "detail": "slot taken",
            "error": "conflict"
        })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).create_preference(&sample_payload(1)).await;

    assert_eq!(
        result,
        Err(BookingError::Http { status: 409, message: "slot taken".to_string() })
    );
}

#[tokio::test]
async fn test_create_preference_falls_back_to_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/crear-preferencia"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "email inválido" })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).create_preference(&sample_payload(1)).await;

    assert_eq!(
        result,
        Err(BookingError::Http { status: 400, message: "email inválido".to_string() })
    );
}

#[tokio::test]
async fn test_create_preference_generic_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/crear-preferencia"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).create_preference(&sample_payload(1)).await;

    assert_eq!(
        result,
        Err(BookingError::Http { status: 500, message: PREFERENCE_FAILED.to_string() })
    );
}
