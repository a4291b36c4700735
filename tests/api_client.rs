//! `ApiClient` against a mock backend: paths, cookie credentials and error
//! bodies.

mod common;

use clinic_admin::{AdminApi, ApiClient, ApiClientConfig, ApiError, AppointmentStatus};
use common::{MeReply, MockBackend, TOKEN};

fn client(base_url: &str, token: Option<&str>) -> ApiClient {
    ApiClient::new(&ApiClientConfig {
        base_url: base_url.to_string(),
        token: token.map(str::to_string),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_current_admin_sends_cookie() {
    let origin = common::spawn(MockBackend::default()).await;

    let user = client(&origin, Some(TOKEN)).fetch_current_admin().await.unwrap();
    assert_eq!(user.full_name(), "A B");
    assert_eq!(user.extra.get("role").and_then(|v| v.as_str()), Some("Admin"));
}

#[tokio::test]
async fn test_missing_cookie_is_rejected() {
    let origin = common::spawn(MockBackend::default()).await;

    let err = client(&origin, None).fetch_current_admin().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("Admin is not authenticated!"));
}

#[tokio::test]
async fn test_fetch_collections() {
    let origin = common::spawn(MockBackend::default()).await;
    let api = client(&origin, Some(TOKEN));

    let appointments = api.fetch_appointments().await.unwrap();
    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[0].doctor.full_name(), "Greg House");
    assert_eq!(appointments[1].status, AppointmentStatus::Accepted);

    let doctors = api.fetch_doctors().await.unwrap();
    assert_eq!(doctors.len(), 3);
    assert_eq!(doctors[2].last_name, "Wilson");
}

#[tokio::test]
async fn test_non_json_error_body() {
    let origin = common::spawn(MockBackend {
        fail_doctors: true,
        ..Default::default()
    })
    .await;

    let err = client(&origin, Some(TOKEN)).fetch_doctors().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(err.server_message().is_none());
}

#[tokio::test]
async fn test_update_status_sends_body() {
    let backend = MockBackend::default();
    let updates = backend.updates.clone();
    let origin = common::spawn(backend).await;

    let message = client(&origin, Some(TOKEN))
        .update_appointment_status("1", AppointmentStatus::Accepted)
        .await
        .unwrap();

    assert_eq!(message, "Status Updated");
    let updates = updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, "1");
    assert_eq!(updates[0].1, serde_json::json!({ "status": "Accepted" }));
}

#[tokio::test]
async fn test_update_status_error_message() {
    let origin = common::spawn(MockBackend::default()).await;
    let api = client(&origin, Some(TOKEN));

    let err = api
        .update_appointment_status("locked", AppointmentStatus::Accepted)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Invalid status");

    let err = api
        .update_appointment_status("404", AppointmentStatus::Rejected)
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Appointment not found!");
}

#[tokio::test]
async fn test_unreachable_backend() {
    let origin = common::dead_origin().await;

    let err = client(&origin, Some(TOKEN)).fetch_appointments().await.unwrap_err();
    assert!(matches!(err, ApiError::Unavailable(_)));
}

#[tokio::test]
async fn test_update_confirmed_without_body() {
    let backend = MockBackend {
        bare_update_reply: true,
        ..Default::default()
    };
    let updates = backend.updates.clone();
    let origin = common::spawn(backend).await;

    let message = client(&origin, Some(TOKEN))
        .update_appointment_status("1", AppointmentStatus::Rejected)
        .await
        .unwrap();

    assert_eq!(message, "Status updated");
    assert_eq!(updates.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_admin_body_is_decode_error() {
    let origin = common::spawn(MockBackend {
        me_reply: MeReply::NotJson,
        ..Default::default()
    })
    .await;

    let err = client(&origin, Some(TOKEN)).fetch_current_admin().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
