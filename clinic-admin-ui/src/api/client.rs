//! HTTP API Client
//!
//! Functions for communicating with the clinic REST backend. Every request
//! carries the browser's cookies for the backend origin.

use clinic_admin::endpoints::{self, DEFAULT_API_ORIGIN};
use clinic_admin::types::{
    AdminUser, Appointment, AppointmentStatus, AppointmentsResponse, Doctor, DoctorsResponse,
    MeResponse, MessageResponse, StatusUpdateRequest,
};
use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

const API_BASE_KEY: &str = "clinic_admin_api_url";

/// Get the backend origin from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());
    normalize_base(&url)
}

fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn url(path: &str) -> String {
    endpoints::join(&get_api_base(), path)
}

/// Read the backend's `{message}` out of an error response
async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Who the browser's cookies belong to
pub async fn fetch_current_admin() -> Result<AdminUser, String> {
    let body: MeResponse = get_json(endpoints::CURRENT_ADMIN).await?;
    Ok(body.user)
}

/// Fetch all appointments
pub async fn fetch_appointments() -> Result<Vec<Appointment>, String> {
    let body: AppointmentsResponse = get_json(endpoints::APPOINTMENTS).await?;
    Ok(body.appointments)
}

/// Fetch all registered doctors
pub async fn fetch_doctors() -> Result<Vec<Doctor>, String> {
    let body: DoctorsResponse = get_json(endpoints::DOCTORS).await?;
    Ok(body.docters)
}

/// Change an appointment's status.
///
/// `Ok` carries the backend's success message, `Err` its error message.
pub async fn update_appointment_status(
    id: &str,
    status: AppointmentStatus,
) -> Result<String, String> {
    let encoded: String = js_sys::encode_uri_component(id).into();

    let response = Request::put(&url(&endpoints::update_status(&encoded)))
        .credentials(RequestCredentials::Include)
        .json(&StatusUpdateRequest { status })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    // Any 2xx confirms the change; an empty or non-JSON body just has no message
    let body = response.text().await.unwrap_or_default();
    Ok(success_message(&body))
}

fn success_message(body: &str) -> String {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| "Status updated".to_string())
}
