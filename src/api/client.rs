//! Clinic Backend REST Client
//!
//! `reqwest` client that carries the admin session cookie on every request.

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use uuid::Uuid;

use super::{AdminApi, ApiError, ApiResult};
use crate::endpoints::{self, DEFAULT_API_ORIGIN, DEFAULT_COOKIE_NAME};
use crate::types::{
    AdminUser, Appointment, AppointmentStatus, AppointmentsResponse, Doctor, DoctorsResponse,
    MeResponse, MessageResponse, StatusUpdateRequest,
};

/// Shown when the backend confirms an update without saying anything
const FALLBACK_UPDATE_MESSAGE: &str = "Status updated";

/// Settings for [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Backend origin, without the `/api/v1` prefix
    pub base_url: String,
    /// Name of the session cookie
    pub cookie_name: String,
    /// Session cookie value; `None` sends whatever the jar picks up
    pub token: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_ORIGIN.to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            token: None,
        }
    }
}

/// Credentialed client for the clinic backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with a cookie jar seeded from the config
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let origin = Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidConfig(format!("bad base url '{}': {}", base_url, e)))?;

        let jar = Jar::default();
        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            jar.add_cookie_str(&format!("{}={}; Path=/", config.cookie_name, token), &origin);
        }

        let client = Client::builder()
            .cookie_provider(Arc::new(jar))
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        read_json(response).await
    }
}

/// Turn a response into `T`, or into an error carrying the backend's message
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.status().is_success() {
        return Err(status_error(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `{message}` of a successful reply; an empty or non-JSON body has none
async fn read_message(response: Response) -> Option<String> {
    let body = response.text().await.ok()?;
    serde_json::from_str::<MessageResponse>(&body)
        .ok()
        .and_then(|body| body.message)
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Status { status, message }
}

#[async_trait]
impl AdminApi for ApiClient {
    async fn fetch_current_admin(&self) -> ApiResult<AdminUser> {
        let body: MeResponse = self.get_json(endpoints::CURRENT_ADMIN).await?;
        Ok(body.user)
    }

    async fn fetch_appointments(&self) -> ApiResult<Vec<Appointment>> {
        let body: AppointmentsResponse = self.get_json(endpoints::APPOINTMENTS).await?;
        Ok(body.appointments)
    }

    async fn fetch_doctors(&self) -> ApiResult<Vec<Doctor>> {
        let body: DoctorsResponse = self.get_json(endpoints::DOCTORS).await?;
        Ok(body.docters)
    }

    async fn update_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> ApiResult<String> {
        let url = self.url(&endpoints::update_status(&urlencoding::encode(id)));
        let request_id = Uuid::new_v4().to_string();

        tracing::info!(
            request_id = %request_id,
            appointment_id = %id,
            status = %status,
            "Updating appointment status"
        );

        let response = self
            .client
            .put(&url)
            .header("x-request-id", &request_id)
            .json(&StatusUpdateRequest { status })
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        // Any 2xx confirms the change, whatever the body looks like
        if !response.status().is_success() {
            let error = status_error(response).await;
            tracing::warn!(request_id = %request_id, error = %error, "Status update rejected");
            return Err(error);
        }

        tracing::info!(request_id = %request_id, "Appointment status updated");
        Ok(read_message(response)
            .await
            .unwrap_or_else(|| FALLBACK_UPDATE_MESSAGE.to_string()))
    }
}
