//! Clinic Backend API
//!
//! Credentialed calls to the clinic REST backend. The [`AdminApi`] trait is
//! the seam the session probe, the dashboard loader and the status update
//! flow are written against; [`ApiClient`] is the `reqwest` implementation.
//!
//! ## Endpoints
//!
//! - `GET  /api/v1/user/admin/me`: current admin
//! - `GET  /api/v1/appointment/getall`: all appointments
//! - `GET  /api/v1/user/docters`: all doctors
//! - `PUT  /api/v1/appointment/update/:id`: change an appointment's status

mod client;
mod error;

pub use client::{ApiClient, ApiClientConfig};
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::types::{AdminUser, Appointment, AppointmentStatus, Doctor};

/// Operations the dashboard needs from the backend
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Who the current credentials belong to
    async fn fetch_current_admin(&self) -> ApiResult<AdminUser>;

    /// Every appointment
    async fn fetch_appointments(&self) -> ApiResult<Vec<Appointment>>;

    /// Every registered doctor
    async fn fetch_doctors(&self) -> ApiResult<Vec<Doctor>>;

    /// Change one appointment's status; returns the backend's message
    async fn update_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> ApiResult<String>;
}
