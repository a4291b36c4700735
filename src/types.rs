//! Core data types for the clinic admin dashboard
//!
//! This module defines the records exchanged with the clinic backend:
//! - `AdminUser`: The logged-in administrator returned by the session probe
//! - `Appointment`: A patient appointment with its review status
//! - `Doctor`: A registered doctor (only counted by the dashboard)
//! - `AppointmentStatus`: The three review states an admin can assign
//!
//! Field names follow the backend's JSON verbatim (`_id`, `appointment_date`,
//! `docter`). Fields this client does not interpret are kept in `extra` so a
//! record can be patched and re-serialized without losing anything.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Missing and `null` fields both read as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The administrator behind the current session cookie
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    #[serde(rename = "firstName", default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "lastName", default, deserialize_with = "null_as_default")]
    pub last_name: String,
    /// Any other profile fields (email, role, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AdminUser {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            extra: Map::new(),
        }
    }

    /// "First Last", as shown under the dashboard greeting
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Review state of an appointment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl AppointmentStatus {
    /// All states, in dropdown order
    pub fn all() -> &'static [AppointmentStatus] {
        &[
            AppointmentStatus::Pending,
            AppointmentStatus::Accepted,
            AppointmentStatus::Rejected,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Accepted => "Accepted",
            AppointmentStatus::Rejected => "Rejected",
        }
    }

    /// Style class used for the status selector
    pub fn css_class(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "value-pending",
            AppointmentStatus::Accepted => "value-accepted",
            AppointmentStatus::Rejected => "value-rejected",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::all()
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}

/// Returned when a string names no known appointment status
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown appointment status '{0}' (expected Pending, Accepted or Rejected)")]
pub struct StatusParseError(pub String);

/// Doctor name as embedded in an appointment record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DoctorRef {
    #[serde(rename = "firstName", default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "lastName", default, deserialize_with = "null_as_default")]
    pub last_name: String,
}

impl DoctorRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A patient appointment
///
/// Only `status` is ever changed locally, and only after the backend has
/// confirmed the update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    /// Patient first name
    #[serde(rename = "firstName", default, deserialize_with = "null_as_default")]
    pub first_name: String,
    /// Patient last name
    #[serde(rename = "lastName", default, deserialize_with = "null_as_default")]
    pub last_name: String,
    /// Appointment date as sent by the backend (ISO-8601 text)
    #[serde(rename = "appointment_date", default, deserialize_with = "null_as_default")]
    pub date: String,
    /// Assigned doctor, denormalized into the record by the backend
    #[serde(rename = "docter", default, deserialize_with = "null_as_default")]
    pub doctor: DoctorRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AppointmentStatus,
    #[serde(rename = "hasVisited", default, deserialize_with = "null_as_default")]
    pub has_visited: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Appointment {
    pub fn new(id: impl Into<String>, status: AppointmentStatus) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            date: String::new(),
            doctor: DoctorRef::default(),
            department: String::new(),
            status,
            has_visited: false,
            extra: Map::new(),
        }
    }

    /// Builder method: set the patient name
    pub fn patient(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Builder method: set the doctor name
    pub fn doctor(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.doctor = DoctorRef {
            first_name: first_name.into(),
            last_name: last_name.into(),
        };
        self
    }

    /// Builder method: set the date text
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Builder method: set the department
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Builder method: mark the patient as visited
    pub fn visited(mut self, has_visited: bool) -> Self {
        self.has_visited = has_visited;
        self
    }

    pub fn patient_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The date cut to its first 16 characters ("YYYY-MM-DDTHH:MM")
    pub fn date_display(&self) -> String {
        self.date.chars().take(16).collect()
    }
}

/// A registered doctor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "firstName", default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "lastName", default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Doctor {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            extra: Map::new(),
        }
    }
}

// ============================================
// Wire envelopes
// ============================================

/// `GET /api/v1/user/admin/me`
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    pub user: AdminUser,
}

/// `GET /api/v1/appointment/getall`
#[derive(Debug, Deserialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<Appointment>,
}

/// `GET /api/v1/user/docters` (the key is spelled this way by the backend)
#[derive(Debug, Deserialize)]
pub struct DoctorsResponse {
    pub docters: Vec<Doctor>,
}

/// `PUT /api/v1/appointment/update/:id` request body
#[derive(Debug, Serialize)]
pub struct StatusUpdateRequest {
    pub status: AppointmentStatus,
}

/// `{message}` body used by the backend for both success and error replies
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_appointment_from_backend_json() {
        let raw = json!({
            "_id": "64f1",
            "firstName": "Jane",
            "lastName": "Roe",
            "email": "jane@example.com",
            "appointment_date": "2024-05-01T10:30:00.000Z",
            "department": "Cardiology",
            "docter": { "firstName": "Greg", "lastName": "House" },
            "status": "Pending",
            "hasVisited": true
        });

        let appointment: Appointment = serde_json::from_value(raw).unwrap();
        assert_eq!(appointment.id, "64f1");
        assert_eq!(appointment.patient_name(), "Jane Roe");
        assert_eq!(appointment.doctor.full_name(), "Greg House");
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert!(appointment.has_visited);
        assert_eq!(appointment.extra.get("email"), Some(&json!("jane@example.com")));
    }

    #[test]
    fn test_unknown_fields_survive_reserialization() {
        let raw = json!({
            "_id": "1",
            "status": "Accepted",
            "address": "12 Main St",
            "doctorId": "d9"
        });

        let appointment: Appointment = serde_json::from_value(raw).unwrap();
        let back = serde_json::to_value(&appointment).unwrap();
        assert_eq!(back["address"], "12 Main St");
        assert_eq!(back["doctorId"], "d9");
        assert_eq!(back["status"], "Accepted");
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let raw = json!({
            "appointments": [
                {
                    "_id": "1",
                    "firstName": "Jane",
                    "lastName": null,
                    "docter": null,
                    "department": null,
                    "status": null,
                    "hasVisited": null
                },
                { "_id": "2", "status": "Accepted", "docter": { "firstName": null, "lastName": "House" } }
            ]
        });

        let parsed: AppointmentsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.appointments.len(), 2);

        let first = &parsed.appointments[0];
        assert_eq!(first.first_name, "Jane");
        assert_eq!(first.last_name, "");
        assert_eq!(first.doctor, DoctorRef::default());
        assert_eq!(first.department, "");
        assert_eq!(first.status, AppointmentStatus::Pending);
        assert!(!first.has_visited);

        assert_eq!(parsed.appointments[1].doctor.last_name, "House");
        assert_eq!(parsed.appointments[1].status, AppointmentStatus::Accepted);
    }

    #[test]
    fn test_date_display_truncates() {
        let appointment = Appointment::new("1", AppointmentStatus::Pending)
            .date("2024-05-01T10:30:00.000Z");
        assert_eq!(appointment.date_display(), "2024-05-01T10:30");

        let short = Appointment::new("2", AppointmentStatus::Pending).date("2024-05-01");
        assert_eq!(short.date_display(), "2024-05-01");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("Accepted".parse::<AppointmentStatus>(), Ok(AppointmentStatus::Accepted));
        assert_eq!("rejected".parse::<AppointmentStatus>(), Ok(AppointmentStatus::Rejected));
        assert!("Cancelled".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_value(StatusUpdateRequest {
            status: AppointmentStatus::Rejected,
        })
        .unwrap();
        assert_eq!(body, json!({ "status": "Rejected" }));
    }

    #[test]
    fn test_doctors_envelope_key() {
        let raw = json!({ "docters": [{ "_id": "d1", "firstName": "A", "lastName": "B" }] });
        let parsed: DoctorsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.docters.len(), 1);
        assert_eq!(parsed.docters[0].first_name, "A");
    }
}
