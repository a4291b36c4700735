//! Dashboard State
//!
//! The two collections shown on the dashboard, and the rules for changing
//! them: whole-collection replacement when a load resolves, single-field
//! patches when a status update is confirmed.

use serde::Serialize;

use crate::notify::Notification;
use crate::types::{Appointment, AppointmentStatus, Doctor};

/// Result of one collection load, delivered as soon as it resolves
#[derive(Debug, Clone)]
pub enum LoadEvent {
    Appointments(Result<Vec<Appointment>, String>),
    Doctors(Result<Vec<Doctor>, String>),
}

/// Summary counts shown in the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_appointments: usize,
    pub registered_doctors: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardState {
    pub appointments: Vec<Appointment>,
    pub doctors: Vec<Doctor>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a finished load. A failed load empties only its own collection.
    pub fn apply(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Appointments(Ok(appointments)) => {
                tracing::debug!(count = appointments.len(), "Appointments loaded");
                self.appointments = appointments;
            }
            LoadEvent::Appointments(Err(e)) => {
                tracing::warn!(error = %e, "Failed to fetch appointments");
                self.appointments.clear();
            }
            LoadEvent::Doctors(Ok(doctors)) => {
                tracing::debug!(count = doctors.len(), "Doctors loaded");
                self.doctors = doctors;
            }
            LoadEvent::Doctors(Err(e)) => {
                tracing::warn!(error = %e, "Failed to fetch doctors");
                self.doctors.clear();
            }
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_appointments: self.appointments.len(),
            registered_doctors: self.doctors.len(),
        }
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Set the status of the appointment with this id, leaving every other
    /// field and record alone. Returns how many records matched; an unknown
    /// id matches nothing and changes nothing.
    pub fn patch_status(&mut self, id: &str, status: AppointmentStatus) -> usize {
        let mut matched = 0;
        for appointment in self.appointments.iter_mut().filter(|a| a.id == id) {
            appointment.status = status;
            matched += 1;
        }
        matched
    }

    /// Settle a status update once the backend has answered.
    ///
    /// `Ok` carries the server's success message, `Err` its error message.
    /// Local state changes only on success.
    pub fn settle_status_update(
        &mut self,
        id: &str,
        status: AppointmentStatus,
        outcome: Result<String, String>,
    ) -> Notification {
        match outcome {
            Ok(message) => {
                let matched = self.patch_status(id, status);
                if matched == 0 {
                    tracing::debug!(appointment_id = %id, "Updated appointment is not in the local list");
                }
                Notification::success(message)
            }
            Err(message) => Notification::error(message),
        }
    }
}
