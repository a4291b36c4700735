//! Appointment Dashboard
//!
//! Loads the appointment and doctor collections, renders them, and applies
//! status changes once the backend has confirmed them.
//!
//! ## Flow
//!
//! 1. [`DashboardLoader`] starts both loads as independent tasks
//! 2. [`DashboardState::apply`] takes each result as it arrives
//! 3. [`update_status`] sends a change and patches the one matching record

mod state;
pub mod render;

#[cfg(feature = "native")]
mod loader;

pub use state::{DashboardState, LoadEvent, Summary};

#[cfg(feature = "native")]
pub use loader::DashboardLoader;

#[cfg(feature = "native")]
use crate::{api::AdminApi, notify::Notification, types::AppointmentStatus};

/// Send a status change and settle local state on the answer.
///
/// The local record is patched only after the backend confirms; on failure
/// nothing changes and the notification carries the backend's message.
#[cfg(feature = "native")]
pub async fn update_status(
    api: &dyn AdminApi,
    state: &mut DashboardState,
    id: &str,
    status: AppointmentStatus,
) -> Notification {
    let outcome = api
        .update_appointment_status(id, status)
        .await
        .map_err(|e| e.user_message());
    state.settle_status_update(id, status, outcome)
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiResult};
    use crate::notify::NotificationKind;
    use crate::types::{AdminUser, Appointment, Doctor};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records calls and answers every update with a fixed outcome
    struct ScriptedApi {
        accept: bool,
        calls: Mutex<Vec<(String, AppointmentStatus)>>,
    }

    impl ScriptedApi {
        fn new(accept: bool) -> Self {
            Self {
                accept,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AdminApi for ScriptedApi {
        async fn fetch_current_admin(&self) -> ApiResult<AdminUser> {
            Ok(AdminUser::new("A", "B"))
        }

        async fn fetch_appointments(&self) -> ApiResult<Vec<Appointment>> {
            Ok(vec![])
        }

        async fn fetch_doctors(&self) -> ApiResult<Vec<Doctor>> {
            Ok(vec![])
        }

        async fn update_appointment_status(
            &self,
            id: &str,
            status: AppointmentStatus,
        ) -> ApiResult<String> {
            self.calls.lock().unwrap().push((id.to_string(), status));
            if self.accept {
                Ok("Status Updated".to_string())
            } else {
                Err(ApiError::Status {
                    status: 400,
                    message: Some("Invalid status".to_string()),
                })
            }
        }
    }

    fn one_pending() -> DashboardState {
        DashboardState {
            appointments: vec![Appointment::new("1", AppointmentStatus::Pending).patient("Jane", "Roe")],
            doctors: vec![],
        }
    }

    #[tokio::test]
    async fn test_confirmed_update_patches_record() {
        let api = ScriptedApi::new(true);
        let mut state = one_pending();

        let toast = update_status(&api, &mut state, "1", AppointmentStatus::Accepted).await;

        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(toast.message, "Status Updated");
        assert_eq!(state.appointments[0].status, AppointmentStatus::Accepted);
        assert_eq!(state.appointments[0].patient_name(), "Jane Roe");
        assert_eq!(
            api.calls.lock().unwrap().as_slice(),
            &[("1".to_string(), AppointmentStatus::Accepted)]
        );
    }

    #[tokio::test]
    async fn test_rejected_update_keeps_state() {
        let api = ScriptedApi::new(false);
        let mut state = one_pending();
        let before = state.clone();

        let toast = update_status(&api, &mut state, "1", AppointmentStatus::Accepted).await;

        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, "Invalid status");
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_update_for_unknown_id_is_noop() {
        let api = ScriptedApi::new(true);
        let mut state = one_pending();
        let before = state.clone();

        let toast = update_status(&api, &mut state, "gone", AppointmentStatus::Rejected).await;

        assert_eq!(toast.kind, NotificationKind::Success);
        assert_eq!(state, before);
    }
}
