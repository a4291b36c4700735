//! # Clinic Admin
//!
//! Admin dashboard core for a clinic appointment system: the session gate,
//! the appointment dashboard and the status update flow, talking to the
//! clinic's REST backend.
//!
//! ## Modules
//!
//! - [`types`]: Records exchanged with the backend
//! - [`endpoints`]: Backend origin and paths
//! - [`session`]: Session store and startup probe
//! - [`routes`]: Route table and guard
//! - [`dashboard`]: Collection loading, status updates and rendering
//! - [`notify`]: Toast notifications
//! - [`api`]: Credentialed `reqwest` client (native only)
//! - [`config`]: TOML + environment configuration (native only)
//! - [`app`]: Per-load application owner (native only)
//!
//! The browser frontend builds this crate with `default-features = false`,
//! which leaves only the target-independent modules.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinic_admin::{AdminApp, ApiClient, ApiClientConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(&ApiClientConfig {
//!         token: Some("<admin cookie>".to_string()),
//!         ..Default::default()
//!     })?;
//!     let mut app = AdminApp::new(Arc::new(client));
//!
//!     if app.start().await.is_authenticated {
//!         let state = app.load_dashboard().await;
//!         println!("{} appointments", state.summary().total_appointments);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod endpoints;
pub mod notify;
pub mod routes;
pub mod session;
pub mod types;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod app;
#[cfg(feature = "native")]
pub mod config;

// Re-export top-level types for convenience
pub use dashboard::{DashboardState, LoadEvent, Summary};
pub use notify::{Notification, NotificationKind, ToastPosition, ToastSlot, Toasts};
pub use routes::{guard, navigate, Access, Route};
pub use session::{Session, SessionError, SessionStore};
pub use types::{
    AdminUser, Appointment, AppointmentStatus, Doctor, DoctorRef, StatusParseError,
};

#[cfg(feature = "native")]
pub use api::{AdminApi, ApiClient, ApiClientConfig, ApiError, ApiResult};
#[cfg(feature = "native")]
pub use app::AdminApp;
#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoadedConfig, LoggingConfig};
#[cfg(feature = "native")]
pub use dashboard::{update_status, DashboardLoader};
