//! Admin Session
//!
//! The session is created empty when the application starts and is set
//! exactly once, when the startup probe resolves. After that it is read-only
//! until the next application load.

use serde::Serialize;

use crate::types::AdminUser;

/// Who is using the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<AdminUser>,
}

impl Session {
    /// A session backed by a confirmed admin
    pub fn authenticated(user: AdminUser) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// The logged-out session used at startup and after a failed probe
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build the session from the outcome of a "who am I" lookup.
    ///
    /// Any error downgrades silently to the anonymous session.
    pub fn from_probe<E: std::fmt::Display>(outcome: Result<AdminUser, E>) -> Self {
        match outcome {
            Ok(user) => Self::authenticated(user),
            Err(e) => {
                tracing::debug!(error = %e, "Session probe failed, continuing logged out");
                Self::anonymous()
            }
        }
    }

    /// Display name of the admin, if any
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().map(AdminUser::full_name)
    }
}

/// Single owner of the session for one application load
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    session: Session,
    resolved: bool,
}

impl SessionStore {
    /// Fresh store holding the anonymous session
    pub fn init() -> Self {
        Self::default()
    }

    /// Current session
    pub fn current(&self) -> &Session {
        &self.session
    }

    /// Whether the startup probe has already delivered its result
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Record the probe result. Only the first call takes effect.
    pub fn set(&mut self, session: Session) -> Result<(), SessionError> {
        if self.resolved {
            return Err(SessionError::AlreadyResolved);
        }
        self.session = session;
        self.resolved = true;
        Ok(())
    }
}

/// Session lifecycle errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("session was already resolved for this application load")]
    AlreadyResolved,
}

/// Ask the backend who the current credentials belong to.
///
/// Issues one request, never retries, never fails.
#[cfg(feature = "native")]
pub async fn probe(api: &dyn crate::api::AdminApi) -> Session {
    Session::from_probe(api.fetch_current_admin().await)
}
