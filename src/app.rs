//! Admin Application
//!
//! Owns the pieces that live for one application load: the backend client,
//! the session store and the toast queue. Views borrow from it.

use std::sync::Arc;

use crate::api::AdminApi;
use crate::dashboard::{self, DashboardLoader, DashboardState};
use crate::notify::{Notification, Toasts};
use crate::routes::{self, Access};
use crate::session::{self, Session, SessionStore};
use crate::types::AppointmentStatus;

pub struct AdminApp {
    api: Arc<dyn AdminApi>,
    session: SessionStore,
    toasts: Toasts,
}

impl AdminApp {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            api,
            session: SessionStore::init(),
            toasts: Toasts::new(),
        }
    }

    /// Run the startup probe. Later calls reuse the first result.
    pub async fn start(&mut self) -> &Session {
        if !self.session.is_resolved() {
            let resolved = session::probe(self.api.as_ref()).await;
            tracing::info!(authenticated = resolved.is_authenticated, "Session resolved");
            if let Err(e) = self.session.set(resolved) {
                tracing::debug!(error = %e, "Ignoring duplicate session resolution");
            }
        }
        self.session.current()
    }

    pub fn session(&self) -> &Session {
        self.session.current()
    }

    /// Guard a path against the current session
    pub fn open(&self, path: &str) -> Access {
        routes::navigate(path, self.session.current())
    }

    /// Start the dashboard loads without waiting for them
    pub fn spawn_dashboard_load(&self) -> DashboardLoader {
        DashboardLoader::spawn(Arc::clone(&self.api))
    }

    /// Load both dashboard collections, applying each as it arrives
    pub async fn load_dashboard(&self) -> DashboardState {
        let mut state = DashboardState::new();
        self.spawn_dashboard_load().drain_into(&mut state).await;
        state
    }

    /// Change an appointment's status and queue the resulting toast
    pub async fn update_status(
        &mut self,
        state: &mut DashboardState,
        id: &str,
        status: AppointmentStatus,
    ) -> Notification {
        let toast = dashboard::update_status(self.api.as_ref(), state, id, status).await;
        self.toasts.push(toast.clone());
        toast
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }
}
