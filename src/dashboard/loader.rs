//! Dashboard Loader
//!
//! Starts the appointment and doctor loads as two independent tasks. Each
//! task sends its own [`LoadEvent`] the moment its request resolves; there
//! is no ordering between them and no barrier.

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::state::{DashboardState, LoadEvent};
use crate::api::AdminApi;

/// In-flight dashboard loads
pub struct DashboardLoader {
    events: mpsc::UnboundedReceiver<LoadEvent>,
    handles: Vec<JoinHandle<()>>,
}

impl DashboardLoader {
    /// Issue both requests. Must be called inside a tokio runtime.
    pub fn spawn(api: Arc<dyn AdminApi>) -> Self {
        let (tx, events) = mpsc::unbounded_channel();

        let appointments = {
            let api = Arc::clone(&api);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.fetch_appointments().await.map_err(|e| e.to_string());
                let _ = tx.send(LoadEvent::Appointments(result));
            })
        };

        let doctors = tokio::spawn(async move {
            let result = api.fetch_doctors().await.map_err(|e| e.to_string());
            let _ = tx.send(LoadEvent::Doctors(result));
        });

        Self {
            events,
            handles: vec![appointments, doctors],
        }
    }

    /// Next finished load, or `None` once both have been delivered
    pub async fn next_event(&mut self) -> Option<LoadEvent> {
        self.events.recv().await
    }

    /// Apply every load to `state` as it arrives, until both are in
    pub async fn drain_into(mut self, state: &mut DashboardState) {
        while let Some(event) = self.next_event().await {
            state.apply(event);
        }
        for handle in self.handles.drain(..) {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "Dashboard load task panicked");
            }
        }
    }
}

impl Drop for DashboardLoader {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
