//! Global Application State
//!
//! Reactive state management using Leptos signals.

use clinic_admin::{Notification, NotificationKind, Session, SessionStore, ToastSlot};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Session for this page load, set once by the startup probe
    pub session: RwSignal<SessionStore>,
    /// Success message (for toasts)
    pub success: RwSignal<ToastSlot>,
    /// Error message (for toasts)
    pub error: RwSignal<ToastSlot>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        session: create_rw_signal(SessionStore::init()),
        success: create_rw_signal(ToastSlot::default()),
        error: create_rw_signal(ToastSlot::default()),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Record the startup probe result
    pub fn resolve_session(&self, session: Session) {
        self.session.update(|store| {
            if let Err(e) = store.set(session) {
                web_sys::console::warn_1(&e.to_string().into());
            }
        });
    }

    /// Whether the startup probe has answered yet
    pub fn session_resolved(&self) -> bool {
        self.session.with(|store| store.is_resolved())
    }

    /// Snapshot of the current session
    pub fn current_session(&self) -> Session {
        self.session.with(|store| store.current().clone())
    }

    /// Show a notification as a toast
    pub fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => self.show_success(&notification.message),
            NotificationKind::Error => self.show_error(&notification.message),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        show_for(self.success, message, 3000);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        show_for(self.error, message, 5000);
    }
}

/// A newer toast in the same slot outlives the older one's timer
fn show_for(slot: RwSignal<ToastSlot>, message: &str, millis: u32) {
    let Some(generation) = slot.try_update(|s| s.show(message)) else {
        return;
    };

    gloo_timers::callback::Timeout::new(millis, move || {
        slot.update(|s| s.expire(generation));
    }).forget();
}
