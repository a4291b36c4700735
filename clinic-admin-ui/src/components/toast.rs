//! Toast Notification Component
//!
//! Shows success and error messages at the top center of the page.

use clinic_admin::{NotificationKind, ToastPosition};
use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class=format!("fixed {} z-50 space-y-2", position_class(ToastPosition::default()))>
            // Success toast
            {move || {
                state.success.with(|slot| slot.message().map(str::to_string)).map(|msg| view! {
                    <ToastMessage message=msg kind=NotificationKind::Success />
                })
            }}

            // Error toast
            {move || {
                state.error.with(|slot| slot.message().map(str::to_string)).map(|msg| view! {
                    <ToastMessage message=msg kind=NotificationKind::Error />
                })
            }}
        </div>
    }
}

fn position_class(position: ToastPosition) -> &'static str {
    match position {
        ToastPosition::TopCenter => "top-4 left-1/2 -translate-x-1/2",
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    kind: NotificationKind,
) -> impl IntoView {
    let (icon, bg_class) = match kind {
        NotificationKind::Success => ("✓", "bg-green-600"),
        NotificationKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
