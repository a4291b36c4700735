//! Protected Route
//!
//! Renders its children only when the session guard allows the screen,
//! otherwise redirects. Nothing is decided until the startup probe answers.

use clinic_admin::routes::{guard, Access, Route as Screen};
use leptos::*;
use leptos_router::*;

use super::Loading;
use crate::state::global::GlobalState;

#[component]
pub fn ProtectedRoute(
    screen: Screen,
    children: ChildrenFn,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        if !state.session_resolved() {
            return view! { <Loading /> }.into_view();
        }

        match guard(screen, &state.current_session()) {
            Access::Allowed(_) => children().into_view(),
            Access::Denied { redirect } => view! {
                <Redirect path=redirect.path() />
            }.into_view(),
        }
    }
}
