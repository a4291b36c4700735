//! App Root Component
//!
//! Main application component with routing, global providers and the
//! one-time session probe.

use clinic_admin::routes::Route as Screen;
use clinic_admin::Session;
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{ProtectedRoute, Sidebar, Toast};
use crate::pages::{Dashboard, Placeholder};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();

    // Ask the backend who we are, once per page load
    spawn_local(async move {
        let outcome = api::fetch_current_admin().await;
        state.resolve_session(Session::from_probe(outcome));
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 flex">
                <Sidebar />

                <main class="flex-1 px-8 py-8">
                    <Routes>
                        <Route
                            path="/"
                            view=|| view! {
                                <ProtectedRoute screen=Screen::Dashboard>
                                    <Dashboard />
                                </ProtectedRoute>
                            }
                        />
                        <Route path="/login" view=|| view! { <Placeholder screen=Screen::Login /> } />
                        <Route path="/doctor/addnew" view=|| view! { <Placeholder screen=Screen::AddNewDoctor /> } />
                        <Route path="/admin/addnew" view=|| view! { <Placeholder screen=Screen::AddNewAdmin /> } />
                        <Route path="/messages" view=|| view! { <Placeholder screen=Screen::Messages /> } />
                        <Route path="/doctors" view=|| view! { <Placeholder screen=Screen::Doctors /> } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
