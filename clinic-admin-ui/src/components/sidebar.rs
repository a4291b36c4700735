//! Sidebar Component
//!
//! Static navigation links for every admin screen.

use clinic_admin::routes::Route as Screen;
use leptos::*;
use leptos_router::*;

/// Navigation sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="w-56 min-h-screen bg-gray-900 text-gray-100 flex flex-col py-6">
            <A href="/" class="px-6 mb-8 text-xl font-bold">"Clinic Admin"</A>

            <div class="flex flex-col space-y-1 px-3">
                {Screen::all().iter().map(|screen| view! {
                    <SidebarLink href=screen.path() label=screen.title() />
                }).collect_view()}
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn SidebarLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
            exact=true
        >
            {label}
        </A>
    }
}
