//! Screens served by other parts of the admin app (login, doctor and admin
//! forms, messages, doctor list). Each shows only its title here.

use clinic_admin::routes::Route as Screen;
use leptos::*;

#[component]
pub fn Placeholder(screen: Screen) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl p-6 shadow">
            <h1 class="text-2xl font-semibold">{screen.title()}</h1>
            <p class="text-gray-500 mt-2 text-sm">{screen.path()}</p>
        </section>
    }
}
