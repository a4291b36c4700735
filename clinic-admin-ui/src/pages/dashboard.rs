//! Dashboard Page
//!
//! Greeting, appointment and doctor counts, and the appointment table with a
//! status selector per row.

use clinic_admin::dashboard::render::{visited_mark, EMPTY_PLACEHOLDER, GREETING, TABLE_HEADERS};
use clinic_admin::{Appointment, AppointmentStatus, DashboardState, LoadEvent};
use leptos::*;

use crate::api;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = create_rw_signal(DashboardState::new());

    // Two independent loads; each lands as soon as it resolves
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::fetch_appointments().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch appointments: {}", e).into());
            }
            dashboard.update(|d| d.apply(LoadEvent::Appointments(result)));
        });

        spawn_local(async move {
            let result = api::fetch_doctors().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch doctors: {}", e).into());
            }
            dashboard.update(|d| d.apply(LoadEvent::Doctors(result)));
        });
    });

    let on_status_change = Callback::new(move |(id, status): (String, AppointmentStatus)| {
        spawn_local(async move {
            let outcome = api::update_appointment_status(&id, status).await;
            if let Some(toast) = dashboard.try_update(|d| d.settle_status_update(&id, status, outcome)) {
                state.notify(toast);
            }
        });
    });

    let admin_name = move || state.current_session().display_name().unwrap_or_default();

    view! {
        <section class="space-y-8">
            // Banner
            <div class="grid md:grid-cols-4 gap-4">
                <div class="md:col-span-2 bg-white rounded-xl p-6 shadow">
                    <p class="text-gray-500">{GREETING}</p>
                    <h5 class="text-2xl font-semibold">{admin_name}</h5>
                    <p class="text-gray-500 mt-2 text-sm">
                        "This is your admin dashboard where you can manage user requests, \
                         review data, and oversee system operations."
                    </p>
                </div>

                <CountCard
                    label="Total Appointments"
                    count=Signal::derive(move || dashboard.with(|d| d.summary().total_appointments))
                />
                <CountCard
                    label="Registered Doctors"
                    count=Signal::derive(move || dashboard.with(|d| d.summary().registered_doctors))
                />
            </div>

            // Appointment table
            <div class="bg-white rounded-xl p-6 shadow">
                <h5 class="text-xl font-semibold mb-4">"All Appointments"</h5>
                <table class="w-full text-left">
                    <thead>
                        <tr>
                            {TABLE_HEADERS.iter().map(|h| view! { <th class="py-2">{*h}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let appointments = dashboard.with(|d| d.appointments.clone());
                            if appointments.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6">
                                            <h1 class="text-center text-gray-500 py-6">{EMPTY_PLACEHOLDER}</h1>
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                appointments.into_iter().map(|appointment| view! {
                                    <AppointmentRow appointment=appointment on_change=on_status_change />
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

/// Summary count card
#[component]
fn CountCard(
    label: &'static str,
    #[prop(into)]
    count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 shadow">
            <p class="text-gray-500">{label}</p>
            <h3 class="text-3xl font-bold">{move || count.get()}</h3>
        </div>
    }
}

/// One appointment with its status selector
#[component]
fn AppointmentRow(
    appointment: Appointment,
    on_change: Callback<(String, AppointmentStatus)>,
) -> impl IntoView {
    let id = appointment.id.clone();
    let current = appointment.status;
    let visited_class = if appointment.has_visited { "text-green-600" } else { "text-red-600" };

    view! {
        <tr class="border-t border-gray-200">
            <td class="py-2">{appointment.patient_name()}</td>
            <td>{appointment.date_display()}</td>
            <td>{appointment.doctor.full_name()}</td>
            <td>{appointment.department.clone()}</td>
            <td>
                <select
                    class=current.css_class()
                    prop:value=current.as_str()
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<AppointmentStatus>() {
                            Ok(status) => on_change.call((id.clone(), status)),
                            Err(e) => web_sys::console::warn_1(&e.to_string().into()),
                        }
                    }
                >
                    {AppointmentStatus::all().iter().map(|status| view! {
                        <option
                            value=status.as_str()
                            class=status.css_class()
                            selected={*status == current}
                        >
                            {status.as_str()}
                        </option>
                    }).collect_view()}
                </select>
            </td>
            <td class=visited_class>{visited_mark(&appointment)}</td>
        </tr>
    }
}
