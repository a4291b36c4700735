//! Text rendering of the dashboard for the terminal console.

use std::fmt::Write;

use super::state::DashboardState;
use crate::types::{AdminUser, Appointment};

pub const TABLE_HEADERS: [&str; 6] = ["Patient", "Date", "Doctor", "Department", "Status", "Visited"];

pub const EMPTY_PLACEHOLDER: &str = "No Appointments";

pub const GREETING: &str = "Hello,";

/// Greeting lines: "Hello," then the admin's full name
pub fn greeting(user: Option<&AdminUser>) -> (String, String) {
    (
        GREETING.to_string(),
        user.map(AdminUser::full_name).unwrap_or_default(),
    )
}

/// Mark shown in the "Visited" column
pub fn visited_mark(appointment: &Appointment) -> &'static str {
    if appointment.has_visited {
        "✓"
    } else {
        "✕"
    }
}

/// Render the whole dashboard as plain text
pub fn render_dashboard(user: Option<&AdminUser>, state: &DashboardState) -> String {
    let mut out = String::new();
    let (hello, name) = greeting(user);
    let summary = state.summary();

    let _ = writeln!(out, "{}", hello);
    let _ = writeln!(out, "{}", name);
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Appointments: {}", summary.total_appointments);
    let _ = writeln!(out, "Registered Doctors: {}", summary.registered_doctors);
    let _ = writeln!(out);
    let _ = writeln!(out, "All Appointments");
    out.push_str(&render_table(state));
    out
}

/// Render the appointment table
pub fn render_table(state: &DashboardState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:<18} {:<24} {:<16} {:<10} {}",
        TABLE_HEADERS[0],
        TABLE_HEADERS[1],
        TABLE_HEADERS[2],
        TABLE_HEADERS[3],
        TABLE_HEADERS[4],
        TABLE_HEADERS[5]
    );
    let _ = writeln!(out, "{}", "-".repeat(102));

    if state.appointments.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_PLACEHOLDER);
        return out;
    }

    for appointment in &state.appointments {
        let _ = writeln!(
            out,
            "{:<24} {:<18} {:<24} {:<16} {:<10} {}",
            appointment.patient_name(),
            appointment.date_display(),
            appointment.doctor.full_name(),
            appointment.department,
            appointment.status,
            visited_mark(appointment)
        );
    }
    out
}
