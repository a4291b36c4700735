//! Clinic Admin Dashboard
//!
//! Admin dashboard for the clinic appointment system, built with Leptos (WASM).
//!
//! # Features
//!
//! - Session check against the clinic backend on startup
//! - Protected dashboard with appointment and doctor counts
//! - Per-appointment status changes with toast feedback
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the clinic backend over HTTP with cookie
//! credentials. Session, routing and dashboard rules come from the
//! `clinic-admin` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
