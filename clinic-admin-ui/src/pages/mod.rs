//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod placeholder;

pub use dashboard::Dashboard;
pub use placeholder::Placeholder;
