//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod protected;
pub mod sidebar;
pub mod toast;

pub use loading::Loading;
pub use protected::ProtectedRoute;
pub use sidebar::Sidebar;
pub use toast::Toast;
