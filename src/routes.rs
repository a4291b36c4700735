//! Routes and Route Guard
//!
//! Maps paths to screens and decides, from the current session alone,
//! whether a screen may be shown or the user must be sent to login.

use serde::Serialize;
use std::fmt;

use crate::session::Session;

/// Every screen the dashboard knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Dashboard,
    Login,
    AddNewDoctor,
    AddNewAdmin,
    Messages,
    Doctors,
    NotFound,
}

impl Route {
    /// All routes with a fixed path, in sidebar order
    pub fn all() -> &'static [Route] {
        &[
            Route::Dashboard,
            Route::Doctors,
            Route::AddNewDoctor,
            Route::AddNewAdmin,
            Route::Messages,
            Route::Login,
        ]
    }

    /// Resolve a path. Unknown paths fall through to `NotFound`.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Dashboard,
            "/login" => Route::Login,
            "/doctor/addnew" => Route::AddNewDoctor,
            "/admin/addnew" => Route::AddNewAdmin,
            "/messages" => Route::Messages,
            "/doctors" => Route::Doctors,
            _ => Route::NotFound,
        }
    }

    /// Canonical path; `NotFound` has none and reports the fallback pattern
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Login => "/login",
            Route::AddNewDoctor => "/doctor/addnew",
            Route::AddNewAdmin => "/admin/addnew",
            Route::Messages => "/messages",
            Route::Doctors => "/doctors",
            Route::NotFound => "*",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Login => "Login",
            Route::AddNewDoctor => "Add New Doctor",
            Route::AddNewAdmin => "Add New Admin",
            Route::Messages => "Messages",
            Route::Doctors => "Doctors",
            Route::NotFound => "Not Found",
        }
    }

    /// Whether the route requires an authenticated admin
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.path())
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Access {
    /// Render this route
    Allowed(Route),
    /// Send the user elsewhere instead
    Denied { redirect: Route },
}

impl Access {
    /// The route that ends up on screen
    pub fn target(&self) -> Route {
        match self {
            Access::Allowed(route) => *route,
            Access::Denied { redirect } => *redirect,
        }
    }
}

/// Check a route against the current session. No I/O.
pub fn guard(route: Route, session: &Session) -> Access {
    if route.is_protected() && !session.is_authenticated {
        Access::Denied {
            redirect: Route::Login,
        }
    } else {
        Access::Allowed(route)
    }
}

/// Resolve a path and guard it in one step
pub fn navigate(path: &str, session: &Session) -> Access {
    guard(Route::from_path(path), session)
}
