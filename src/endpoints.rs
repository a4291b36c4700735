//! Backend origin and endpoint paths, shared by the native and browser clients.

/// Production backend origin
pub const DEFAULT_API_ORIGIN: &str = "https://medicare-r4rk.onrender.com";

/// Cookie the backend issues to logged-in admins
pub const DEFAULT_COOKIE_NAME: &str = "adminToken";

pub const CURRENT_ADMIN: &str = "/api/v1/user/admin/me";
pub const APPOINTMENTS: &str = "/api/v1/appointment/getall";
/// Spelled this way by the backend
pub const DOCTORS: &str = "/api/v1/user/docters";

/// Path for changing one appointment's status. `id` must already be
/// percent-encoded.
pub fn update_status(id: &str) -> String {
    format!("/api/v1/appointment/update/{}", id)
}

/// Join an origin and a path, tolerating a trailing slash on the origin
pub fn join(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}
