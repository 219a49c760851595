//! Compile-time configuration for the frontend application.

/// Content API base URL. Production builds set `VALEAN_API_BASE` in the
/// release workflow; local development talks to the API dev server.
pub const API_BASE: &str = match option_env!("VALEAN_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};
