//! Error taxonomy shared by every remote operation.

use thiserror::Error;

/// Failure of a content or session operation.
///
/// `Validation` is raised before any network traffic; the other three are
/// produced at the operation boundary from the HTTP outcome. `Auth` (a 401)
/// additionally requires the caller to tear down the local session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Required fields missing or malformed; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-2xx status other than 401.
    #[error("server error ({status}): {message}")]
    Remote {
        /// HTTP status code of the response.
        status: u16,
        /// Upstream message when the body carried one, status text otherwise.
        message: String,
    },

    /// The bearer token is missing, expired or rejected (401).
    #[error("authentication required")]
    Auth,

    /// The request never produced a response (offline, DNS, CORS...).
    #[error("network failure: {0}")]
    Network(String),
}

impl ApiError {
    /// True when the session must be invalidated and the user sent to login.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth)
    }
}
