//! Error types for the upstream timetable API.

use thiserror::Error;

/// Errors that can occur while talking to the timetable API.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Network/HTTP request failed
    #[error("Network error: {message}")]
    Network { message: String },

    /// The institution code does not route to any known base URL
    #[error("Unknown institution code: {code}")]
    UnknownInstitution { code: String },

    /// A stored schedule ref that cannot be decoded into an upstream request
    #[error("Unroutable schedule ref: {raw}")]
    UnroutableRef { raw: String },

    /// Server answered with something the client cannot interpret
    #[error("Unexpected response: {message}")]
    UnexpectedResponse { message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::UnexpectedResponse {
                message: err.to_string(),
            }
        } else {
            ApiError::Network {
                message: err.to_string(),
            }
        }
    }
}
