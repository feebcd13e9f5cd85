use std::error;
use std::fmt;
use std::sync::Arc;

pub mod client;
pub mod types;

pub use client::{DirectionsClient, DirectionsProvider, GoogleApiCredentials};

pub const DIRECTIONS_API_URL: &str =
    "https://maps.googleapis.com/maps/api/directions/json";

#[derive(Debug, Clone)]
pub enum ApiError {
    /// Transport-level failure: timeout, DNS, connection refused.
    Request(Arc<reqwest::Error>),
    /// A 2xx response whose body did not decode as a directions payload.
    Json(Arc<serde_json::Error>),
    /// Non-2xx response carrying the provider's structured error body.
    HttpStatus {
        status_code: reqwest::StatusCode,
        status: Option<String>,
        message: Option<String>,
    },
    /// Non-2xx response whose body was not parseable as JSON.
    HttpStatusRaw {
        status_code: reqwest::StatusCode,
        body: String,
    },
}

impl error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "HTTP request error: {}", e),
            ApiError::Json(e) => write!(f, "JSON parse error: {}", e),
            ApiError::HttpStatus {
                status_code,
                status,
                message,
            } => match (status, message) {
                (Some(status), Some(message)) => {
                    write!(f, "Invalid response ({}) {}: {}", status_code, status, message)
                }
                (Some(status), None) => {
                    write!(f, "Invalid response ({}) {}", status_code, status)
                }
                _ => write!(f, "Invalid response ({})", status_code),
            },
            ApiError::HttpStatusRaw { status_code, body } => {
                write!(f, "Invalid response ({}): {}", status_code, body)
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(Arc::new(e))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Json(Arc::new(e))
    }
}
