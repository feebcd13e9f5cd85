use axum::{
    extract::{OriginalUri, Request},
    http::StatusCode,
    response::IntoResponse,
    routing::MethodFilter,
    Json,
};
use google_maps::ApiError;
use itertools::Itertools;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

pub type RouteResult<O> = Result<O, ApiErrorResponse>;

/// A `MethodFilter` that matches all http methods.
pub(crate) const METHOD_FILTER_ALL: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE);

/// The client-facing failure shape: `{"error": ..., "status": ...}` plus an
/// http status code that is never serialized into the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub error: String,
    pub status: String,
}

impl ApiErrorResponse {
    pub fn new(
        status_code: StatusCode,
        status: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            error: error.into(),
            status: status.into(),
        }
    }

    pub fn server_config_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "SERVER_CONFIG_ERROR",
            "Server configuration error: API key missing.",
        )
    }

    pub fn params_error(missing: &[&str]) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "PARAMS_ERROR",
            format!("Missing required parameters: {}", missing.iter().join(", ")),
        )
    }

    pub fn value_error() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "VALUE_ERROR",
            "Coordinate values must be valid numbers.",
        )
    }

    pub fn params_unknown_error() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "PARAMS_UNKNOWN_ERROR",
            "Invalid request parameters.",
        )
    }

    pub fn no_routes_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "NO_ROUTES_FOUND_GOOGLE",
            "No routes found between the specified locations.",
        )
    }

    pub fn route_processing_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "ROUTE_PROCESSING_ERROR",
            "No routes could be processed from the directions response.",
        )
    }

    /// A non-OK verdict from the provider, echoed back unchanged.
    pub fn provider_status(status: String, message: Option<String>) -> Self {
        let error = message
            .unwrap_or_else(|| format!("Error from directions provider: {}", status));
        let status = if status.is_empty() {
            "GOOGLE_API_ERROR".to_owned()
        } else {
            status
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, status, error)
    }

    pub fn unknown_server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "UNKNOWN_SERVER_ERROR",
            "An unexpected server error occurred.",
        )
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::Request(why) => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "NETWORK_ERROR_GOOGLE_API",
                format!("Network error when fetching directions: {}", why),
            ),
            ApiError::Json(_) => Self::unknown_server_error(),
            ApiError::HttpStatus {
                status_code,
                status,
                message,
            } => Self::new(
                status_code,
                status.unwrap_or_else(|| "GOOGLE_HTTP_ERROR".to_owned()),
                message.unwrap_or_else(|| {
                    format!("Directions provider returned HTTP {}", status_code)
                }),
            ),
            ApiError::HttpStatusRaw { status_code, body } => {
                Self::new(status_code, "GOOGLE_HTTP_ERROR_NON_JSON", body)
            }
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> axum::response::Response {
        // Every failure crosses this boundary exactly once, so this is the
        // single server-side log site for request errors.
        if self.status_code.is_server_error() {
            log::error!("{} {}: {}", self.status_code, self.status, self.error);
        } else {
            log::warn!("{} {}: {}", self.status_code, self.status, self.error);
        }
        (self.status_code, Json(self)).into_response()
    }
}

pub(crate) async fn route_not_found(
    OriginalUri(original_uri): OriginalUri,
    req: Request,
) -> ApiErrorResponse {
    ApiErrorResponse::new(
        StatusCode::NOT_FOUND,
        "NOT_FOUND",
        format!("No handler for {} {}", req.method(), original_uri.path()),
    )
}

pub(crate) async fn schema_no_example<T: JsonSchema>() -> impl IntoResponse {
    Json(schema_for!(T))
}
