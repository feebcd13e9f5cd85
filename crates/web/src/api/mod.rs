use axum::{
    extract::State,
    routing::{get, on},
    Json, Router,
};
use serde::{Deserialize, Serialize};

pub mod autocomplete;
pub mod route;

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

pub fn routes(state: WebState) -> Router {
    let api = Router::new()
        .nest_service("/route", route::routes(state.clone()))
        .nest_service("/autocomplete", autocomplete::routes(state.clone()))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found));

    Router::new()
        .route("/", get(health))
        .nest_service("/api", api)
        .with_state(state)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct HealthDto {
    pub status: String,
    pub message: String,
}

/// Liveness probe. "unhealthy" means the process runs but cannot serve
/// routing requests because the API credential is missing.
async fn health(State(state): State<WebState>) -> Json<HealthDto> {
    let dto = if state.provider.is_some() {
        HealthDto {
            status: "healthy".to_owned(),
            message: "Route risk backend is live!".to_owned(),
        }
    } else {
        HealthDto {
            status: "unhealthy".to_owned(),
            message: "Route risk backend is live, but GOOGLE_MAPS_API_KEY is missing from server configuration!"
                .to_owned(),
        }
    };
    Json(dto)
}
