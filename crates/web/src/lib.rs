use std::sync::Arc;

use google_maps::DirectionsProvider;
use model::BlackspotTable;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub mod api;
pub mod common;
pub mod config;

pub use config::AppConfig;

#[derive(Clone)]
pub struct WebState {
    /// `None` when the API credential is missing; routing requests then
    /// degrade to a server-configuration error while the health check
    /// reports "unhealthy".
    pub provider: Option<Arc<dyn DirectionsProvider>>,
    pub blackspots: Arc<BlackspotTable>,
}

pub async fn start_web_server(bind_addr: &str, state: WebState) -> std::io::Result<()> {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let routes = api::routes(state).layer(cors);

    let listener = TcpListener::bind(bind_addr).await?;
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}
