use std::sync::Arc;

use google_maps::{DirectionsClient, DirectionsProvider};
use web::{start_web_server, AppConfig, WebState};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = AppConfig::from_env();

    let provider: Option<Arc<dyn DirectionsProvider>> = match &config.credentials {
        Some(credentials) => match DirectionsClient::new(credentials.clone()) {
            Ok(client) => Some(Arc::new(client)),
            Err(why) => {
                log::error!("could not construct the directions client: {why}");
                None
            }
        },
        None => None,
    };

    let state = WebState {
        provider,
        blackspots: Arc::new(config.blackspots.clone()),
    };

    log::info!(
        "route risk backend listening on {} ({} blackspots loaded)",
        config.bind_addr,
        state.blackspots.len()
    );
    if let Err(why) = start_web_server(&config.bind_addr, state).await {
        log::error!("web server terminated: {why}");
    }
}
