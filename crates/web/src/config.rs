use std::env;

use google_maps::GoogleApiCredentials;
use model::BlackspotTable;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Option<GoogleApiCredentials>,
    pub bind_addr: String,
    pub blackspots: BlackspotTable,
}

impl AppConfig {
    /// Load configuration from the process environment. A missing API key
    /// is reported loudly but does not abort startup: the health check
    /// stays reachable and reports the degraded state.
    pub fn from_env() -> Self {
        let credentials = GoogleApiCredentials::from_env();
        if credentials.is_none() {
            log::error!(
                "GOOGLE_MAPS_API_KEY is not set; every routing request will fail until it is configured"
            );
        }

        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_owned());

        let blackspots = match env::var("BLACKSPOTS_PATH") {
            Ok(path) => match BlackspotTable::from_file(&path) {
                Ok(table) => {
                    log::info!("loaded {} blackspots from '{}'", table.len(), path);
                    table
                }
                Err(why) => {
                    log::warn!(
                        "could not load blackspot table from '{}': {}; using the built-in table",
                        path,
                        why
                    );
                    BlackspotTable::builtin()
                }
            },
            Err(_) => BlackspotTable::builtin(),
        };

        Self {
            credentials,
            bind_addr,
            blackspots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn config_degrades_without_api_key() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::remove_var("GOOGLE_MAPS_API_KEY");
        env::remove_var("BIND_ADDR");
        env::remove_var("BLACKSPOTS_PATH");

        let config = AppConfig::from_env();
        assert!(config.credentials.is_none());
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.blackspots.len(), 8);
    }

    #[test]
    fn config_picks_up_key_and_bind_addr() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("GOOGLE_MAPS_API_KEY", "test-key");
        env::set_var("BIND_ADDR", "127.0.0.1:3000");

        let config = AppConfig::from_env();
        assert_eq!(
            config.credentials.map(|credentials| credentials.api_key),
            Some("test-key".to_owned())
        );
        assert_eq!(config.bind_addr, "127.0.0.1:3000");

        env::remove_var("GOOGLE_MAPS_API_KEY");
        env::remove_var("BIND_ADDR");
    }

    #[test]
    fn unreadable_blackspot_table_falls_back_to_builtin() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");

        env::set_var("BLACKSPOTS_PATH", "/nonexistent/blackspots.json");
        let config = AppConfig::from_env();
        assert_eq!(config.blackspots.len(), 8);

        env::remove_var("BLACKSPOTS_PATH");
    }
}
