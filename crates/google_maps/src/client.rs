use std::env;
use std::time::Duration;

use async_trait::async_trait;
use model::Coordinate;

use crate::types::{DirectionsResponse, ErrorBody};
use crate::{ApiError, DIRECTIONS_API_URL};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct GoogleApiCredentials {
    pub api_key: String,
}

impl GoogleApiCredentials {
    /// Read the API key from the environment. Returns `None` when unset or
    /// empty so callers can degrade instead of aborting startup.
    pub fn from_env() -> Option<Self> {
        env::var("GOOGLE_MAPS_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|api_key| Self { api_key })
    }
}

/// The one outbound dependency: fetch candidate routes between two points.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, ApiError>;
}

pub struct DirectionsClient {
    credentials: GoogleApiCredentials,
    client: reqwest::Client,
}

impl DirectionsClient {
    pub fn new(credentials: GoogleApiCredentials) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            credentials,
            client,
        })
    }
}

#[async_trait]
impl DirectionsProvider for DirectionsClient {
    async fn directions(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, ApiError> {
        let params = [
            ("origin", format!("{},{}", origin.lat, origin.lon)),
            ("destination", format!("{},{}", destination.lat, destination.lon)),
            ("key", self.credentials.api_key.clone()),
            ("alternatives", "true".to_owned()),
            ("departure_time", "now".to_owned()),
        ];

        // The key is a query parameter, so the URL must never be logged.
        log::debug!(
            "requesting directions {},{} -> {},{}",
            origin.lat,
            origin.lon,
            destination.lat,
            destination.lon
        );

        let response = self
            .client
            .get(DIRECTIONS_API_URL)
            .query(&params)
            .send()
            .await?;

        let status_code = response.status();
        if status_code.is_success() {
            let text = response.text().await?;
            return Ok(serde_json::from_str(&text)?);
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => {
                log::error!(
                    "directions provider returned {}: {:?}",
                    status_code,
                    parsed.status
                );
                let message = parsed.message();
                Err(ApiError::HttpStatus {
                    status_code,
                    status: parsed.status,
                    message,
                })
            }
            Err(_) => {
                log::error!(
                    "directions provider returned {} with a non-JSON body",
                    status_code
                );
                Err(ApiError::HttpStatusRaw { status_code, body })
            }
        }
    }
}
