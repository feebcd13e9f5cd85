use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// One route candidate as presented to the client: the provider's geometry
/// and timing, annotated with the normalized risk score and the evidence it
/// was derived from. The raw score is deliberately absent.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoredRoute {
    pub polyline: Option<String>,
    pub risk_score: f64,
    pub hazards_coordinates: Vec<Coordinate>,
    pub reasons: Vec<String>,
    pub summary: String,
    pub duration_text: String,
    pub distance_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RouteSetResponse {
    pub status: String,
    pub routes: Vec<ScoredRoute>,
}

impl RouteSetResponse {
    pub fn ok(routes: Vec<ScoredRoute>) -> Self {
        Self {
            status: "OK".to_owned(),
            routes,
        }
    }
}
