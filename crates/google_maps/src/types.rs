use model::Coordinate;
use serde::{Deserialize, Serialize};

/// Top-level directions payload. `status` is the provider's own verdict and
/// is forwarded to clients verbatim when it is not "OK".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// One alternative route. Leg and step order is travel order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub overview_polyline: Option<Polyline>,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Polyline {
    #[serde(default)]
    pub points: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub duration_in_traffic: Option<TextValue>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub html_instructions: Option<String>,
    #[serde(default)]
    pub start_location: Option<LatLng>,
    #[serde(default)]
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub distance: Option<TextValue>,
}

/// The provider spells longitude `lng`; the domain model spells it `lon`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub value: i64,
}

/// Error body the provider attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        self.error_message.clone().or_else(|| self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTIONS_FIXTURE: &str = r#"{
        "status": "OK",
        "routes": [{
            "summary": "Avinashi Rd",
            "overview_polyline": {"points": "a~l~Fjk~uOwHJy@P"},
            "legs": [{
                "duration": {"text": "24 mins", "value": 1440},
                "distance": {"text": "12.4 km", "value": 12400},
                "duration_in_traffic": {"text": "31 mins", "value": 1860},
                "steps": [{
                    "html_instructions": "Turn <b>sharp left</b> onto Avinashi Rd",
                    "start_location": {"lat": 11.0180, "lng": 76.9691},
                    "duration": {"text": "1 min", "value": 45},
                    "distance": {"text": "0.2 km", "value": 200}
                }]
            }]
        }]
    }"#;

    #[test]
    fn directions_response_deserializes() {
        let response: DirectionsResponse =
            serde_json::from_str(DIRECTIONS_FIXTURE).expect("fixture should parse");
        assert_eq!(response.status, "OK");
        assert_eq!(response.routes.len(), 1);

        let route = &response.routes[0];
        assert_eq!(route.summary.as_deref(), Some("Avinashi Rd"));

        let leg = &route.legs[0];
        assert_eq!(
            leg.duration_in_traffic.as_ref().map(|d| d.value),
            Some(1860)
        );
        assert_eq!(leg.steps.len(), 1);

        let step = &leg.steps[0];
        let start = step.start_location.expect("step should carry a location");
        assert_eq!(start.coordinate(), Coordinate::new(11.0180, 76.9691));
    }

    #[test]
    fn sparse_payload_falls_back_to_defaults() {
        let response: DirectionsResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#)
                .expect("sparse payload should parse");
        assert_eq!(response.status, "ZERO_RESULTS");
        assert!(response.error_message.is_none());
        assert!(response.routes.is_empty());
    }

    #[test]
    fn error_body_prefers_error_message_field() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
        )
        .expect("error body should parse");
        assert_eq!(body.status.as_deref(), Some("REQUEST_DENIED"));
        assert_eq!(
            body.message().as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn error_body_falls_back_to_error_field() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "quota exceeded"}"#)
                .expect("error body should parse");
        assert!(body.status.is_none());
        assert_eq!(body.message().as_deref(), Some("quota exceeded"));
    }
}
