use std::collections::HashMap;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::{get, on},
    Json, Router,
};
use google_maps::types::Route;
use model::{Coordinate, RouteSetResponse, ScoredRoute};
use risk::{normalized_scores, RiskReport, RiskScorer};

use crate::{
    common::{
        route_not_found, schema_no_example, ApiErrorResponse, RouteResult,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", get(get_route))
        .route("/schema", get(schema_no_example::<RouteSetResponse>))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

const REQUIRED_PARAMS: [&str; 4] =
    ["originLat", "originLng", "destinationLat", "destinationLng"];

/// Presence first (so the client learns every missing name at once), then
/// numeric validity. Any finite float passes; there is no |lat| <= 90 check.
fn parse_coordinates(
    params: &HashMap<String, String>,
) -> Result<(Coordinate, Coordinate), ApiErrorResponse> {
    let missing = REQUIRED_PARAMS
        .iter()
        .filter(|name| !params.contains_key(**name))
        .copied()
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(ApiErrorResponse::params_error(&missing));
    }

    let mut values = [0.0_f64; 4];
    for (slot, name) in values.iter_mut().zip(REQUIRED_PARAMS) {
        let parsed = params[name]
            .parse::<f64>()
            .map_err(|_| ApiErrorResponse::value_error())?;
        if !parsed.is_finite() {
            return Err(ApiErrorResponse::value_error());
        }
        *slot = parsed;
    }

    Ok((
        Coordinate::new(values[0], values[1]),
        Coordinate::new(values[2], values[3]),
    ))
}

async fn get_route(
    State(state): State<WebState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> RouteResult<Json<RouteSetResponse>> {
    let Some(provider) = state.provider.as_ref() else {
        return Err(ApiErrorResponse::server_config_error());
    };

    let Query(params) =
        params.map_err(|_| ApiErrorResponse::params_unknown_error())?;
    let (origin, destination) = parse_coordinates(&params)?;

    let response = provider
        .directions(origin, destination)
        .await
        .map_err(ApiErrorResponse::from)?;

    if response.status != "OK" {
        return Err(ApiErrorResponse::provider_status(
            response.status,
            response.error_message,
        ));
    }
    if response.routes.is_empty() {
        return Err(ApiErrorResponse::no_routes_found());
    }

    let scorer = RiskScorer::new(&state.blackspots);
    let reports = response
        .routes
        .iter()
        .map(|route| scorer.score(route))
        .collect::<Vec<_>>();
    let raw_scores = reports
        .iter()
        .map(|report| report.raw_score)
        .collect::<Vec<_>>();
    let risk_scores = normalized_scores(&raw_scores);

    let routes = response
        .routes
        .iter()
        .zip(reports)
        .zip(risk_scores)
        .map(|((route, report), risk_score)| scored_route(route, report, risk_score))
        .collect::<Vec<_>>();

    // Scoring cannot reject a route today, so this only fires if that ever
    // changes.
    if routes.is_empty() {
        return Err(ApiErrorResponse::route_processing_error());
    }

    Ok(Json(RouteSetResponse::ok(routes)))
}

fn scored_route(route: &Route, report: RiskReport, risk_score: f64) -> ScoredRoute {
    let first_leg = route.legs.first();
    ScoredRoute {
        polyline: route
            .overview_polyline
            .as_ref()
            .and_then(|polyline| polyline.points.clone()),
        risk_score,
        hazards_coordinates: report.hazard_coordinates,
        reasons: report.reasons.into_iter().collect(),
        summary: route.summary.clone().unwrap_or_else(|| "N/A".to_owned()),
        duration_text: first_leg
            .and_then(|leg| leg.duration.as_ref())
            .and_then(|duration| duration.text.clone())
            .unwrap_or_else(|| "N/A".to_owned()),
        distance_text: first_leg
            .and_then(|leg| leg.distance.as_ref())
            .and_then(|distance| distance.text.clone())
            .unwrap_or_else(|| "N/A".to_owned()),
    }
}
