use std::collections::HashSet;

use google_maps::types::{Route, Step};
use indexmap::IndexSet;
use model::{BlackspotTable, Coordinate};

use crate::classifier::{KeywordClassifier, Maneuver, ManeuverClassifier};

pub const TRAFFIC_SCORE_PER_MINUTE: i64 = 1;
pub const HAZARDOUS_STEP_SCORE: i64 = 100;
pub const BLACKSPOT_SCORE: i64 = 200;

/// Raw scores above this with no maneuver or blackspot contribution are
/// attributed to extended traffic duration. Tunable; the value has no
/// documented derivation.
pub const TRAFFIC_ONLY_RISK_THRESHOLD: i64 = 700;

/// The scorer's verdict on a single route. `reasons` is deduplicated;
/// `hazard_coordinates` keeps one entry per hazardous step, duplicates
/// included.
#[derive(Debug, Clone, Default)]
pub struct RiskReport {
    pub raw_score: i64,
    pub hazard_coordinates: Vec<Coordinate>,
    pub reasons: IndexSet<String>,
}

/// State threaded through one route's scan. Holding the per-route
/// bookkeeping here keeps the scorer itself a pure function of
/// (route, blackspot table, classifier).
#[derive(Debug, Default)]
struct RiskAccumulator {
    score: i64,
    sharp_turns: usize,
    other_maneuvers: usize,
    blackspot_hits: usize,
    hazard_coordinates: Vec<Coordinate>,
    reasons: IndexSet<String>,
    credited_blackspots: HashSet<usize>,
}

impl RiskAccumulator {
    fn reason(&mut self, reason: String) {
        self.reasons.insert(reason);
    }

    fn into_report(self) -> RiskReport {
        RiskReport {
            raw_score: self.score,
            hazard_coordinates: self.hazard_coordinates,
            reasons: self.reasons,
        }
    }
}

pub struct RiskScorer<'a> {
    blackspots: &'a BlackspotTable,
    classifier: Box<dyn ManeuverClassifier>,
}

impl<'a> RiskScorer<'a> {
    pub fn new(blackspots: &'a BlackspotTable) -> Self {
        Self::with_classifier(blackspots, Box::new(KeywordClassifier))
    }

    pub fn with_classifier(
        blackspots: &'a BlackspotTable,
        classifier: Box<dyn ManeuverClassifier>,
    ) -> Self {
        Self {
            blackspots,
            classifier,
        }
    }

    /// Score one route candidate. Never fails: missing fields count as
    /// "no contribution".
    pub fn score(&self, route: &Route) -> RiskReport {
        let mut acc = RiskAccumulator::default();
        self.traffic_component(route, &mut acc);
        self.maneuver_scan(route, &mut acc);
        self.blackspot_scan(route, &mut acc);
        self.fallback_reasons(&mut acc);
        acc.into_report()
    }

    fn traffic_component(&self, route: &Route, acc: &mut RiskAccumulator) {
        let seconds = route
            .legs
            .first()
            .and_then(|leg| leg.duration_in_traffic.as_ref())
            .map(|duration| duration.value)
            .unwrap_or(0);
        if seconds > 0 {
            let minutes = seconds / 60;
            acc.score += minutes * TRAFFIC_SCORE_PER_MINUTE;
            acc.reason(format!("Potential traffic delay: {} minutes", minutes));
        }
    }

    fn maneuver_scan(&self, route: &Route, acc: &mut RiskAccumulator) {
        for step in steps_in_order(route) {
            let Some(instruction) = step.html_instructions.as_deref() else {
                continue;
            };
            match self.classifier.classify(instruction) {
                Some(Maneuver::SharpTurn) => {
                    acc.sharp_turns += 1;
                    hazardous_step(step, acc);
                }
                Some(Maneuver::Other) => {
                    acc.other_maneuvers += 1;
                    hazardous_step(step, acc);
                }
                None => {}
            }
        }

        if acc.sharp_turns > 0 {
            acc.reason(format!(
                "Route includes {} sharp turn(s)",
                acc.sharp_turns
            ));
        }
        if acc.other_maneuvers > 0 {
            acc.reason(format!(
                "Route includes {} other potentially hazardous maneuver(s) (e.g., roundabouts, merges)",
                acc.other_maneuvers
            ));
        }
    }

    fn blackspot_scan(&self, route: &Route, acc: &mut RiskAccumulator) {
        for step in steps_in_order(route) {
            let Some(location) = step.start_location else {
                continue;
            };
            let coordinate = location.coordinate();
            for (index, blackspot) in self.blackspots.iter().enumerate() {
                if acc.credited_blackspots.contains(&index) {
                    continue;
                }
                if within_radius(
                    &coordinate,
                    &blackspot.coordinate(),
                    self.blackspots.radius_meters,
                ) {
                    acc.score += BLACKSPOT_SCORE;
                    acc.blackspot_hits += 1;
                    acc.reason(format!(
                        "Passes near known accident blackspot: {}",
                        blackspot.name
                    ));
                    acc.credited_blackspots.insert(index);
                }
            }
        }
    }

    fn fallback_reasons(&self, acc: &mut RiskAccumulator) {
        let no_hazard_hits = acc.sharp_turns == 0
            && acc.other_maneuvers == 0
            && acc.blackspot_hits == 0;
        if acc.score > TRAFFIC_ONLY_RISK_THRESHOLD && no_hazard_hits {
            acc.reason(
                "Route identified as higher risk potentially due to factors like extended traffic duration."
                    .to_owned(),
            );
        } else if acc.score == 0 && acc.reasons.is_empty() {
            acc.reason(
                "Standard route profile based on available data. Always drive safely."
                    .to_owned(),
            );
        }
    }
}

fn steps_in_order(route: &Route) -> impl Iterator<Item = &Step> {
    route.legs.iter().flat_map(|leg| leg.steps.iter())
}

fn hazardous_step(step: &Step, acc: &mut RiskAccumulator) {
    acc.score += HAZARDOUS_STEP_SCORE;
    if let Some(location) = step.start_location {
        acc.hazard_coordinates.push(location.coordinate());
    }
}

/// A non-finite distance (bad input coordinates) counts as out of range.
fn within_radius(a: &Coordinate, b: &Coordinate, radius_meters: f64) -> bool {
    let distance = a.distance_meters_to(b);
    distance.is_finite() && distance <= radius_meters
}
