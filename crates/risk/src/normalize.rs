pub const RISK_SCORE_FLOOR: f64 = 0.05;
pub const RISK_SCORE_SPAN: f64 = 0.95;

/// Min-max normalize one response's raw scores into [0.05, 1.0]. With no
/// variance (including a single route) every score collapses to the floor,
/// so a displayed risk is never exactly zero. Scores are only comparable
/// within the route set they were normalized against.
pub fn normalized_scores(raw_scores: &[i64]) -> Vec<f64> {
    let Some(lo) = raw_scores.iter().copied().min() else {
        return Vec::new();
    };
    let hi = raw_scores.iter().copied().max().unwrap_or(lo);

    raw_scores
        .iter()
        .map(|&raw| {
            let norm = if hi > lo {
                (raw - lo) as f64 / (hi - lo) as f64
            } else {
                0.0
            };
            (RISK_SCORE_FLOOR + norm * RISK_SCORE_SPAN).clamp(RISK_SCORE_FLOOR, 1.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalized_scores(&[]).is_empty());
    }

    #[test]
    fn single_route_is_exactly_the_floor() {
        assert_eq!(normalized_scores(&[10]), vec![0.05]);
        assert_eq!(normalized_scores(&[0]), vec![0.05]);
        assert_eq!(normalized_scores(&[100_000]), vec![0.05]);
    }

    #[test]
    fn equal_scores_all_collapse_to_the_floor() {
        assert_eq!(normalized_scores(&[42, 42, 42]), vec![0.05, 0.05, 0.05]);
    }

    #[test]
    fn extremes_map_to_floor_and_ceiling_exactly() {
        let scores = normalized_scores(&[10, 500]);
        assert_eq!(scores[0], 0.05);
        assert_eq!(scores[1], 1.0);
    }

    #[test]
    fn intermediate_scores_preserve_ordering() {
        let scores = normalized_scores(&[0, 50, 100]);
        assert_eq!(scores[0], 0.05);
        assert!((scores[1] - 0.525).abs() < 1e-12);
        assert_eq!(scores[2], 1.0);
    }

    #[test]
    fn all_scores_stay_within_bounds() {
        let scores = normalized_scores(&[3, 700, 12, 0, 950, 950]);
        for score in scores {
            assert!((0.05..=1.0).contains(&score), "got {score}");
        }
    }
}
