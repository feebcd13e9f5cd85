pub mod classifier;
pub mod normalize;
pub mod scorer;

pub use classifier::{KeywordClassifier, Maneuver, ManeuverClassifier};
pub use normalize::normalized_scores;
pub use scorer::{RiskReport, RiskScorer};
