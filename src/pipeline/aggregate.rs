use crate::model::scores::{ScoreKind, SubScoreSet};
use crate::model::weights::WeightConfig;

/// Weighted sum over the keys of the weight configuration. A key naming a
/// sub-score that was never computed contributes 0, so partial scoring
/// coverage is tolerated rather than fatal.
pub fn aggregate(scores: &SubScoreSet, weights: &WeightConfig) -> f64 {
    weights
        .iter()
        .map(|(label, weight)| {
            let value = ScoreKind::from_label(label)
                .map(|kind| scores.get(kind))
                .unwrap_or(0);
            f64::from(value) * weight
        })
        .sum()
}
