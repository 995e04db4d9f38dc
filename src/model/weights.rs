use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::scores::ScoreKind;

/// Per-run sub-score weights, keyed by score column label.
///
/// Supplied by the operator before each run; weights live in [0, 1] and need
/// not sum to 1. Keys that name no known sub-score are tolerated (the matching
/// sub-score is simply treated as 0 by the aggregator).
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct WeightConfig {
    entries: BTreeMap<String, f64>,
}

impl WeightConfig {
    pub fn new(entries: BTreeMap<String, f64>) -> Self {
        Self { entries }
    }

    /// Slider defaults of the interactive surface.
    pub fn default_v1() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(ScoreKind::Vc.label().to_string(), 0.15);
        entries.insert(ScoreKind::FundingValuation.label().to_string(), 0.30);
        entries.insert(ScoreKind::Raised.label().to_string(), 0.20);
        entries.insert(ScoreKind::RecentFinancing.label().to_string(), 0.10);
        entries.insert(ScoreKind::CompanyGrowth.label().to_string(), 0.10);
        entries.insert(ScoreKind::EmergingVerticals.label().to_string(), 0.10);
        entries.insert(ScoreKind::HqCity.label().to_string(), 0.10);
        entries.insert(ScoreKind::FoundersGenders.label().to_string(), 0.10);
        entries.insert(ScoreKind::FoundersIsSerial.label().to_string(), 0.10);
        entries.insert(ScoreKind::FoundersCount.label().to_string(), 0.10);
        Self { entries }
    }

    /// Clamps every weight into [0, 1], reporting how many were out of range.
    pub fn clamp(&mut self) -> usize {
        let mut clamped = 0usize;
        for value in self.entries.values_mut() {
            if *value < 0.0 || *value > 1.0 || value.is_nan() {
                *value = value.clamp(0.0, 1.0);
                if value.is_nan() {
                    *value = 0.0;
                }
                clamped += 1;
            }
        }
        clamped
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries.get(label).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
