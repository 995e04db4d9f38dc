use std::cmp::Ordering;

use crate::input::record::CompanyRecord;
use crate::model::scores::SubScoreSet;

#[derive(Debug, Clone)]
pub struct ScoredCompany {
    pub record: CompanyRecord,
    pub scores: SubScoreSet,
    pub overall: f64,
}

/// One processing run's scored companies, best-first, plus cohort
/// statistics. `median`/`mean` are `None` for an empty cohort — the
/// explicit "insufficient data" condition, never NaN.
#[derive(Debug)]
pub struct Cohort {
    pub companies: Vec<ScoredCompany>,
    pub median: Option<f64>,
    pub mean: Option<f64>,
}

/// Sorts descending by overall score. The sort is stable, so companies with
/// equal scores keep their input order.
pub fn rank(mut companies: Vec<ScoredCompany>) -> Cohort {
    companies.sort_by(|a, b| {
        b.overall
            .partial_cmp(&a.overall)
            .unwrap_or(Ordering::Equal)
    });
    let overall: Vec<f64> = companies.iter().map(|c| c.overall).collect();
    Cohort {
        median: median(&overall),
        mean: mean(&overall),
        companies,
    }
}

/// Standard median: middle element, or the average of the two middle
/// elements for an even count.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/rank.rs"]
mod tests;
