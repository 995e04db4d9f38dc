use rayon::prelude::*;

use crate::input::record::CompanyRecord;
use crate::model::weights::WeightConfig;
use crate::pipeline::aggregate::aggregate;
use crate::pipeline::classify::{ClassifyContext, run_classifiers};
use crate::pipeline::rank::ScoredCompany;

/// Scores every record. Classifiers are pure functions of one record plus
/// the read-only context, so companies are evaluated in parallel; the
/// collect preserves input order, which the ranker's stable sort relies on
/// for tie-breaking.
pub fn run_scoring(
    records: Vec<CompanyRecord>,
    ctx: &ClassifyContext<'_>,
    weights: &WeightConfig,
) -> Vec<ScoredCompany> {
    records
        .into_par_iter()
        .map(|record| {
            let scores = run_classifiers(&record, ctx);
            let overall = aggregate(&scores, weights);
            ScoredCompany {
                record,
                scores,
                overall,
            }
        })
        .collect()
}
