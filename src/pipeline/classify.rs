use crate::input::investors::{InvestorSet, normalize};
use crate::input::record::CompanyRecord;
use crate::model::profile::{ScoringProfile, ladder_score};
use crate::model::scores::{ScoreKind, SubScoreSet};

/// Read-only configuration shared by every classifier.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyContext<'a> {
    pub profile: &'a ScoringProfile,
    pub top_investors: &'a InvestorSet,
}

/// Uniform classifier signature. Every classifier is total: missing or
/// malformed input resolves to the floor score (0), never to an error.
pub type Classifier = fn(&CompanyRecord, &ClassifyContext<'_>) -> u8;

/// The classifier registry, in output column order. Adding a classifier
/// means adding a `ScoreKind` and one entry here; aggregation and ranking
/// are untouched.
pub const REGISTRY: [(ScoreKind, Classifier); 10] = [
    (ScoreKind::Vc, score_investors),
    (ScoreKind::FundingValuation, score_valuation),
    (ScoreKind::Raised, score_raised),
    (ScoreKind::RecentFinancing, score_recent_financing),
    (ScoreKind::CompanyGrowth, score_growth),
    (ScoreKind::EmergingVerticals, score_sectors),
    (ScoreKind::HqCity, score_hq_city),
    (ScoreKind::FoundersGenders, score_founder_genders),
    (ScoreKind::FoundersIsSerial, score_founder_serial),
    (ScoreKind::FoundersCount, score_founder_count),
];

pub fn run_classifiers(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> SubScoreSet {
    let mut set = SubScoreSet::default();
    for (kind, classifier) in REGISTRY {
        set.set(kind, classifier(record, ctx));
    }
    set
}

/// Overlap with the reference investor set: two or more matches take the top
/// tier, exactly one the mid tier.
fn score_investors(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    let matches = record
        .investors
        .iter()
        .filter(|name| ctx.top_investors.contains(name))
        .count();
    match matches {
        0 => 0,
        1 => ctx.profile.investor_single_points,
        _ => ctx.profile.investor_top_points,
    }
}

fn score_valuation(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    match record.valuation {
        Some(v) => ladder_score(&ctx.profile.valuation_ladder, v),
        None => 0,
    }
}

fn score_raised(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    match record.raised {
        Some(v) => ladder_score(&ctx.profile.raised_ladder, v),
        None => 0,
    }
}

/// Points for a round inside the trailing recency window, plus a bonus when
/// that round cleared the large-round threshold.
fn score_recent_financing(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    let Some(date) = record.financing_date else {
        return 0;
    };
    let window_start = ctx.profile.as_of - chrono::Duration::days(ctx.profile.recency_window_days);
    if date <= window_start {
        return 0;
    }
    let mut points = ctx.profile.recency_points;
    if let Some(round) = record.last_round {
        if round > ctx.profile.large_round_threshold {
            points = points.saturating_add(ctx.profile.large_round_points);
        }
    }
    points
}

/// Growth ladder keyed on company age: younger companies are held to a
/// different curve than established ones. Undefined growth or a missing
/// launch year floors the score.
fn score_growth(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    let (Some(growth), Some(launch_year)) = (record.growth, record.launch_year) else {
        return 0;
    };
    let age = ctx.profile.reference_year - launch_year;
    let ladder = if age >= ctx.profile.young_company_cutoff_years {
        &ctx.profile.mature_growth_ladder
    } else {
        &ctx.profile.young_growth_ladder
    };
    ladder_score(ladder, growth)
}

/// Tag-field fit: with `any_tag_counts` set (the sheet's behavior) any
/// non-empty tag list earns the points, otherwise a tag must sit in the
/// configured keyword set.
fn score_sectors(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    if record.tags.is_empty() {
        return 0;
    }
    if ctx.profile.any_tag_counts {
        return ctx.profile.sector_points;
    }
    // Both sides are normalized so a profile override may carry any casing.
    let keyword_hit = record.tags.iter().any(|tag| {
        let tag = normalize(tag);
        ctx.profile.sector_keywords.iter().any(|k| normalize(k) == tag)
    });
    if keyword_hit { ctx.profile.sector_points } else { 0 }
}

/// Partial score for the secondary hubs, floor for the over-represented one,
/// full score everywhere else. A missing city floors.
fn score_hq_city(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    let city = normalize(&record.hq_city);
    if city.is_empty() || city == normalize(&ctx.profile.floor_hub_city) {
        return 0;
    }
    if ctx.profile.partial_hub_cities.iter().any(|h| normalize(h) == city) {
        return ctx.profile.partial_hub_points;
    }
    ctx.profile.other_city_points
}

fn score_founder_genders(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    let any_female = record
        .founder_genders
        .iter()
        .any(|g| g.trim().eq_ignore_ascii_case("female"));
    if any_female { ctx.profile.founder_points } else { 0 }
}

fn score_founder_serial(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    let any_serial = record
        .founder_serial
        .iter()
        .any(|s| s.trim().eq_ignore_ascii_case("yes"));
    if any_serial { ctx.profile.founder_points } else { 0 }
}

/// More than one named founder earns the points; a missing list is treated
/// as exactly one assumed founder.
fn score_founder_count(record: &CompanyRecord, ctx: &ClassifyContext<'_>) -> u8 {
    if record.founders.len() > 1 {
        ctx.profile.founder_points
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/classify.rs"]
mod tests;
