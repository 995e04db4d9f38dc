use chrono::NaiveDate;
use serde::Deserialize;

/// One rung of a piecewise-threshold ladder. Rungs are evaluated top-down;
/// the first matching rung wins, otherwise the ladder scores 0.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Rung {
    pub min: f64,
    pub score: u8,
    /// `true` for a `>=` comparison, `false` for strict `>`.
    #[serde(default)]
    pub inclusive: bool,
}

impl Rung {
    pub const fn at_least(min: f64, score: u8) -> Self {
        Rung {
            min,
            score,
            inclusive: true,
        }
    }

    pub const fn above(min: f64, score: u8) -> Self {
        Rung {
            min,
            score,
            inclusive: false,
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        if self.inclusive {
            value >= self.min
        } else {
            value > self.min
        }
    }
}

pub fn ladder_score(ladder: &[Rung], value: f64) -> u8 {
    ladder
        .iter()
        .find(|rung| rung.matches(value))
        .map(|rung| rung.score)
        .unwrap_or(0)
}

/// Every constant of the scoring model that varied between iterations of the
/// sheet: ladder thresholds, keyword lists, hub cities, recency bonuses and
/// the temporal anchors. `default_v1()` matches the latest sheet; a JSON
/// profile file may override any subset of fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    /// Valuation ladder, over EUR millions. Ranges are reduced to their
    /// midpoint before classification.
    pub valuation_ladder: Vec<Rung>,
    /// Total-raised ladder, over EUR millions.
    pub raised_ladder: Vec<Rung>,

    /// Points for >= 2 reference-investor matches.
    pub investor_top_points: u8,
    /// Points for exactly one match.
    pub investor_single_points: u8,

    /// Trailing window for the financing-recency bonus, in days.
    pub recency_window_days: i64,
    pub recency_points: u8,
    /// Extra points when the most recent round exceeds this size (EUR M).
    pub large_round_threshold: f64,
    pub large_round_points: u8,
    /// strftime format of the financing-date column.
    pub date_format: String,
    /// As-of date the recency window trails from.
    pub as_of: NaiveDate,

    /// Processing year used by the growth window and company age.
    pub reference_year: i32,
    /// Companies younger than this many years use the young growth ladder.
    pub young_company_cutoff_years: i32,
    pub mature_growth_ladder: Vec<Rung>,
    pub young_growth_ladder: Vec<Rung>,

    /// Sector keywords, matched case- and whitespace-insensitively.
    pub sector_keywords: Vec<String>,
    pub sector_points: u8,
    /// When set, any non-empty tag list scores; the keyword set only
    /// constrains scoring when this is off.
    pub any_tag_counts: bool,

    /// Hub cities that earn only the partial score.
    pub partial_hub_cities: Vec<String>,
    pub partial_hub_points: u8,
    /// The one over-represented hub that scores the floor.
    pub floor_hub_city: String,
    pub other_city_points: u8,

    pub founder_points: u8,

    /// Anchor year for the positional employee-history grammar.
    pub history_start_year: i32,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            valuation_ladder: vec![
                Rung::at_least(1000.0, 10),
                Rung::at_least(500.0, 9),
                Rung::at_least(400.0, 8),
                Rung::above(300.0, 5),
                Rung::above(200.0, 4),
                Rung::above(100.0, 3),
            ],
            raised_ladder: vec![
                Rung::at_least(100.0, 10),
                Rung::above(90.0, 8),
                Rung::above(80.0, 7),
                Rung::above(50.0, 6),
                Rung::above(30.0, 5),
                Rung::at_least(10.0, 4),
            ],
            investor_top_points: 10,
            investor_single_points: 8,
            recency_window_days: 365,
            recency_points: 5,
            large_round_threshold: 20.0,
            large_round_points: 5,
            date_format: "%Y-%m-%d".to_string(),
            as_of: NaiveDate::from_ymd_opt(2024, 11, 18).unwrap_or_default(),
            reference_year: 2024,
            young_company_cutoff_years: 4,
            mature_growth_ladder: vec![
                Rung::at_least(1000.0, 10),
                Rung::above(900.0, 9),
                Rung::above(800.0, 8),
                Rung::above(700.0, 7),
                Rung::above(600.0, 6),
                Rung::above(500.0, 5),
                Rung::above(400.0, 4),
                Rung::above(300.0, 3),
                Rung::above(0.0, 1),
            ],
            young_growth_ladder: vec![
                Rung::above(200.0, 10),
                Rung::above(100.0, 6),
                Rung::above(50.0, 3),
            ],
            sector_keywords: default_sector_keywords(),
            sector_points: 10,
            any_tag_counts: true,
            partial_hub_cities: vec!["oxford".to_string(), "cambridge".to_string()],
            partial_hub_points: 5,
            floor_hub_city: "london".to_string(),
            other_city_points: 10,
            founder_points: 10,
            history_start_year: 2016,
        }
    }
}

fn default_sector_keywords() -> Vec<String> {
    [
        "artificial intelligence & machine learning",
        "robotics & drones",
        "cybersecurity",
        "space technology",
        "life sciences",
        "health",
        "nanotechnology",
        "quantum computing",
        "semiconductors",
        "energy",
        "security",
        "robotics",
        "autonomous & sensor tech",
        "hardware",
        "cloud & infrastructure",
        "big data",
        "deep tech",
        "quantum technologies",
        "biotechnology",
        "autonomous cars",
        "space",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
