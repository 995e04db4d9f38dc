use super::*;
use crate::model::scores::SCORE_ORDER;

const IDX: crate::input::record::ColumnIndex = crate::input::record::ColumnIndex {
    all_investors: 0,
    past_investors: None,
    valuation: 1,
    raised: 2,
    last_round: Some(3),
    date: 4,
    tags: 5,
    launch_year: 6,
    hq_city: 7,
    founders_genders: 8,
    founders_is_serial: 9,
    founders: 10,
    employees: 11,
};

#[derive(Default)]
struct Row {
    investors: &'static str,
    valuation: &'static str,
    raised: &'static str,
    last_round: &'static str,
    date: &'static str,
    tags: &'static str,
    launch_year: &'static str,
    hq_city: &'static str,
    genders: &'static str,
    serial: &'static str,
    founders: &'static str,
    employees: &'static str,
}

fn record(row: Row, profile: &ScoringProfile) -> CompanyRecord {
    let cells = vec![
        row.investors.to_string(),
        row.valuation.to_string(),
        row.raised.to_string(),
        row.last_round.to_string(),
        row.date.to_string(),
        row.tags.to_string(),
        row.launch_year.to_string(),
        row.hq_city.to_string(),
        row.genders.to_string(),
        row.serial.to_string(),
        row.founders.to_string(),
        row.employees.to_string(),
    ];
    CompanyRecord::from_row(cells, &IDX, profile)
}

fn ctx<'a>(profile: &'a ScoringProfile, investors: &'a InvestorSet) -> ClassifyContext<'a> {
    ClassifyContext {
        profile,
        top_investors: investors,
    }
}

#[test]
fn test_investor_tiers() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::from_names(["Top Capital", "Future Fund"]);

    let one = record(
        Row {
            investors: "Acme Ventures, Top Capital",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_investors(&one, &ctx(&profile, &top)), 8);

    let two = record(
        Row {
            investors: "Top Capital, future  fund",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_investors(&two, &ctx(&profile, &top)), 10);

    let none = record(
        Row {
            investors: "Acme Ventures",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_investors(&none, &ctx(&profile, &top)), 0);
}

#[test]
fn test_valuation_ladder_and_range_midpoint() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::default();

    let r = record(
        Row {
            valuation: "1200",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_valuation(&r, &ctx(&profile, &top)), 10);

    // "200-400" reduces to its midpoint 300, which is > 200 but not > 300.
    let r = record(
        Row {
            valuation: "200-400",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_valuation(&r, &ctx(&profile, &top)), 4);

    let r = record(
        Row {
            valuation: "garbage",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_valuation(&r, &ctx(&profile, &top)), 0);
}

#[test]
fn test_raised_ladder_and_fallback() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::default();

    let r = record(
        Row {
            raised: "95",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_raised(&r, &ctx(&profile, &top)), 8);

    // No raised cell: falls back to valuation / 4 = 60.
    let r = record(
        Row {
            valuation: "240",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_raised(&r, &ctx(&profile, &top)), 6);
}

#[test]
fn test_recent_financing_window_and_large_round_bonus() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::default();

    let recent = record(
        Row {
            date: "2024-06-01",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_recent_financing(&recent, &ctx(&profile, &top)), 5);

    let recent_large = record(
        Row {
            date: "2024-06-01",
            last_round: "25",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_recent_financing(&recent_large, &ctx(&profile, &top)), 10);

    let stale = record(
        Row {
            date: "2022-06-01",
            last_round: "25",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_recent_financing(&stale, &ctx(&profile, &top)), 0);

    let malformed = record(
        Row {
            date: "June 2024",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_recent_financing(&malformed, &ctx(&profile, &top)), 0);
}

#[test]
fn test_growth_ladders_split_on_company_age() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::default();

    // Mature company (launched 2018): +150% sits on the ">0 -> 1" rung.
    let mature = record(
        Row {
            launch_year: "2018",
            employees: "2023: 40, 2024: 100",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_growth(&mature, &ctx(&profile, &top)), 1);

    // Young company (launched 2022): the same +150% clears the >100 rung.
    let young = record(
        Row {
            launch_year: "2022",
            employees: "2023: 40, 2024: 100",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_growth(&young, &ctx(&profile, &top)), 6);
}

#[test]
fn test_growth_floors_without_inputs() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::default();

    let no_history = record(
        Row {
            launch_year: "2018",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_growth(&no_history, &ctx(&profile, &top)), 0);

    let no_launch = record(
        Row {
            employees: "2023: 40, 2024: 100",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_growth(&no_launch, &ctx(&profile, &top)), 0);
}

#[test]
fn test_sector_tags() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::default();

    let tagged = record(
        Row {
            tags: "Quantum Computing",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_sectors(&tagged, &ctx(&profile, &top)), 10);

    let untagged = record(Row::default(), &profile);
    assert_eq!(score_sectors(&untagged, &ctx(&profile, &top)), 0);

    // Keyword-only mode: an off-list tag no longer scores.
    let mut strict = ScoringProfile::default_v1();
    strict.any_tag_counts = false;
    let off_list = record(
        Row {
            tags: "Pet Grooming",
            ..Row::default()
        },
        &strict,
    );
    assert_eq!(score_sectors(&off_list, &ctx(&strict, &top)), 0);
    let on_list = record(
        Row {
            tags: "Pet Grooming,  QUANTUM  COMPUTING",
            ..Row::default()
        },
        &strict,
    );
    assert_eq!(score_sectors(&on_list, &ctx(&strict, &top)), 10);
}

#[test]
fn test_hq_city_hub_bias() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::default();

    for (city, expected) in [
        ("London", 0u8),
        ("  LONDON ", 0),
        ("Oxford", 5),
        ("Cambridge", 5),
        ("Berlin", 10),
        ("", 0),
    ] {
        let r = record(
            Row {
                hq_city: city,
                ..Row::default()
            },
            &profile,
        );
        assert_eq!(score_hq_city(&r, &ctx(&profile, &top)), expected, "{city:?}");
    }
}

#[test]
fn test_profile_overrides_match_case_insensitively() {
    let top = InvestorSet::default();

    // Mixed-case keyword list in a strict-mode override still matches.
    let mut strict = ScoringProfile::default_v1();
    strict.any_tag_counts = false;
    strict.sector_keywords = vec!["Quantum Computing".to_string()];
    let tagged = record(
        Row {
            tags: "quantum computing",
            ..Row::default()
        },
        &strict,
    );
    assert_eq!(score_sectors(&tagged, &ctx(&strict, &top)), 10);

    // Mixed-case hub overrides keep the floor and the partial tier.
    let mut profile = ScoringProfile::default_v1();
    profile.floor_hub_city = "London".to_string();
    profile.partial_hub_cities = vec!["  OXFORD ".to_string()];
    let floor = record(
        Row {
            hq_city: "London",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_hq_city(&floor, &ctx(&profile, &top)), 0);
    let partial = record(
        Row {
            hq_city: "oxford",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_hq_city(&partial, &ctx(&profile, &top)), 5);
}

#[test]
fn test_founder_classifiers() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::default();
    let c = ctx(&profile, &top);

    let mixed = record(
        Row {
            genders: "male, Female",
            serial: "no, YES",
            founders: "Ada Lovelace, Grace Hopper",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_founder_genders(&mixed, &c), 10);
    assert_eq!(score_founder_serial(&mixed, &c), 10);
    assert_eq!(score_founder_count(&mixed, &c), 10);

    let solo = record(
        Row {
            genders: "male",
            serial: "no",
            founders: "Ada Lovelace",
            ..Row::default()
        },
        &profile,
    );
    assert_eq!(score_founder_genders(&solo, &c), 0);
    assert_eq!(score_founder_serial(&solo, &c), 0);
    assert_eq!(score_founder_count(&solo, &c), 0);

    // Missing lists are an assumed single founder, not an error.
    let blank = record(Row::default(), &profile);
    assert_eq!(score_founder_genders(&blank, &c), 0);
    assert_eq!(score_founder_serial(&blank, &c), 0);
    assert_eq!(score_founder_count(&blank, &c), 0);
}

#[test]
fn test_all_classifiers_total_and_bounded() {
    let profile = ScoringProfile::default_v1();
    let top = InvestorSet::from_names(["Top Capital"]);
    let c = ctx(&profile, &top);

    // Garbage in every cell never raises and floors each classifier.
    let garbage = record(
        Row {
            investors: ";;;",
            valuation: "not-a-number",
            raised: "n/a",
            last_round: "??",
            date: "someday",
            launch_year: "soon",
            employees: "x;y;z",
            ..Row::default()
        },
        &profile,
    );
    let scores = run_classifiers(&garbage, &c);
    for (kind, value) in scores.iter() {
        assert_eq!(value, 0, "{}", kind.label());
    }

    let rich = record(
        Row {
            investors: "Top Capital, Acme",
            valuation: "1500",
            raised: "120",
            last_round: "30",
            date: "2024-10-01",
            tags: "Deep Tech",
            launch_year: "2016",
            hq_city: "Paris",
            genders: "female",
            serial: "yes",
            founders: "A, B",
            employees: "2020: 10, 2021: 40, 2022: 90, 2023: 150, 2024: 200",
        },
        &profile,
    );
    let scores = run_classifiers(&rich, &c);
    for kind in SCORE_ORDER {
        assert!(scores.get(kind) <= 10, "{}", kind.label());
    }
    assert_eq!(scores.get(ScoreKind::Vc), 8);
    assert_eq!(scores.get(ScoreKind::FundingValuation), 10);
    assert_eq!(scores.get(ScoreKind::Raised), 10);
    assert_eq!(scores.get(ScoreKind::RecentFinancing), 10);
}
