use chrono::NaiveDate;

use crate::model::growth::growth_in_window;
use crate::model::history::{EmployeeHistory, parse_employee_history};
use crate::model::profile::ScoringProfile;

/// One company row with every field already coerced into its semantic type.
///
/// All "what if this cell is garbage" decisions live in the constructor:
/// classifiers downstream only ever see clean `Option`s and lists, and an
/// unparseable cell resolves to `None` / empty, never to an error. The raw
/// cells are kept verbatim so the output table can reproduce the input
/// columns untouched.
#[derive(Debug, Clone)]
pub struct CompanyRecord {
    /// Source cells, one per input column, as read.
    pub raw: Vec<String>,
    /// Active and past investors, merged and deduplicated (normalized form).
    pub investors: Vec<String>,
    /// EUR millions; `"low-high"` ranges reduced to their midpoint.
    pub valuation: Option<f64>,
    /// EUR millions; falls back to valuation / 4 when missing.
    pub raised: Option<f64>,
    /// Size of the most recent round, EUR millions.
    pub last_round: Option<f64>,
    pub financing_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub launch_year: Option<i32>,
    pub hq_city: String,
    pub founder_genders: Vec<String>,
    pub founder_serial: Vec<String>,
    pub founders: Vec<String>,
    pub history: EmployeeHistory,
    /// Trailing-window growth percent, derived from `history`.
    pub growth: Option<f64>,
}

/// Positions of the schema columns within the raw table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnIndex {
    pub all_investors: usize,
    pub past_investors: Option<usize>,
    pub valuation: usize,
    pub raised: usize,
    pub last_round: Option<usize>,
    pub date: usize,
    pub tags: usize,
    pub launch_year: usize,
    pub hq_city: usize,
    pub founders_genders: usize,
    pub founders_is_serial: usize,
    pub founders: usize,
    pub employees: usize,
}

impl CompanyRecord {
    pub fn from_row(row: Vec<String>, idx: &ColumnIndex, profile: &ScoringProfile) -> Self {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");

        let mut investors = split_list(cell(idx.all_investors));
        if let Some(past) = idx.past_investors {
            investors.extend(split_list(cell(past)));
        }
        investors = dedup_normalized(investors);

        let valuation = parse_number(cell(idx.valuation));
        let raised = parse_number(cell(idx.raised)).or(valuation.map(|v| v / 4.0));
        let last_round = idx.last_round.and_then(|i| parse_number(cell(i)));
        let financing_date = parse_date(cell(idx.date), &profile.date_format);
        let launch_year = parse_year(cell(idx.launch_year));

        let tags = split_list(cell(idx.tags));
        let hq_city = cell(idx.hq_city).trim().to_string();
        let founder_genders = split_list(cell(idx.founders_genders));
        let founder_serial = split_list(cell(idx.founders_is_serial));
        let founders = split_list(cell(idx.founders));

        let history = parse_employee_history(Some(cell(idx.employees)), profile.history_start_year);
        let growth = growth_in_window(&history, profile.reference_year);

        Self {
            investors,
            valuation,
            raised,
            last_round,
            financing_date,
            tags,
            launch_year,
            hq_city,
            founder_genders,
            founder_serial,
            founders,
            history,
            growth,
            raw: row,
        }
    }
}

/// Lenient numeric coercion: tolerates thousands separators and a currency
/// sign, treats blank / `n/a` as missing, and reduces a `"low-high"` range
/// to its midpoint. Failures yield `None`, never an error.
pub fn parse_number(raw: &str) -> Option<f64> {
    let t: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '€' && !c.is_whitespace())
        .collect();
    if t.is_empty() || t.eq_ignore_ascii_case("n/a") {
        return None;
    }
    if let Some((lo, hi)) = t.split_once('-') {
        if let (Ok(lo), Ok(hi)) = (lo.parse::<f64>(), hi.parse::<f64>()) {
            return Some((lo + hi) / 2.0);
        }
    }
    t.parse::<f64>().ok()
}

fn parse_year(raw: &str) -> Option<i32> {
    let t = raw.trim();
    // Tolerate exports that render years as floats ("2019.0").
    let t = t.strip_suffix(".0").unwrap_or(t);
    t.parse::<i32>().ok()
}

fn parse_date(raw: &str, format: &str) -> Option<NaiveDate> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(t, format).ok()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup_normalized(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let key = crate::input::investors::normalize(&name);
        if !key.is_empty() && seen.insert(key) {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/record.rs"]
mod tests;
