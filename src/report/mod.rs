use std::path::Path;

use serde::Serialize;
use tracing::info;

pub mod json;
pub mod table;
pub mod text;

use crate::model::scores::SCORE_ORDER;
use crate::pipeline::rank::{Cohort, median};

#[derive(Debug, Clone, Serialize)]
pub struct SubScoreStat {
    pub name: &'static str,
    pub median: f64,
}

/// Run-level summary reported alongside the annotated table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub as_of: String,
    pub reference_year: i32,

    pub n_rows: usize,
    pub n_scored: usize,
    pub n_excluded: usize,

    /// `None` when the cohort is empty: the explicit no-data condition.
    pub overall_median: Option<f64>,
    pub overall_mean: Option<f64>,
    pub sub_score_medians: Vec<SubScoreStat>,
}

pub fn build_summary(
    cohort: &Cohort,
    excluded: usize,
    as_of: chrono::NaiveDate,
    reference_year: i32,
) -> SummaryData {
    let mut sub_score_medians = Vec::with_capacity(SCORE_ORDER.len());
    for kind in SCORE_ORDER {
        let values: Vec<f64> = cohort
            .companies
            .iter()
            .map(|c| f64::from(c.scores.get(kind)))
            .collect();
        if let Some(m) = median(&values) {
            sub_score_medians.push(SubScoreStat {
                name: kind.label(),
                median: m,
            });
        }
    }

    SummaryData {
        tool: "future50".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        as_of: as_of.to_string(),
        reference_year,
        n_rows: cohort.companies.len() + excluded,
        n_scored: cohort.companies.len(),
        n_excluded: excluded,
        overall_median: cohort.median,
        overall_mean: cohort.mean,
        sub_score_medians,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Table,
    Summary,
    Both,
}

/// Writes the selected artifacts into `out_dir`, creating it if needed.
pub fn write_reports(
    cohort: &Cohort,
    columns: &[String],
    summary: &SummaryData,
    out_dir: &Path,
    mode: ReportMode,
) -> std::io::Result<()> {
    std::fs::create_dir_all(out_dir)?;

    if mode != ReportMode::Summary {
        let path = out_dir.join("scores.csv");
        std::fs::write(&path, table::render_table(cohort, columns))?;
        info!("wrote {}", path.display());
    }
    if mode != ReportMode::Table {
        let txt_path = out_dir.join("summary.txt");
        std::fs::write(&txt_path, text::render_summary_text(summary))?;
        info!("wrote {}", txt_path.display());

        let json_path = out_dir.join("summary.json");
        std::fs::write(&json_path, json::render_summary_json(summary)?)?;
        info!("wrote {}", json_path.display());
    }
    Ok(())
}

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}
