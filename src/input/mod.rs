use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

pub mod investors;
pub mod record;
pub mod table;

use crate::model::profile::ScoringProfile;
use crate::model::weights::WeightConfig;
use record::{ColumnIndex, CompanyRecord};
use table::RawTable;

/// Prefix of the employee-history column; the full label embeds the year
/// span and varies between exports.
const EMPLOYEES_PREFIX: &str = "EMPLOYEES";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub(crate) fn open_reader(path: &Path) -> Result<BufReader<File>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    Ok(BufReader::new(File::open(path)?))
}

/// Resolves the schema columns of a loaded table. A missing required column
/// is fatal for the run; the two optional columns degrade to `None`.
pub fn resolve_columns(table: &RawTable) -> Result<ColumnIndex, InputError> {
    let find = |name: &str| {
        table
            .columns
            .iter()
            .position(|c| c.trim().eq_ignore_ascii_case(name))
    };
    let require = |name: &str| find(name).ok_or_else(|| InputError::MissingColumn(name.to_string()));

    let employees = table
        .columns
        .iter()
        .position(|c| {
            c.trim()
                .to_ascii_uppercase()
                .starts_with(EMPLOYEES_PREFIX)
        })
        .ok_or_else(|| InputError::MissingColumn(format!("{EMPLOYEES_PREFIX} (...)")))?;

    Ok(ColumnIndex {
        all_investors: require("ALL INVESTORS")?,
        past_investors: find("INVESTORS"),
        valuation: require("CURRENT COMPANY VALUATION (EUR)")?,
        raised: require("TOTAL AMOUNT RAISED (EUR)")?,
        last_round: find("AMOUNT RAISED THIS ROUND (EUR M)"),
        date: require("DATE")?,
        tags: require("TAGS")?,
        launch_year: require("LAUNCH YEAR")?,
        hq_city: require("HQ CITY")?,
        founders_genders: require("FOUNDERS GENDERS")?,
        founders_is_serial: require("FOUNDERS IS SERIAL")?,
        founders: require("FOUNDERS")?,
        employees,
    })
}

#[derive(Debug)]
pub struct RecordBatch {
    pub records: Vec<CompanyRecord>,
    /// Rows dropped by the required-field filter (no parseable valuation).
    pub excluded: usize,
}

/// Builds validated records from the raw rows. Rows without a parseable
/// valuation are excluded from the cohort (the sheet's required-field
/// policy); every other field failure degrades inside the record itself.
pub fn build_records(
    table: RawTable,
    idx: &ColumnIndex,
    profile: &ScoringProfile,
) -> RecordBatch {
    let mut records = Vec::with_capacity(table.rows.len());
    let mut excluded = 0usize;
    for (row_no, row) in table.rows.into_iter().enumerate() {
        let record = CompanyRecord::from_row(row, idx, profile);
        if record.valuation.is_none() {
            debug!("row {} has no parseable valuation; excluded", row_no + 2);
            excluded += 1;
            continue;
        }
        records.push(record);
    }
    if excluded > 0 {
        info!("excluded {excluded} row(s) without a parseable valuation");
    }
    RecordBatch { records, excluded }
}

/// Loads the per-run weight file; weights outside [0, 1] are clamped.
pub fn load_weights(path: &Path) -> Result<WeightConfig, InputError> {
    let mut json = String::new();
    open_reader(path)?.read_to_string(&mut json)?;
    let mut weights: WeightConfig = serde_json::from_str(&json)
        .map_err(|e| InputError::Parse(format!("weights file {}: {e}", path.display())))?;
    let clamped = weights.clamp();
    if clamped > 0 {
        tracing::warn!("{clamped} weight(s) outside [0, 1] were clamped");
    }
    Ok(weights)
}

/// Loads a JSON profile override; omitted fields keep the v1 defaults.
pub fn load_profile(path: &Path) -> Result<ScoringProfile, InputError> {
    let mut json = String::new();
    open_reader(path)?.read_to_string(&mut json)?;
    serde_json::from_str(&json)
        .map_err(|e| InputError::Parse(format!("profile file {}: {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
