mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use crate::input::investors::InvestorSet;
use crate::input::{InputError, build_records, load_profile, load_weights, resolve_columns};
use crate::model::profile::ScoringProfile;
use crate::model::weights::WeightConfig;
use crate::pipeline::classify::ClassifyContext;
use crate::pipeline::rank::rank;
use crate::pipeline::score::run_scoring;
use crate::report::{ReportMode, build_summary, format_score, write_reports};

#[derive(Parser, Debug)]
#[command(name = "future50")]
#[command(about = "Composite Future-50 scoring and ranking of portfolio companies", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a company table and write the ranked results
    Score {
        /// Delimited company table (CSV or TSV)
        #[arg(long)]
        input: PathBuf,

        /// Line-delimited reference investor list
        #[arg(long)]
        investors: PathBuf,

        /// JSON weight file; defaults to the built-in slider weights
        #[arg(long)]
        weights: Option<PathBuf>,

        /// Output directory
        #[arg(long)]
        out: PathBuf,

        /// JSON scoring-profile override (thresholds, keywords, anchors)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// As-of date (YYYY-MM-DD); overrides the profile's anchor dates
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Which artifacts to write
        #[arg(long, value_enum, default_value = "both")]
        report: ReportArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportArg {
    /// Only the annotated, ranked table
    Table,
    /// Only the run summary
    Summary,
    /// Table and summary
    Both,
}

impl From<ReportArg> for ReportMode {
    fn from(value: ReportArg) -> Self {
        match value {
            ReportArg::Table => ReportMode::Table,
            ReportArg::Summary => ReportMode::Summary,
            ReportArg::Both => ReportMode::Both,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), InputError> {
    let Commands::Score {
        input,
        investors,
        weights,
        out,
        profile,
        as_of,
        report,
    } = cli.command;

    let profile = resolve_profile(profile.as_deref(), as_of)?;
    let weights = match weights {
        Some(path) => load_weights(&path)?,
        None => WeightConfig::default_v1(),
    };

    if weights.is_empty() {
        warn!("weight configuration is empty; every overall score will be 0");
    } else {
        info!("using {} weight(s)", weights.len());
    }

    let top_investors = InvestorSet::load(&investors)?;
    if top_investors.is_empty() {
        warn!(
            "reference investor list {} is empty; every VC Score will floor",
            investors.display()
        );
    } else {
        info!("loaded {} reference investor(s)", top_investors.len());
    }

    let table = input::table::load_table(&input)?;
    let idx = resolve_columns(&table)?;
    let columns = table.columns.clone();
    info!(
        "loaded {} row(s), {} column(s) from {}",
        table.rows.len(),
        columns.len(),
        input.display()
    );

    let batch = build_records(table, &idx, &profile);
    let ctx = ClassifyContext {
        profile: &profile,
        top_investors: &top_investors,
    };
    let scored = run_scoring(batch.records, &ctx, &weights);
    let cohort = rank(scored);

    let summary = build_summary(&cohort, batch.excluded, profile.as_of, profile.reference_year);
    match (summary.overall_median, summary.overall_mean) {
        (Some(median), Some(mean)) => info!(
            "scored {} company(ies); overall median {}, mean {}",
            summary.n_scored,
            format_score(median),
            format_score(mean)
        ),
        _ => warn!("no rows survived the required-field filter; summary carries no statistics"),
    }

    write_reports(&cohort, &columns, &summary, &out, report.into())?;
    Ok(())
}

fn resolve_profile(
    path: Option<&std::path::Path>,
    as_of: Option<NaiveDate>,
) -> Result<ScoringProfile, InputError> {
    let mut profile = match path {
        Some(path) => load_profile(path)?,
        None => ScoringProfile::default_v1(),
    };
    // A CLI as-of date moves both temporal anchors together.
    if let Some(date) = as_of {
        profile.as_of = date;
        profile.reference_year = date.year();
    }
    Ok(profile)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
