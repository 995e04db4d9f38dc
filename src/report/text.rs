use crate::report::{SummaryData, format_score};

pub fn render_summary_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Future-50 Scoring Report\n");
    out.push_str("========================\n\n");

    out.push_str("1. Run\n");
    out.push_str(&format!("Tool: {} {}\n", data.tool, data.version));
    out.push_str(&format!("As-of date: {}\n", data.as_of));
    out.push_str(&format!("Reference year: {}\n\n", data.reference_year));

    out.push_str("2. Cohort\n");
    out.push_str(&format!("Rows read: {}\n", data.n_rows));
    out.push_str(&format!("Companies scored: {}\n", data.n_scored));
    out.push_str(&format!(
        "Rows excluded (no valuation): {}\n\n",
        data.n_excluded
    ));

    out.push_str("3. Overall score\n");
    match (data.overall_median, data.overall_mean) {
        (Some(median), Some(mean)) => {
            out.push_str(&format!("Median: {}\n", format_score(median)));
            out.push_str(&format!("Mean: {}\n\n", format_score(mean)));
        }
        _ => {
            out.push_str("No data: no rows survived the required-field filter.\n\n");
        }
    }

    if !data.sub_score_medians.is_empty() {
        out.push_str("4. Sub-score medians\n");
        for stat in &data.sub_score_medians {
            out.push_str(&format!("{}: {}\n", stat.name, format_score(stat.median)));
        }
    }

    out
}
