use crate::model::scores::SCORE_ORDER;
use crate::pipeline::rank::Cohort;
use crate::report::format_score;

/// Renders the annotated table: the input columns verbatim, one column per
/// sub-score, and `Overall Score`, rows already in rank order.
pub fn render_table(cohort: &Cohort, columns: &[String]) -> String {
    let mut out = String::new();

    let mut header: Vec<&str> = columns.iter().map(String::as_str).collect();
    for kind in SCORE_ORDER {
        header.push(kind.label());
    }
    header.push("Overall Score");
    push_row(&mut out, header.iter().copied());

    for company in &cohort.companies {
        let mut cells: Vec<String> = company.record.raw.clone();
        cells.resize(columns.len(), String::new());
        for (_, value) in company.scores.iter() {
            cells.push(value.to_string());
        }
        cells.push(format_score(company.overall));
        push_row(&mut out, cells.iter().map(String::as_str));
    }

    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_cell(out, cell);
    }
    out.push('\n');
}

fn push_cell(out: &mut String, cell: &str) {
    if cell.contains([',', '"', '\n']) {
        out.push('"');
        for c in cell.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
    } else {
        out.push_str(cell);
    }
}
