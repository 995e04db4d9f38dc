use std::collections::BTreeMap;

/// Sparse calendar-year -> headcount map derived from the free-text
/// employee-history column.
pub type EmployeeHistory = BTreeMap<i32, u32>;

/// Parses the employee-history field into an [`EmployeeHistory`].
///
/// Exports carry one of three grammars: comma-separated `"2021: 100, 2022: 150"`
/// pairs, semicolon-separated `"2021:100;2022:150"` pairs, or a positional
/// semicolon list of counts (`"100;150;200"`) anchored at `positional_start_year`.
/// Malformed entries (non-numeric counts, missing separator, the literal `n/a`)
/// are skipped one by one; a missing or blank field yields an empty history.
/// This function never fails.
pub fn parse_employee_history(raw: Option<&str>, positional_start_year: i32) -> EmployeeHistory {
    let mut out = EmployeeHistory::new();
    let raw = match raw {
        Some(s) => s.trim(),
        None => return out,
    };
    if raw.is_empty() || is_na(raw) {
        return out;
    }

    let sep = if raw.contains(';') { ';' } else { ',' };
    let entries: Vec<&str> = raw.split(sep).collect();

    if entries.iter().any(|e| e.contains(':')) {
        for entry in entries {
            let Some((year, count)) = entry.split_once(':') else {
                continue;
            };
            let Ok(year) = year.trim().parse::<i32>() else {
                continue;
            };
            if let Some(count) = parse_count(count) {
                out.insert(year, count);
            }
        }
    } else {
        // Positional grammar: one count per slot starting at the anchor year.
        for (offset, entry) in entries.iter().enumerate() {
            if let Some(count) = parse_count(entry) {
                out.insert(positional_start_year + offset as i32, count);
            }
        }
    }

    out
}

fn parse_count(raw: &str) -> Option<u32> {
    let t = raw.trim();
    if t.is_empty() || is_na(t) {
        return None;
    }
    t.parse::<u32>().ok()
}

fn is_na(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("n/a")
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/history.rs"]
mod tests;
