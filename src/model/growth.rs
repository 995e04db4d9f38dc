use crate::model::history::EmployeeHistory;

/// Trailing-window headcount growth, in percent.
///
/// Takes the at-most-5 most recent years at or before `reference_year` that
/// are present in the history and compares the newest against the oldest of
/// those. Returns `None` when fewer than two usable years exist, or when the
/// oldest count is zero. This is deliberately a window figure robust to
/// missing individual years, not a strict year-over-year rate.
pub fn growth_in_window(history: &EmployeeHistory, reference_year: i32) -> Option<f64> {
    let mut years: Vec<i32> = history
        .keys()
        .copied()
        .filter(|y| *y <= reference_year)
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.truncate(5);
    if years.len() < 2 {
        return None;
    }

    let latest = history.get(&years[0]).copied()? as f64;
    let earliest = history.get(&years[years.len() - 1]).copied()? as f64;
    if earliest == 0.0 {
        return None;
    }
    Some((latest - earliest) / earliest * 100.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/growth.rs"]
mod tests;
