use std::io;

use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> io::Result<String> {
    serde_json::to_string_pretty(data).map_err(io::Error::other)
}
