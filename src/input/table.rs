use std::io::BufRead;
use std::path::Path;

use tracing::warn;

use crate::input::{InputError, open_reader};

/// The uploaded table as read: a header plus one string cell per column per
/// row. No semantic parsing happens here.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads a delimited table. The delimiter is sniffed from the header line:
/// a tab wins over a comma so TSV exports with comma-laden cells still parse.
/// Quoted fields (RFC-4180 style, `""` escaping) are supported for both,
/// including cells that span physical lines.
pub fn load_table(path: &Path) -> Result<RawTable, InputError> {
    let mut reader = open_reader(path)?;
    let mut buf = String::new();

    if read_record(&mut reader, &mut buf)? == 0 {
        return Err(InputError::Parse(format!(
            "table file {} is empty",
            path.display()
        )));
    }
    let header_line = buf.trim_end_matches(['\r', '\n']);
    let sep = if header_line.contains('\t') { '\t' } else { ',' };
    let columns: Vec<String> = split_delimited(header_line, sep)
        .into_iter()
        .map(|c| c.trim().to_string())
        .collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse("table header is empty".to_string()));
    }

    let mut rows = Vec::new();
    let mut line_no = 1usize;
    loop {
        let consumed = read_record(&mut reader, &mut buf)?;
        if consumed == 0 {
            break;
        }
        line_no += consumed;
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = split_delimited(line, sep);
        if fields.len() > columns.len() {
            warn!(
                "row has {} cells but the header has {} columns; extra cells dropped (line {})",
                fields.len(),
                columns.len(),
                line_no
            );
            fields.truncate(columns.len());
        }
        fields.resize(columns.len(), String::new());
        rows.push(fields);
    }

    Ok(RawTable { columns, rows })
}

/// Reads one logical record into `buf`. A record whose quote is still open
/// at the end of a physical line (odd number of `"` so far) continues on the
/// next line, newline included. Returns the number of physical lines
/// consumed; 0 means end of input.
fn read_record(reader: &mut impl BufRead, buf: &mut String) -> std::io::Result<usize> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(0);
    }
    let mut consumed = 1usize;
    while buf.matches('"').count() % 2 == 1 && reader.read_line(buf)? > 0 {
        consumed += 1;
    }
    Ok(consumed)
}

fn split_delimited(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    cur.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cur.push(c);
            }
        } else if c == '"' && cur.is_empty() {
            in_quotes = true;
        } else if c == sep {
            fields.push(std::mem::take(&mut cur));
        } else {
            cur.push(c);
        }
    }
    fields.push(cur);
    fields
}
