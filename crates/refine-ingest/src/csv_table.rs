use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

use refine_model::RawRecord;

/// The uploaded contact file: headers plus one raw record per data row.
#[derive(Debug, Clone)]
pub struct ContactTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a contact CSV into raw records.
///
/// Headers and cells are trimmed (including a stray UTF-8 BOM on the first
/// header); rows whose cells are all empty are skipped. Fails when the file
/// has no header row or no data rows.
pub fn read_contacts_csv(path: &Path) -> Result<ContactTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read headers from {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        bail!("{}: הקובץ ריק או לא מכיל נתונים תקינים", path.display());
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("{}: row {}", path.display(), index + 2))?;
        let columns: Vec<(String, String)> = headers
            .iter()
            .enumerate()
            .map(|(pos, header)| {
                let value = record.get(pos).map(normalize_cell).unwrap_or_default();
                (header.clone(), value)
            })
            .collect();
        if columns.iter().all(|(_, value)| value.is_empty()) {
            continue;
        }
        rows.push(RawRecord { columns });
    }
    if rows.is_empty() {
        bail!("{}: הקובץ ריק או לא מכיל נתונים תקינים", path.display());
    }

    Ok(ContactTable { headers, rows })
}
