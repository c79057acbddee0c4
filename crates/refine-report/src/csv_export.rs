//! CSV exports: the cleaned contact batch and the detailed audit log.

use std::path::Path;

use anyhow::{Context, Result};

use refine_model::{DetailedLogEntry, NormalizedRecord, ProcessingSettings, labels};

use crate::common::{corrected_headers, corrected_values, create_with_bom};

/// Write the deduplicated kept contacts, one row per contact.
pub fn write_cleaned_csv(
    path: &Path,
    contacts: &[NormalizedRecord],
    settings: &ProcessingSettings,
) -> Result<()> {
    let writer = create_with_bom(path)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(corrected_headers(settings))
        .with_context(|| format!("write headers to {}", path.display()))?;
    for record in contacts {
        csv_writer
            .write_record(corrected_values(record, settings))
            .with_context(|| format!("write contact to {}", path.display()))?;
    }
    csv_writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Write the audit report, one row per input row, deleted rows included.
///
/// Original source columns carry the original suffix and corrected fields
/// the corrected suffix, so both sides of every row sit next to each other
/// in one table.
pub fn write_detailed_csv(
    path: &Path,
    log: &[DetailedLogEntry],
    source_headers: &[String],
    settings: &ProcessingSettings,
) -> Result<()> {
    let writer = create_with_bom(path)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    // the corrected set ends with the actions column; the audit report
    // carries the actions note once, in its own final column
    let mut corrected = corrected_headers(settings);
    corrected.pop();

    let mut headers = vec![labels::ROW_NUMBER.to_string()];
    for header in source_headers {
        headers.push(format!("{header}{}", labels::ORIGINAL_SUFFIX));
    }
    for header in &corrected {
        headers.push(format!("{header}{}", labels::CORRECTED_SUFFIX));
    }
    headers.push(labels::ACTIONS.to_string());
    headers.push(labels::STATUS.to_string());
    csv_writer
        .write_record(&headers)
        .with_context(|| format!("write headers to {}", path.display()))?;

    for entry in log {
        let mut row = vec![entry.row_number.to_string()];
        for header in source_headers {
            let value = entry
                .original
                .iter()
                .find(|(name, _)| name == header)
                .map(|(_, value)| value.clone())
                .unwrap_or_default();
            row.push(value);
        }
        let mut values = corrected_values(&entry.corrected, settings);
        values.pop();
        row.extend(values);
        row.push(entry.actions.clone());
        row.push(entry.status.label().to_string());
        csv_writer
            .write_record(&row)
            .with_context(|| format!("write row {} to {}", entry.row_number, path.display()))?;
    }
    csv_writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
