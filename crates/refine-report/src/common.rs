//! Shared helpers for the export writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use refine_model::{NormalizedRecord, ProcessingSettings, labels};

/// UTF-8 byte order mark. Spreadsheet tools need it to detect the
/// encoding of Hebrew CSV content.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Create the output file with the BOM already written.
pub fn create_with_bom(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(UTF8_BOM)
        .with_context(|| format!("write BOM to {}", path.display()))?;
    Ok(writer)
}

/// Column headers for corrected contact fields, in record order, listing
/// exactly the fields the settings activate.
pub fn corrected_headers(settings: &ProcessingSettings) -> Vec<String> {
    let mut headers = vec![
        labels::FULL_NAME.to_string(),
        labels::FIRST_NAME.to_string(),
        labels::LAST_NAME.to_string(),
    ];
    if settings.title_separated() {
        headers.push(labels::TITLE.to_string());
    }
    if settings.gender_assignment {
        headers.push(labels::GENDER.to_string());
    }
    if settings.enrichment_enabled() {
        headers.push(settings.enrichment_field_name().to_string());
    }
    headers.push(labels::EMAIL.to_string());
    headers.push(labels::PHONE.to_string());
    headers.push(labels::ACTIONS.to_string());
    headers
}

/// Values for one record, aligned with [`corrected_headers`].
pub fn corrected_values(record: &NormalizedRecord, settings: &ProcessingSettings) -> Vec<String> {
    let mut values = vec![
        record.full_name.clone(),
        record.first_name.clone(),
        record.last_name.clone(),
    ];
    if settings.title_separated() {
        values.push(record.title.clone().unwrap_or_default());
    }
    if settings.gender_assignment {
        values.push(record.gender.clone().unwrap_or_default());
    }
    if settings.enrichment_enabled() {
        values.push(record.enrichment.clone().unwrap_or_default());
    }
    values.push(record.email.clone());
    values.push(record.phone.clone());
    values.push(record.actions.clone());
    values
}
