use anyhow::Result;

use refine_model::{ColumnMapping, MappedRecord, RawRecord, labels};

/// Remap one raw row through the user's column mapping.
///
/// With a full-name column mapped, the name is passed through whole and the
/// inference service splits it. With separate first/last columns the full
/// name is joined here so validation and dedup always see one field.
#[must_use]
pub fn apply_mapping(row: &RawRecord, mapping: &ColumnMapping) -> MappedRecord {
    let mut mapped = MappedRecord {
        phone: row.value_or_empty(mapping.phone.as_ref()),
        ..MappedRecord::default()
    };

    if mapping.full_name.is_some() {
        mapped.full_name = row.value_or_empty(mapping.full_name.as_ref());
    } else if mapping.first_name.is_some() || mapping.last_name.is_some() {
        let first = row.value_or_empty(mapping.first_name.as_ref());
        let last = row.value_or_empty(mapping.last_name.as_ref());
        mapped.full_name = format!("{first} {last}").trim().to_string();
        mapped.first_name = Some(first);
        mapped.last_name = Some(last);
    }

    if mapping.email.is_some() {
        mapped.email = Some(row.value_or_empty(mapping.email.as_ref()));
    }
    if mapping.address.is_some() {
        mapped.address = Some(row.value_or_empty(mapping.address.as_ref()));
    }
    mapped
}

/// Render a mapped record as a one-row CSV snippet for the prompt.
///
/// Only mapped fields appear, headed by their canonical Hebrew labels, so
/// the inference service sees the same shape the output schema asks for.
pub fn single_row_csv(record: &MappedRecord) -> Result<String> {
    let mut headers: Vec<&str> = vec![labels::FULL_NAME];
    let mut values: Vec<&str> = vec![&record.full_name];
    if let Some(first) = &record.first_name {
        headers.push(labels::FIRST_NAME);
        values.push(first);
    }
    if let Some(last) = &record.last_name {
        headers.push(labels::LAST_NAME);
        values.push(last);
    }
    headers.push(labels::PHONE);
    values.push(&record.phone);
    if let Some(email) = &record.email {
        headers.push(labels::EMAIL);
        values.push(email);
    }
    if let Some(address) = &record.address {
        headers.push(labels::ADDRESS);
        values.push(address);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;
    writer.write_record(&values)?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?.trim_end().to_string())
}
