//! The output schema clause.
//!
//! The schema must list exactly the fields enabled by settings: a field the
//! pipeline will not read back must not be requested, and a field an active
//! setting expects must not be omitted.

use refine_model::{ProcessingSettings, labels};

/// Inner key list of the JSON object the inference service must return.
#[must_use]
pub fn output_schema(settings: &ProcessingSettings) -> String {
    let phone_example = settings.phone_example();
    let mut fields = format!(
        r#""{full}":"value","{first}":"value","{last}":"value""#,
        full = labels::FULL_NAME,
        first = labels::FIRST_NAME,
        last = labels::LAST_NAME,
    );
    if settings.title_separated() {
        fields.push_str(&format!(r#","{}":"value""#, labels::TITLE));
    }
    fields.push_str(&format!(
        r#","{email}":"value","{phone}":"{phone_example}","{actions}":"נוקה""#,
        email = labels::EMAIL,
        phone = labels::PHONE,
        actions = labels::ACTIONS,
    ));
    if settings.gender_assignment {
        fields.push_str(&format!(r#","{}":"value""#, labels::GENDER));
    }
    if settings.enrichment_enabled() {
        fields.push_str(&format!(r#","{}":"value""#, settings.enrichment_field_name()));
    }
    fields
}
