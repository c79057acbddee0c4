//! Final pass: coerce a parsed object into the typed record.

use serde_json::{Map, Value};

use refine_model::{NormalizedRecord, ProcessingSettings, labels};

/// Read a field as text, treating a bare number as its decimal rendering
/// (phone values sometimes arrive as number literals) and anything else as
/// empty. Missing required keys thereby default to the empty string.
fn text_field(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Build a [`NormalizedRecord`] from a parsed response object.
///
/// The optional fields mirror the active settings: an inactive setting
/// yields `None` even if the service volunteered the key, and an active
/// setting yields `Some` (possibly empty) even if the key is absent. This
/// keeps the record shape a function of settings alone.
#[must_use]
pub fn record_from_object(
    map: &Map<String, Value>,
    settings: &ProcessingSettings,
) -> NormalizedRecord {
    NormalizedRecord {
        full_name: text_field(map, labels::FULL_NAME),
        first_name: text_field(map, labels::FIRST_NAME),
        last_name: text_field(map, labels::LAST_NAME),
        title: settings
            .title_separated()
            .then(|| text_field(map, labels::TITLE)),
        gender: settings
            .gender_assignment
            .then(|| text_field(map, labels::GENDER)),
        enrichment: settings
            .enrichment_enabled()
            .then(|| text_field(map, settings.enrichment_field_name())),
        email: text_field(map, labels::EMAIL),
        phone: text_field(map, labels::PHONE),
        actions: text_field(map, labels::ACTIONS),
    }
}

#[cfg(test)]
mod tests {
    use refine_model::{EnrichmentUsage, TitleHandling};

    use super::*;

    fn parsed(raw: &str) -> Map<String, Value> {
        match serde_json::from_str(raw).expect("valid test json") {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn numeric_phone_renders_as_text() {
        let map = parsed(r#"{"שם מלא":"דוד","טלפון":501234567}"#);
        let record = record_from_object(&map, &ProcessingSettings::default());
        assert_eq!(record.phone, "501234567");
    }

    #[test]
    fn inactive_settings_suppress_volunteered_fields() {
        let map = parsed(r#"{"שם מלא":"דוד","מגדר":"זכר","תואר":"מר"}"#);
        let settings = ProcessingSettings {
            gender_assignment: false,
            name_title_handling: TitleHandling::Remove,
            ..ProcessingSettings::default()
        };
        let record = record_from_object(&map, &settings);
        assert!(record.gender.is_none());
        assert!(record.title.is_none());
    }

    #[test]
    fn enrichment_read_from_configured_key() {
        let map = parsed(r#"{"שם מלא":"דוד","מקור חיצוני":"דוד לוי"}"#);
        let settings = ProcessingSettings {
            truecaller_usage: EnrichmentUsage::AlwaysEnrich,
            truecaller_name_field: "מקור חיצוני".to_string(),
            ..ProcessingSettings::default()
        };
        let record = record_from_object(&map, &settings);
        assert_eq!(record.enrichment.as_deref(), Some("דוד לוי"));
    }

    #[test]
    fn missing_required_keys_default_to_empty() {
        let record = record_from_object(&Map::new(), &ProcessingSettings::default());
        assert_eq!(record.full_name, "");
        assert_eq!(record.actions, "");
        assert_eq!(record.title.as_deref(), Some(""));
    }
}
