//! Pass 5: key/value inversion detection.
//!
//! The service occasionally answers with the object inverted: values that
//! are the field names themselves, e.g. `{"דוד כהן": "שם מלא"}`. When any
//! value is a known field token, swap those pairs back.

use serde_json::{Map, Value};

use refine_model::labels;

fn is_field_token(value: &Value) -> bool {
    match value {
        Value::String(s) => labels::REQUIRED_FIELDS.contains(&s.as_str()),
        _ => false,
    }
}

/// Swap inverted key/value pairs back into field-keyed form.
///
/// Pairs whose value is not a field token are carried over unchanged, so a
/// partially inverted object still yields every salvageable field.
#[must_use]
pub fn unswap_keys(map: Map<String, Value>) -> Map<String, Value> {
    if !map.values().any(is_field_token) {
        return map;
    }
    let mut fixed = Map::new();
    for (key, value) in map {
        if is_field_token(&value) {
            let Value::String(field) = value else {
                unreachable!("field tokens are strings")
            };
            fixed.insert(field, Value::String(key));
        } else {
            fixed.insert(key, value);
        }
    }
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
            .collect()
    }

    #[test]
    fn swaps_inverted_pairs() {
        let inverted = obj(&[("דוד כהן", "שם מלא"), ("050-1234567", "טלפון")]);
        let fixed = unswap_keys(inverted);
        assert_eq!(fixed.get("שם מלא"), Some(&Value::String("דוד כהן".to_string())));
        assert_eq!(
            fixed.get("טלפון"),
            Some(&Value::String("050-1234567".to_string()))
        );
    }

    #[test]
    fn untouched_when_no_field_tokens_in_values() {
        let normal = obj(&[("שם מלא", "דוד כהן")]);
        let fixed = unswap_keys(normal.clone());
        assert_eq!(fixed, normal);
    }

    #[test]
    fn partial_inversion_keeps_normal_pairs() {
        let mixed = obj(&[("דוד כהן", "שם מלא"), ("פעולות", "נוקה")]);
        let fixed = unswap_keys(mixed);
        assert_eq!(fixed.get("שם מלא"), Some(&Value::String("דוד כהן".to_string())));
        assert_eq!(fixed.get("פעולות"), Some(&Value::String("נוקה".to_string())));
    }
}
