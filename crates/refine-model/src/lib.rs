pub mod labels;
pub mod mapping;
pub mod processing;
pub mod record;
pub mod report;
pub mod settings;
pub mod summary;

pub use mapping::{ColumnMapping, MappingError};
pub use processing::{ProcessingPhase, ProcessingResult, ProcessingState};
pub use record::{MappedRecord, NormalizedRecord, RawRecord};
pub use report::{DetailedLogEntry, RowStatus};
pub use settings::{
    EnrichmentUsage, PhoneFormat, ProcessingSettings, TitleHandling, VariationHandling,
};
pub use summary::{EnrichmentTally, ProcessingSummary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let settings = ProcessingSettings::default();
        let json = serde_json::to_string(&settings).expect("serialize settings");
        let round: ProcessingSettings =
            serde_json::from_str(&json).expect("deserialize settings");
        assert_eq!(round.truecaller_usage, EnrichmentUsage::Never);
        assert_eq!(round.name_title_handling, TitleHandling::SeparateField);
        assert!(round.gender_assignment);
    }

    #[test]
    fn settings_parse_original_wire_values() {
        let json = r#"{
            "truecaller_usage": "if_name_missing",
            "truecaller_name_field": "שם מ-Truecaller",
            "name_title_handling": "prefix_firstname",
            "gender_assignment": false,
            "variation_handling": "keep_original",
            "phone_format_preference": "digits_only"
        }"#;
        let settings: ProcessingSettings = serde_json::from_str(json).expect("parse settings");
        assert_eq!(settings.truecaller_usage, EnrichmentUsage::IfNameMissing);
        assert_eq!(settings.name_title_handling, TitleHandling::PrefixFirstname);
        assert_eq!(settings.phone_format_preference, PhoneFormat::DigitsOnly);
        assert!(!settings.gender_assignment);
    }
}
