//! Per-batch processing settings.
//!
//! Settings are loaded once before a batch starts and threaded explicitly
//! through every component call; no stage mutates them.

use serde::{Deserialize, Serialize};

use crate::labels;

/// When to request third-party enrichment from the inference service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentUsage {
    /// Never request enrichment; the output schema omits the field.
    #[default]
    Never,
    /// Request enrichment only when the name is missing or unclear.
    IfNameMissing,
    /// Always request enrichment, keeping a sound original name.
    AlwaysEnrich,
}

/// How honorific titles found at the start of a name are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleHandling {
    /// Strip the title, keep the bare name.
    Remove,
    /// Keep the title as a prefix of the first name.
    PrefixFirstname,
    /// Move the title into its own output field.
    #[default]
    SeparateField,
}

/// How spelling variations of the same contact are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationHandling {
    /// Standardize to one spelling and note the change in actions.
    #[default]
    StandardizeAddNote,
    /// Keep the original spelling untouched.
    KeepOriginal,
}

/// Phone number output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneFormat {
    /// `050-1234567`
    #[default]
    WithHyphen,
    /// `0501234567`
    DigitsOnly,
}

/// The six independent knobs a user can set per batch.
///
/// Field names match the persisted wire format of the settings store, so
/// a stored settings document deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSettings {
    pub truecaller_usage: EnrichmentUsage,
    pub truecaller_name_field: String,
    pub name_title_handling: TitleHandling,
    pub gender_assignment: bool,
    pub variation_handling: VariationHandling,
    pub phone_format_preference: PhoneFormat,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            truecaller_usage: EnrichmentUsage::Never,
            truecaller_name_field: labels::DEFAULT_ENRICHMENT_FIELD.to_string(),
            name_title_handling: TitleHandling::SeparateField,
            gender_assignment: true,
            variation_handling: VariationHandling::StandardizeAddNote,
            phone_format_preference: PhoneFormat::WithHyphen,
        }
    }
}

impl ProcessingSettings {
    /// True when the enrichment field participates in the output schema.
    #[must_use]
    pub fn enrichment_enabled(&self) -> bool {
        self.truecaller_usage != EnrichmentUsage::Never
    }

    /// Display name for the enrichment output column, falling back to the
    /// default when the configured name is blank.
    #[must_use]
    pub fn enrichment_field_name(&self) -> &str {
        let trimmed = self.truecaller_name_field.trim();
        if trimmed.is_empty() {
            labels::DEFAULT_ENRICHMENT_FIELD
        } else {
            trimmed
        }
    }

    /// True when titles are split into their own output field.
    #[must_use]
    pub fn title_separated(&self) -> bool {
        self.name_title_handling == TitleHandling::SeparateField
    }

    /// The example phone number the prompt shows for the configured format.
    #[must_use]
    pub fn phone_example(&self) -> &'static str {
        match self.phone_format_preference {
            PhoneFormat::WithHyphen => "050-1234567",
            PhoneFormat::DigitsOnly => "0501234567",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_enrichment_field_falls_back_to_default() {
        let settings = ProcessingSettings {
            truecaller_name_field: "   ".to_string(),
            ..ProcessingSettings::default()
        };
        assert_eq!(
            settings.enrichment_field_name(),
            labels::DEFAULT_ENRICHMENT_FIELD
        );
    }

    #[test]
    fn phone_example_tracks_preference() {
        let mut settings = ProcessingSettings::default();
        assert_eq!(settings.phone_example(), "050-1234567");
        settings.phone_format_preference = PhoneFormat::DigitsOnly;
        assert_eq!(settings.phone_example(), "0501234567");
    }
}
