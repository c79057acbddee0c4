//! Prompt assembly for the per-row inference call.
//!
//! One prompt per input row, composed from five independent clauses: the
//! fixed keep/delete rule set, the title-handling instruction, the phone
//! format instruction, and the optional gender and enrichment
//! instructions. The output schema at the end lists exactly the fields the
//! active settings enable; the rest of the pipeline will look for those
//! keys and no others.

pub mod clauses;
pub mod schema;

use refine_model::ProcessingSettings;

use crate::clauses::{enrichment_clause, gender_clause, title_handling_clause};
use crate::schema::output_schema;

/// Build the full prompt for one row.
///
/// `row_number` is 1-based; `row_csv` is the single-row CSV rendering of
/// the mapped record.
#[must_use]
pub fn build_prompt(
    settings: &ProcessingSettings,
    row_csv: &str,
    row_number: usize,
    total_rows: usize,
) -> String {
    let title_clause = title_handling_clause(settings.name_title_handling);
    let phone_example = settings.phone_example();
    let gender = gender_clause(settings).unwrap_or_default();
    let enrichment = enrichment_clause(settings).unwrap_or_default();
    let fields = output_schema(settings);

    format!(
        r####"Return ONLY valid JSON. No text before/after. Phone numbers must be strings with quotes.

Processing contact {row_number} of {total_rows}:

CHECK IN EXACT ORDER - If any rule matches, follow it immediately:

RULE 1: DELETE - Header rows (check ANY field for these EXACT words)
"שם", "שם מלא", "שם פרטי", "שם משפחה", "טלפון", "דואל", "אימייל", "מייל"
"name", "phone", "email", "first", "last", "first name", "last name"
→ DELETE: {{"שם מלא":"","שם פרטי":"","שם משפחה":"","דואל":"","טלפון":"","פעולות":"מחיקה - כותרת"}}

RULE 2: KEEP - Names with titles (check if name starts with these)
Hebrew: "ד״ר", "ד"ר", "דר.", "מר", "גב׳", "גב'", "גברת", "מרת", "פרופ׳", "רב", "הרב"
English: "Dr", "Dr.", "Mr", "Mr.", "Mrs", "Mrs.", "Ms", "Ms.", "Prof"
Examples: "ד״ר אלעד מאיר", "מר דוד אברהם", "גב' שרה כהן", "Dr David Cohen"
→ KEEP AND PROCESS with title handling

RULE 3: KEEP - Hebrew compound names (check if name starts with these)
"בת", "בן", "אבי", "אבו", "עבד", "אל", "בר", "כהן", "לוי"
Examples: "בת חן עמיר", "בן דוד משה", "אבי אזולאי", "כהן דוד", "בר כוכבא"
→ KEEP AND PROCESS normally

RULE 4: KEEP - Regular valid names (Hebrew, English, mixed)
Examples: "Yosi", "David", "Shlomit", "Rachel", "John Smith", "Hay Segal", "Shuki Portal", "David דוד", "משה", "שרה"
→ KEEP AND PROCESS normally

RULE 5: DELETE - Junk only after checking all above
- Pure headers that passed rule 1: double-check and delete
- System words: "headerMenu", "PORTAL - Service", "test", "admin", "header", "menu", "portal", "service"
- Pure symbols: "?", "!", "*", "***", "---", "@", "#", "$", "###"
- Pure numbers: "123", "456", "01234567", "2501234567"
- True gibberish: "דגכחנדךלחנגכ", "asdasd", "gggggg" (only obvious random letters)
- Under 2 real letters: "א", "x", "12"
→ DELETE: {{"שם מלא":"","שם פרטי":"","שם משפחה":"","דואל":"","טלפון":"","פעולות":"מחיקה - זבל"}}

PROCESSING for kept names:
{title_clause}
- Phone format:
  * Israeli phones (05/02/03/04/08/09): format as {phone_example}
  * Numbers like 537405153, 546789012: add 0 prefix → 053-740-5153, 054-678-9012
  * 10-digit numbers starting with 5: likely missing 0, add it → 05X-XXX-XXXX
  * Other numbers: leave as string without changes
  * If no phone, leave empty
- Email fixes: gmial→gmail, yahaoo→yahoo, hotnail→hotmail
- Name splitting:
  * Split at first space: everything before first space = first name, everything after = last name
  * "אלעד מאיר" → שם פרטי: "אלעד", שם משפחה: "מאיר"
  * "דוד אברהם" → שם פרטי: "דוד", שם משפחה: "אברהם"
  * "בת חן עמיר" → שם פרטי: "בת חן", שם משפחה: "עמיר"
  * "John Smith" → שם פרטי: "John", שם משפחה: "Smith"

{gender}
{enrichment}

OUTPUT: {{{fields}}}

Data: {row_csv}"####
    )
}

#[cfg(test)]
mod tests {
    use refine_model::{EnrichmentUsage, PhoneFormat, ProcessingSettings, TitleHandling};

    use super::*;

    #[test]
    fn prompt_carries_row_position_and_data() {
        let settings = ProcessingSettings::default();
        let prompt = build_prompt(&settings, "שם מלא,טלפון\nדוד כהן,0501234567", 3, 10);
        assert!(prompt.contains("Processing contact 3 of 10"));
        assert!(prompt.ends_with("Data: שם מלא,טלפון\nדוד כהן,0501234567"));
    }

    #[test]
    fn gender_clause_only_when_enabled() {
        let mut settings = ProcessingSettings::default();
        let with = build_prompt(&settings, "data", 1, 1);
        assert!(with.contains("שיוך מגדר"));
        settings.gender_assignment = false;
        let without = build_prompt(&settings, "data", 1, 1);
        assert!(!without.contains("שיוך מגדר"));
    }

    #[test]
    fn enrichment_clause_names_configured_field() {
        let settings = ProcessingSettings {
            truecaller_usage: EnrichmentUsage::AlwaysEnrich,
            truecaller_name_field: "מקור חיצוני".to_string(),
            ..ProcessingSettings::default()
        };
        let prompt = build_prompt(&settings, "data", 1, 1);
        assert!(prompt.contains("'מקור חיצוני'"));
        assert!(prompt.contains("תמיד נסה להעשיר"));
    }

    #[test]
    fn phone_example_follows_format_preference() {
        let settings = ProcessingSettings {
            phone_format_preference: PhoneFormat::DigitsOnly,
            name_title_handling: TitleHandling::Remove,
            ..ProcessingSettings::default()
        };
        let prompt = build_prompt(&settings, "data", 1, 1);
        assert!(prompt.contains("format as 0501234567"));
    }
}
