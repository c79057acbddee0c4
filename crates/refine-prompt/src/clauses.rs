//! The settings-dependent prompt clauses.

use refine_model::{EnrichmentUsage, ProcessingSettings, TitleHandling};

/// Title-handling instruction for the configured mode.
#[must_use]
pub fn title_handling_clause(handling: TitleHandling) -> &'static str {
    match handling {
        TitleHandling::Remove => {
            r#"הסר רק תארי כבוד כמו: מר, גב', ד"ר, דוקטור, פרו"פ, פרופסור, רב, הרב, רבי, מרת, גברת - אבל שמור את השם עצמו!"#
        }
        TitleHandling::PrefixFirstname => {
            r#"זהה תארי כבוד (מר, גב', ד"ר וכו') ושמור אותם כחלק מהשם הפרטי. דוגמה: "ד"ר יוסי כהן" ← שם פרטי: "ד"ר יוסי", שם משפחה: "כהן""#
        }
        TitleHandling::SeparateField => {
            r#"זהה תארי כבוד והעבר אותם לשדה נפרד בשם 'תואר'.
דוגמאות חובה:
- "ד"ר אלעד מאיר" → שם פרטי: "אלעד", שם משפחה: "מאיר", תואר: "ד"ר"
- "מר דוד כהן" → שם פרטי: "דוד", שם משפחה: "כהן", תואר: "מר"
- "גב' שרה לוי" → שם פרטי: "שרה", שם משפחה: "לוי", תואר: "גב'"
חובה לשמור את השם ולהעביר רק את התואר!
תארים נפוצים: ד"ר, מר, גב', גברת, מרת, פרופ', רב, הרב."#
        }
    }
}

/// Gender-assignment instruction, emitted only when the setting is on.
#[must_use]
pub fn gender_clause(settings: &ProcessingSettings) -> Option<&'static str> {
    settings.gender_assignment.then_some(
        "8. שיוך מגדר: נסה לזהות מגדר על בסיס השם הפרטי ורשום בשדה 'מגדר' (זכר/נקבה/לא ידוע).",
    )
}

/// Enrichment instruction, parameterized by the configured field name and
/// usage mode. `None` when enrichment is disabled.
#[must_use]
pub fn enrichment_clause(settings: &ProcessingSettings) -> Option<String> {
    let field = settings.enrichment_field_name();
    match settings.truecaller_usage {
        EnrichmentUsage::Never => None,
        EnrichmentUsage::IfNameMissing => Some(format!(
            "9. Truecaller: אם השם חסר או לא ברור, נסה להעשיר מטלפון ורשום בשדה '{field}' (סימולציה - השתמש בהיגיון לשמות ישראליים נפוצים לפי אזור הטלפון)."
        )),
        EnrichmentUsage::AlwaysEnrich => Some(format!(
            "9. Truecaller: תמיד נסה להעשיר מידע מטלפון ורשום בשדה '{field}' (סימולציה - השתמש בהיגיון לשמות ישראליים נפוצים לפי אזור הטלפון). אם יש בסיס טוב לשם, השאר את המקורי."
        )),
    }
}
