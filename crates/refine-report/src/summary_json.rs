//! JSON export of the batch summary.

use std::path::Path;

use anyhow::{Context, Result};

use refine_model::ProcessingSummary;

/// Write the summary as pretty-printed JSON.
///
/// The serialized shape follows the conditional-metric contract: inactive
/// settings leave their keys out entirely.
pub fn write_summary_json(path: &Path, summary: &ProcessingSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serialize summary")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_metrics_are_absent_from_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("summary.json");
        let summary = ProcessingSummary {
            names_fixed: 2,
            input_rows: 3,
            output_rows: 2,
            rows_deleted: 1,
            ..ProcessingSummary::default()
        };
        write_summary_json(&path, &summary).expect("write");

        let text = std::fs::read_to_string(&path).expect("read back");
        assert!(text.contains("\"names_fixed\": 2"));
        assert!(!text.contains("genders_assigned"));
        assert!(!text.contains("enrichment"));
    }
}
