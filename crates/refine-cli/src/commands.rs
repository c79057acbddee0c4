//! Command implementations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use refine_infer::{InferenceConfig, Provider, ProviderClient};
use refine_ingest::read_contacts_csv;
use refine_model::{ColumnMapping, ProcessingSettings, ProcessingState, ProcessingSummary};
use refine_pipeline::{BatchOptions, process_batch};
use refine_report::{write_cleaned_csv, write_detailed_csv, write_summary_json};

use crate::cli::{ProcessArgs, ProviderArg};
use crate::progress::render_progress;

/// Paths and counts of a completed process run.
pub struct ProcessOutcome {
    pub cleaned: PathBuf,
    pub detailed: PathBuf,
    pub summary_path: PathBuf,
    pub summary: ProcessingSummary,
}

pub fn run_defaults() -> Result<()> {
    let json = serde_json::to_string_pretty(&ProcessingSettings::default())
        .context("serialize default settings")?;
    println!("{json}");
    Ok(())
}

pub async fn run_process(args: &ProcessArgs) -> Result<ProcessOutcome> {
    let table = read_contacts_csv(&args.input)?;
    let mapping = mapping_from_args(args);
    mapping.validate()?;
    let settings = load_settings(args.settings.as_deref());

    let provider = match args.provider {
        ProviderArg::Groq => Provider::Groq,
        ProviderArg::Openai => Provider::OpenAi,
    };
    let config = InferenceConfig {
        model: args.model.clone(),
        ..InferenceConfig::new(provider, args.api_key.clone())
    };
    let client = ProviderClient::from_config(&config)?;

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("output")
    });
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    info!(
        rows = table.rows.len(),
        output_dir = %output_dir.display(),
        "processing batch"
    );

    let (progress_tx, progress_rx) = watch::channel(ProcessingState::new(table.rows.len()));
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });
    let progress_task = (!args.no_progress).then(|| tokio::spawn(render_progress(progress_rx)));

    let options = BatchOptions {
        inter_call_delay: Duration::from_millis(args.delay_ms),
    };
    let run = process_batch(
        &table.rows,
        &mapping,
        &settings,
        &client,
        &options,
        &progress_tx,
        &cancel,
    )
    .await;

    drop(progress_tx);
    if let Some(task) = progress_task {
        let _ = task.await;
    }
    let result = run?;

    let cleaned = output_dir.join("cleaned_contacts.csv");
    let detailed = output_dir.join("detailed_report.csv");
    let summary_path = output_dir.join("summary.json");
    write_cleaned_csv(&cleaned, &result.contacts, &settings)?;
    write_detailed_csv(&detailed, &result.detailed_log, &table.headers, &settings)?;
    write_summary_json(&summary_path, &result.summary)?;

    Ok(ProcessOutcome {
        cleaned,
        detailed,
        summary_path,
        summary: result.summary,
    })
}

fn mapping_from_args(args: &ProcessArgs) -> ColumnMapping {
    ColumnMapping {
        full_name: args.full_name_column.clone(),
        first_name: args.first_name_column.clone(),
        last_name: args.last_name_column.clone(),
        phone: args.phone_column.clone(),
        email: args.email_column.clone(),
        address: args.address_column.clone(),
    }
}

/// Load settings from the given file, falling back to the documented
/// defaults when the file is unavailable or malformed.
fn load_settings(path: Option<&Path>) -> ProcessingSettings {
    let Some(path) = path else {
        return ProcessingSettings::default();
    };
    match std::fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %path.display(), %error, "settings malformed, using defaults");
                ProcessingSettings::default()
            }
        },
        Err(error) => {
            warn!(path = %path.display(), %error, "settings unavailable, using defaults");
            ProcessingSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_file_falls_back_to_defaults() {
        let settings = load_settings(Some(Path::new("/nonexistent/settings.json")));
        assert_eq!(settings, ProcessingSettings::default());
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").expect("write temp settings");
        let settings = load_settings(Some(&path));
        assert_eq!(settings, ProcessingSettings::default());
    }

    #[test]
    fn settings_file_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        let expected = ProcessingSettings {
            gender_assignment: false,
            ..ProcessingSettings::default()
        };
        let json = serde_json::to_string(&expected).expect("serialize");
        std::fs::write(&path, json).expect("write temp settings");
        assert_eq!(load_settings(Some(&path)), expected);
    }
}
