//! Input channels that produce labeled manifests.
//!
//! Two channels are supported, selected by file extension:
//!
//! | Extension | Channel | Manifests | Label |
//! |-----------|---------|-----------|-------|
//! | `.json` | deployment template document | one | the file path |
//! | `.csv` | run log: `timestamp, run id, template JSON` per row, no header | one per row | `"<timestamp>+<run-id>"` |
//!
//! A run log is typically an export of historical deployments, so a single unusable
//! row is skipped with a warning instead of failing the whole log.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, warn};

use crate::core::ArmGraphError;
use crate::manifest::{LabeledManifest, Manifest};

/// Input read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "template.json";

/// The kind of input a path holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A single deployment template.
    Document,
    /// A CSV log of deployment runs.
    RunLog,
}

impl InputKind {
    /// Classify `path` by its extension (case-insensitive).
    pub fn detect(path: &Path) -> Result<Self, ArmGraphError> {
        let extension =
            path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Document),
            "csv" => Ok(Self::RunLog),
            _ => Err(ArmGraphError::UnsupportedInput {
                path: path.display().to_string(),
                extension,
            }),
        }
    }
}

/// Manifests read from one input, plus the run-log rows that had to be skipped.
#[derive(Debug, Default)]
pub struct LoadedInput {
    pub manifests: Vec<LabeledManifest>,
    pub skipped_rows: usize,
}

/// Read every manifest held by `path`.
pub async fn load(path: &Path) -> Result<LoadedInput> {
    let kind = InputKind::detect(path)?;

    if !path.exists() {
        return Err(ArmGraphError::InputNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match kind {
        InputKind::Document => {
            let label = path.display().to_string();
            let manifest = Manifest::from_json(&label, &content)?;
            debug!("Loaded {} resource(s) from {}", manifest.resources.len(), label);
            Ok(LoadedInput {
                manifests: vec![LabeledManifest {
                    label,
                    manifest,
                }],
                skipped_rows: 0,
            })
        }
        InputKind::RunLog => parse_run_log(&path.display().to_string(), &content),
    }
}

/// Parse run-log CSV content.
///
/// `file` is only used in messages.
pub fn parse_run_log(file: &str, content: &str) -> Result<LoadedInput> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut loaded = LoadedInput::default();
    for (index, record) in reader.records().enumerate() {
        let row = index + 1;
        let record = record.map_err(ArmGraphError::from).with_context(|| format!("Failed to read {file}"))?;

        match manifest_from_record(file, row, &record) {
            Ok(labeled) => loaded.manifests.push(labeled),
            Err(err) => {
                warn!("Skipping {}", err);
                loaded.skipped_rows += 1;
            }
        }
    }

    debug!("Loaded {} run(s) from {} ({} skipped)", loaded.manifests.len(), file, loaded.skipped_rows);
    Ok(loaded)
}

fn manifest_from_record(
    file: &str,
    row: usize,
    record: &csv::StringRecord,
) -> Result<LabeledManifest, ArmGraphError> {
    let (Some(timestamp), Some(run_id), Some(document)) = (record.get(0), record.get(1), record.get(2))
    else {
        return Err(ArmGraphError::RunLogError {
            file: file.to_string(),
            row,
            reason: format!("expected 3 columns, found {}", record.len()),
        });
    };

    let label = format!("{timestamp}+{run_id}");
    let manifest = Manifest::from_json(&label, document).map_err(|e| ArmGraphError::RunLogError {
        file: file.to_string(),
        row,
        reason: e.to_string(),
    })?;

    Ok(LabeledManifest {
        label,
        manifest,
    })
}
