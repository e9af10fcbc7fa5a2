// ============================================================
// Layer 2 — ParseUseCase
// ============================================================
// Stage 1a: linguistic parsing. Reads the raw-text CSV, runs
// the tagger over every text, and writes one JSON feature map
// per row, preserving row order.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::table::Table;
use crate::infra::storage;
use crate::ml::{linguistic, tagger::tagger_for};

/// Configuration for one linguistic-parsing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConfig {
    /// CSV file holding the raw texts
    pub input_path: PathBuf,
    /// Column of `input_path` containing the text
    pub text_column: String,
    /// Tagger identifier (e.g. "heuristic")
    pub tagger_model: String,
    /// Where the JSON feature list is written
    pub output_path: PathBuf,
}

pub struct ParseUseCase {
    config: ParseConfig,
}

impl ParseUseCase {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        tracing::info!("Config loaded: {:?}", cfg);

        let table = Table::read_csv(&cfg.input_path)?;
        tracing::info!(
            "Data loaded from '{}': {} rows",
            cfg.input_path.display(),
            table.n_rows()
        );

        let texts = table.column_str(&cfg.text_column)?;
        let tagger = tagger_for(&cfg.tagger_model)?;
        let features = linguistic::extract_all(&texts, tagger.as_ref())?;
        tracing::info!(
            "Extracted {} feature maps ({} features each)",
            features.len(),
            linguistic::feature_names().len()
        );

        storage::save_json(&cfg.output_path, &features)?;
        tracing::info!("Features saved to '{}'", cfg.output_path.display());
        Ok(())
    }
}
