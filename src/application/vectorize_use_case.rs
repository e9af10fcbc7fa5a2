// ============================================================
// Layer 2 — VectorizeUseCase
// ============================================================
// Stage 1b: text vectorization. Reads the raw-text CSV, encodes
// every text into one fixed-length vector in a single batch, and
// writes the binary vector array. The whole input is held in
// memory — batch size tuning is the caller's concern.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::table::Table;
use crate::data::vectors::VectorTable;
use crate::infra::storage;
use crate::ml::encoder::encoder_for;

/// Configuration for one vectorization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizeConfig {
    /// CSV file holding the raw texts
    pub input_path: PathBuf,
    /// Column of `input_path` containing the text
    pub text_column: String,
    /// Encoder identifier (e.g. "hashed-256")
    pub encoder_model: String,
    /// Where the binary vector array is written
    pub output_path: PathBuf,
}

pub struct VectorizeUseCase {
    config: VectorizeConfig,
}

impl VectorizeUseCase {
    pub fn new(config: VectorizeConfig) -> Self {
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
        let encoder = encoder_for(&cfg.encoder_model)?;
        let rows = encoder.encode(&texts)?;
        let vectors = VectorTable::from_rows(rows)?;
        tracing::info!(
            "Encoded {} vectors of dimension {}",
            vectors.n_rows(),
            vectors.dim()
        );

        storage::save_vectors(&cfg.output_path, &vectors)?;
        tracing::info!("Vectors saved to '{}'", cfg.output_path.display());
        Ok(())
    }
}
