// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Stage 5: apply a fitted model to a feature table. The model
// is loaded read-only; the output is a one-column CSV with one
// prediction per input row, in input order.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::table::Table;
use crate::domain::errors::PipelineError;
use crate::domain::traits::Regressor;
use crate::infra::storage;
use crate::ml::regressor::{GbdtRegressor, GBDT_MODEL_NAME};

/// Configuration for one prediction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictConfig {
    /// Combined feature CSV (all columns numeric)
    pub features_path: PathBuf,
    /// Serialized model from the train stage
    pub model_path: PathBuf,
    /// Model identifier — must match what was trained
    pub model_name: String,
    /// Name of the prediction column in the output CSV
    pub output_column: String,
    /// Where the prediction CSV is written
    pub output_path: PathBuf,
}

pub struct PredictUseCase {
    config: PredictConfig,
}

impl PredictUseCase {
    pub fn new(config: PredictConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        tracing::info!("Config loaded: {:?}", cfg);

        if cfg.model_name != GBDT_MODEL_NAME {
            return Err(PipelineError::UnsupportedModel(cfg.model_name.clone()).into());
        }

        let features = Table::read_csv(&cfg.features_path)?;
        tracing::info!(
            "Features loaded from '{}': {} rows × {} columns",
            cfg.features_path.display(),
            features.n_rows(),
            features.columns().len()
        );

        let model = GbdtRegressor::load(&cfg.model_path)?;
        tracing::info!("Model '{}' loaded from '{}'", cfg.model_name, cfg.model_path.display());

        let predictions = model.predict(&features.to_f64_rows()?)?;
        tracing::info!("Predicted {} values", predictions.len());

        let output = Table::from_f64_columns(vec![(cfg.output_column.clone(), predictions)])?;
        storage::ensure_parent_dir(&cfg.output_path)?;
        output.write_csv(&cfg.output_path)?;
        tracing::info!("Predictions saved to '{}'", cfg.output_path.display());
        Ok(())
    }
}
