// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Stage 4: fit the gradient-boosted regressor.
//
//   Step 1: Load the combined feature CSV
//   Step 2: Load the target column from the split CSV
//   Step 3: Resolve the model name (UnsupportedModel if unknown)
//   Step 4: Fit — all learning happens inside the library
//   Step 5: Persist the fitted model opaquely
//
// Hyperparameters pass straight through; nothing is validated
// locally beyond row counts.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::table::Table;
use crate::domain::traits::Regressor;
use crate::infra::storage;
use crate::ml::regressor::{regressor_for, GbdtParams};

/// Configuration for one training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Combined feature CSV (all columns numeric)
    pub features_path: PathBuf,
    /// Labeled CSV holding the training targets
    pub target_path: PathBuf,
    /// Column of `target_path` holding the target value
    pub target_column: String,
    /// Model identifier ("gbdt")
    pub model_name: String,
    /// Hyperparameters passed through to the library
    pub params: GbdtParams,
    /// Where the serialized model is written
    pub model_output_path: PathBuf,
}

pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        tracing::info!("Config loaded: {:?}", cfg);

        let features = Table::read_csv(&cfg.features_path)?;
        tracing::info!(
            "Train features loaded from '{}': {} rows × {} columns",
            cfg.features_path.display(),
            features.n_rows(),
            features.columns().len()
        );

        let targets = Table::read_csv(&cfg.target_path)?.column_f64(&cfg.target_column)?;
        tracing::info!(
            "Train target loaded from '{}': {} values",
            cfg.target_path.display(),
            targets.len()
        );

        let mut model = regressor_for(&cfg.model_name, cfg.params.clone())?;
        tracing::info!(
            "Start fitting model '{}' with params {:?}",
            cfg.model_name,
            cfg.params
        );
        model.fit(&features.to_f64_rows()?, &targets)?;
        tracing::info!("Model '{}' fitted", cfg.model_name);

        storage::ensure_parent_dir(&cfg.model_output_path)?;
        model.save(&cfg.model_output_path)?;
        tracing::info!("Model saved to '{}'", cfg.model_output_path.display());
        Ok(())
    }
}
