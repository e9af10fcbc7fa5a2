// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Stage 6: compare predictions to ground truth. Each input CSV
// names its own target column (the dev file keeps the original
// label name, the prediction file whatever the predict stage
// wrote). The report is a small JSON mapping {mse, rmse}.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::table::Table;
use crate::infra::metrics::evaluate;
use crate::infra::storage;

/// Configuration for one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateConfig {
    /// CSV holding the true target values
    pub ground_truth_path: PathBuf,
    /// Target column in the ground-truth CSV
    pub ground_truth_column: String,
    /// CSV holding the predicted values
    pub prediction_path: PathBuf,
    /// Prediction column in the prediction CSV
    pub prediction_column: String,
    /// Where the metrics JSON is written
    pub output_path: PathBuf,
}

pub struct EvaluateUseCase {
    config: EvaluateConfig,
}

impl EvaluateUseCase {
    pub fn new(config: EvaluateConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        tracing::info!("Config loaded: {:?}", cfg);

        let y_true =
            Table::read_csv(&cfg.ground_truth_path)?.column_f64(&cfg.ground_truth_column)?;
        tracing::info!(
            "True target loaded from '{}': {} values",
            cfg.ground_truth_path.display(),
            y_true.len()
        );

        let y_pred =
            Table::read_csv(&cfg.prediction_path)?.column_f64(&cfg.prediction_column)?;
        tracing::info!(
            "Predicted target loaded from '{}': {} values",
            cfg.prediction_path.display(),
            y_pred.len()
        );

        let report = evaluate(&y_true, &y_pred)?;
        tracing::info!("Metrics: mse={:.6}, rmse={:.6}", report.mse, report.rmse);

        storage::save_json(&cfg.output_path, &report)?;
        tracing::info!("Metrics saved to '{}'", cfg.output_path.display());
        Ok(())
    }
}
