// ============================================================
// Layer 5 — Gradient-Boosted Regressor
// ============================================================
// Wraps the gbdt crate (pure-Rust gradient boosted decision
// trees) behind the Regressor trait. The only local logic is
// parameter pass-through, shape checking, and opaque JSON
// persistence of the fitted ensemble; every split decision
// belongs to the library.

use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use serde::{Deserialize, Serialize};

use crate::domain::errors::PipelineError;
use crate::domain::traits::Regressor;

/// The supported model identifier for training and prediction.
pub const GBDT_MODEL_NAME: &str = "gbdt";

/// Hyperparameters passed straight through to the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtParams {
    /// Number of boosting rounds (trees)
    pub iterations: usize,
    /// Maximum depth of each tree
    pub max_depth: u32,
    /// Learning rate applied to each tree's contribution
    pub shrinkage: f64,
    /// Minimum number of samples per leaf
    pub min_leaf_size: usize,
}

impl Default for GbdtParams {
    fn default() -> Self {
        Self {
            iterations: 100,
            max_depth: 4,
            shrinkage: 0.1,
            min_leaf_size: 1,
        }
    }
}

/// Resolve a model name to a trainable regressor. Anything but
/// the gbdt identifier is fatal — there is no fallback model.
pub fn regressor_for(model_name: &str, params: GbdtParams) -> Result<GbdtRegressor> {
    if model_name != GBDT_MODEL_NAME {
        return Err(PipelineError::UnsupportedModel(model_name.to_string()).into());
    }
    Ok(GbdtRegressor::new(params))
}

/// Gradient-boosted decision tree regressor (squared-error loss).
pub struct GbdtRegressor {
    params: GbdtParams,
    model: Option<GBDT>,
}

impl GbdtRegressor {
    pub fn new(params: GbdtParams) -> Self {
        Self { params, model: None }
    }

    /// Persist the fitted ensemble as opaque JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| anyhow!("cannot save a model that has not been fitted"))?;
        let file = fs::File::create(path)
            .with_context(|| format!("cannot create model file '{}'", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), model)
            .with_context(|| format!("cannot serialize model to '{}'", path.display()))?;
        Ok(())
    }

    /// Load a previously saved ensemble, ready for prediction.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).with_context(|| {
            format!(
                "cannot open model file '{}'. Have you run 'train' first?",
                path.display()
            )
        })?;
        let model: GBDT = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("cannot deserialize model from '{}'", path.display()))?;
        Ok(Self { params: GbdtParams::default(), model: Some(model) })
    }
}

impl Regressor for GbdtRegressor {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        if features.len() != targets.len() {
            return Err(PipelineError::LengthMismatch {
                expected: features.len(),
                actual: targets.len(),
            }
            .into());
        }
        let feature_size = features
            .first()
            .map(|r| r.len())
            .ok_or_else(|| anyhow!("cannot fit on an empty feature table"))?;

        let mut cfg = Config::new();
        cfg.set_feature_size(feature_size);
        cfg.set_max_depth(self.params.max_depth);
        cfg.set_iterations(self.params.iterations);
        cfg.set_shrinkage(self.params.shrinkage as f32);
        cfg.set_min_leaf_size(self.params.min_leaf_size);
        cfg.set_loss("SquaredError");
        cfg.set_debug(false);

        let mut training: DataVec = features
            .iter()
            .zip(targets)
            .map(|(row, &y)| {
                let row_f32: Vec<f32> = row.iter().map(|&v| v as f32).collect();
                Data::new_training_data(row_f32, 1.0, y as f32, None)
            })
            .collect();

        let mut model = GBDT::new(&cfg);
        model.fit(&mut training);
        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| anyhow!("cannot predict with an unfitted model"))?;

        let test: DataVec = features
            .iter()
            .map(|row| {
                let row_f32: Vec<f32> = row.iter().map(|&v| v as f32).collect();
                Data::new_test_data(row_f32, None)
            })
            .collect();

        Ok(model.predict(&test).into_iter().map(f64::from).collect())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    // y = 2x, easy for a small tree ensemble to approximate
    fn toy_data() -> (Vec<Vec<f64>>, Vec<f64>) {
        let features: Vec<Vec<f64>> = (0..40).map(|i| vec![i as f64, (i % 3) as f64]).collect();
        let targets: Vec<f64> = (0..40).map(|i| 2.0 * i as f64).collect();
        (features, targets)
    }

    fn small_params() -> GbdtParams {
        GbdtParams { iterations: 20, max_depth: 3, shrinkage: 0.3, min_leaf_size: 1 }
    }

    #[test]
    fn test_prediction_length_matches_input() {
        let (features, targets) = toy_data();
        let mut model = GbdtRegressor::new(small_params());
        model.fit(&features, &targets).unwrap();
        let preds = model.predict(&features).unwrap();
        assert_eq!(preds.len(), features.len());
        assert!(preds.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_fit_learns_the_trend() {
        let (features, targets) = toy_data();
        let mut model = GbdtRegressor::new(small_params());
        model.fit(&features, &targets).unwrap();
        let preds = model.predict(&vec![vec![2.0, 0.0], vec![35.0, 0.0]]).unwrap();
        // larger input → larger prediction on a monotone target
        assert!(preds[1] > preds[0]);
    }

    #[test]
    fn test_mismatched_targets_fail() {
        let (features, mut targets) = toy_data();
        targets.pop();
        let mut model = GbdtRegressor::new(small_params());
        assert!(model.fit(&features, &targets).is_err());
    }

    #[test]
    fn test_unsupported_model_name_fails() {
        let err = regressor_for("XGBRegressor", GbdtParams::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains("unsupported model"));
    }

    #[test]
    fn test_save_load_round_trip_predicts_identically() {
        let (features, targets) = toy_data();
        let mut model = GbdtRegressor::new(small_params());
        model.fit(&features, &targets).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        model.save(&path).unwrap();

        let loaded = GbdtRegressor::load(&path).unwrap();
        assert_eq!(model.predict(&features).unwrap(), loaded.predict(&features).unwrap());
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = GbdtRegressor::new(small_params());
        assert!(model.predict(&[vec![1.0]]).is_err());
    }
}
