// ============================================================
// Layer 6 — Evaluation Metrics
// ============================================================
// Compares predictions to ground truth. Two numbers come out:
//   mse  — mean squared error
//   rmse — sqrt(mse), same unit as the target
//
// The report is created once per evaluation run and written as
// JSON; it is never mutated afterwards.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::errors::PipelineError;

/// The metrics mapping the evaluate stage writes to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub mse: f64,
    pub rmse: f64,
}

/// Compute mse/rmse over two order-aligned sequences.
pub fn evaluate(y_true: &[f64], y_pred: &[f64]) -> Result<MetricsReport> {
    if y_true.len() != y_pred.len() {
        return Err(PipelineError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        }
        .into());
    }
    if y_true.is_empty() {
        return Err(PipelineError::DivisionByZero(
            "cannot average errors over zero predictions".to_string(),
        )
        .into());
    }

    let mse = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum::<f64>()
        / y_true.len() as f64;

    Ok(MetricsReport { mse, rmse: mse.sqrt() })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_prediction_is_zero_error() {
        let report = evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(report.mse, 0.0);
        assert_eq!(report.rmse, 0.0);
    }

    #[test]
    fn test_unit_error() {
        let report = evaluate(&[0.0, 0.0], &[1.0, 1.0]).unwrap();
        assert_eq!(report.mse, 1.0);
        assert_eq!(report.rmse, 1.0);
    }

    #[test]
    fn test_rmse_is_sqrt_of_mse() {
        let report = evaluate(&[0.0, 0.0], &[2.0, 2.0]).unwrap();
        assert_eq!(report.mse, 4.0);
        assert_eq!(report.rmse, 2.0);
    }

    #[test]
    fn test_length_mismatch_fails() {
        let err = evaluate(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }

    #[test]
    fn test_empty_sequences_fail() {
        assert!(evaluate(&[], &[]).is_err());
    }
}
