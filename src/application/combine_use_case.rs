// ============================================================
// Layer 2 — CombineUseCase
// ============================================================
// Stage 2: merge the linguistic feature list and the vector
// array into one wide CSV feature table. The merge is by row
// position — both inputs must come from the same untouched raw
// CSV, in the same order. A row-count mismatch aborts.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::combiner::combine;
use crate::data::table::Table;
use crate::domain::errors::PipelineError;
use crate::infra::storage;
use crate::ml::linguistic;

/// Configuration for one combine run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineConfig {
    /// JSON feature list from the parse stage
    pub features_path: PathBuf,
    /// Binary vector array from the vectorize stage
    pub vectors_path: PathBuf,
    /// Where the combined CSV table is written
    pub output_path: PathBuf,
}

pub struct CombineUseCase {
    config: CombineConfig,
}

impl CombineUseCase {
    pub fn new(config: CombineConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        tracing::info!("Config loaded: {:?}", cfg);

        let feature_maps: Vec<HashMap<String, f64>> = storage::load_json(&cfg.features_path)?;
        tracing::info!(
            "Features loaded from '{}': {} rows",
            cfg.features_path.display(),
            feature_maps.len()
        );

        let vectors = storage::load_vectors(&cfg.vectors_path)?;
        tracing::info!(
            "Vectors loaded from '{}': {} rows × {}",
            cfg.vectors_path.display(),
            vectors.n_rows(),
            vectors.dim()
        );

        let features = feature_table(&feature_maps)?;
        let combined = combine(&features, &vectors)?;
        tracing::info!(
            "Combined table: {} rows × {} columns",
            combined.n_rows(),
            combined.columns().len()
        );

        storage::ensure_parent_dir(&cfg.output_path)?;
        combined.write_csv(&cfg.output_path)?;
        tracing::info!("Combined features saved to '{}'", cfg.output_path.display());
        Ok(())
    }
}

/// Lay the unordered JSON maps out as a table in the fixed
/// feature schema order, so column order is identical across
/// runs regardless of map iteration order.
fn feature_table(rows: &[HashMap<String, f64>]) -> Result<Table> {
    let names = linguistic::feature_names();
    let mut table = Table::new(names.clone());
    for row in rows {
        let cells = names
            .iter()
            .map(|name| {
                row.get(name)
                    .map(|v| v.to_string())
                    .ok_or_else(|| PipelineError::MissingColumn(name.clone()))
            })
            .collect::<Result<Vec<String>, PipelineError>>()?;
        table.push_row(cells)?;
    }
    Ok(table)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_table_uses_schema_order() {
        let names = linguistic::feature_names();
        let row: HashMap<String, f64> =
            names.iter().enumerate().map(|(i, n)| (n.clone(), i as f64)).collect();
        let table = feature_table(&[row]).unwrap();
        assert_eq!(table.columns(), &names[..]);
        assert_eq!(table.rows()[0][0], "0");
    }

    #[test]
    fn test_feature_table_rejects_missing_keys() {
        let row: HashMap<String, f64> = HashMap::from([("text_length".to_string(), 1.0)]);
        assert!(feature_table(&[row]).is_err());
    }
}
