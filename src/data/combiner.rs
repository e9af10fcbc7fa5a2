// ============================================================
// Layer 4 — Feature Combiner
// ============================================================
// Merges the linguistic feature table and the embedding vector
// table into one wide table, row by row, BY POSITION. There is
// no join key: row i of the features must describe the same
// text as row i of the vectors, which holds as long as both
// stages read the same input file untouched.
//
// A row-count mismatch means one of the inputs is stale or
// truncated, so it is rejected up front instead of silently
// misaligning every row after the difference.

use anyhow::Result;

use crate::data::table::Table;
use crate::data::vectors::VectorTable;
use crate::domain::errors::PipelineError;

/// Concatenate feature columns and vector columns positionally.
/// Vector columns are named `vec_0..vec_{dim-1}`.
pub fn combine(features: &Table, vectors: &VectorTable) -> Result<Table> {
    if features.n_rows() != vectors.n_rows() {
        return Err(PipelineError::ShapeMismatch {
            left: features.n_rows(),
            right: vectors.n_rows(),
        }
        .into());
    }

    let mut columns: Vec<String> = features.columns().to_vec();
    columns.extend((0..vectors.dim()).map(|i| format!("vec_{i}")));

    let mut combined = Table::new(columns);
    for (i, row) in features.rows().iter().enumerate() {
        let mut wide = row.clone();
        wide.extend(vectors.row(i).iter().map(|v| v.to_string()));
        combined.push_row(wide)?;
    }
    Ok(combined)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn features(n: usize) -> Table {
        let mut t = Table::new(vec!["count_of_tokens".into()]);
        for i in 0..n {
            t.push_row(vec![i.to_string()]).unwrap();
        }
        t
    }

    #[test]
    fn test_combine_preserves_row_count_and_names_columns() {
        let f = features(3);
        let v = VectorTable::from_rows(vec![vec![0.1_f32, 0.2]; 3]).unwrap();
        let c = combine(&f, &v).unwrap();
        assert_eq!(c.n_rows(), 3);
        assert_eq!(c.columns(), ["count_of_tokens", "vec_0", "vec_1"]);
    }

    #[test]
    fn test_combine_keeps_row_alignment() {
        let f = features(2);
        let v = VectorTable::from_rows(vec![vec![7.0_f32], vec![9.0]]).unwrap();
        let c = combine(&f, &v).unwrap();
        assert_eq!(c.column_f64("vec_0").unwrap(), vec![7.0, 9.0]);
        assert_eq!(c.column_f64("count_of_tokens").unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_combine_rejects_row_count_mismatch() {
        // 10 feature rows vs 9 vector rows → ShapeMismatch
        let f = features(10);
        let v = VectorTable::from_rows(vec![vec![0.0_f32]; 9]).unwrap();
        let err = combine(&f, &v).unwrap_err();
        assert!(err.to_string().contains("shape mismatch"));
    }
}
