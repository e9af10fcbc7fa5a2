// ============================================================
// Layer 4 — Vector Table
// ============================================================
// A rows × dim array of f32 embeddings, stored flat. This is
// the binary artifact the vectorize stage writes and the
// combine stage reads (bitcode-encoded on disk).

use anyhow::Result;

use crate::domain::errors::PipelineError;

/// Fixed-width numeric array: one embedding vector per input row.
#[derive(Debug, Clone, PartialEq, bitcode::Encode, bitcode::Decode)]
pub struct VectorTable {
    dim: usize,
    data: Vec<f32>,
}

impl VectorTable {
    /// Build from per-row vectors. All rows must share one length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let dim = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * dim);
        for row in &rows {
            if row.len() != dim {
                return Err(PipelineError::LengthMismatch {
                    expected: dim,
                    actual: row.len(),
                }
                .into());
            }
            data.extend_from_slice(row);
        }
        Ok(Self { dim, data })
    }

    /// Vector length (columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of vectors (rows).
    pub fn n_rows(&self) -> usize {
        if self.dim == 0 { 0 } else { self.data.len() / self.dim }
    }

    /// One row as a slice.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }
}
