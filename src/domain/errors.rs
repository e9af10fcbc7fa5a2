// ============================================================
// Layer 3 — Pipeline Error Taxonomy
// ============================================================
// Every failure in this pipeline is fatal: the stage logs the
// error and the process exits non-zero. No retries, no partial
// recovery. This enum only exists so that the *kind* of failure
// is explicit at the point where it is raised.
//
// Three families:
//   - configuration errors (bad model id, missing column)
//   - data shape errors    (mismatched rows, degenerate splits)
//   - external library errors (propagated through anyhow)

use thiserror::Error;

/// Error type for configuration and data-shape failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A ratio or bin size would divide by zero — empty text,
    /// or a dev fraction so small that no dev rows are requested.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// Two row-aligned tables disagree on row count.
    #[error("shape mismatch: left table has {left} rows, right table has {right}")]
    ShapeMismatch { left: usize, right: usize },

    /// Two aligned sequences disagree on length.
    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A model identifier no implementation claims.
    #[error("unsupported model '{0}'")]
    UnsupportedModel(String),

    /// A configured column is absent from the loaded table.
    #[error("column '{0}' not found in table")]
    MissingColumn(String),
}
