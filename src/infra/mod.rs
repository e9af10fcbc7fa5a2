// ============================================================
// Layer 6 — Infrastructure
// ============================================================
// Disk formats and metric computation. Nothing here knows what
// a feature means — it only moves artifacts in and out of files
// and turns aligned number sequences into a report.

/// JSON / binary-vector load and save helpers
pub mod storage;

/// mse/rmse evaluation and the metrics report
pub mod metrics;
