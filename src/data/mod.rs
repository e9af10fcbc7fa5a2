// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between raw CSV files and model-ready tables.
//
// The artifacts flow in this order:
//
//   raw text CSV
//       │
//       ├──▶ feature JSON     (ml::linguistic, via parse stage)
//       │
//       └──▶ vector array     (ml::encoder, via vectorize stage)
//               │
//               ▼
//   combiner          → one wide feature table
//       │
//       ▼
//   splitter          → disjoint train / dev tables
//       │
//       ▼
//   trainer / predictor / evaluator (Layer 5 + infra)
//
// Each module is responsible for exactly one step.

/// Column-addressable table with CSV round-trip
pub mod table;

/// Rows × dim embedding array (binary on disk)
pub mod vectors;

/// Positional merge of feature and vector tables
pub mod combiner;

/// Seeded random and stratified train/dev splitting
pub mod splitter;
