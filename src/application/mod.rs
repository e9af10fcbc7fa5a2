// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One orchestrator per pipeline stage. Every use case has the
// same shape: load inputs → transform through Layer 4/5 → save
// outputs, logging shape and path at each step. No ML math and
// no argument parsing here — those belong to Layers 5 and 1.
//
// Stages never call each other in-process; every arrow between
// them is a file on disk.

// Stage 1a: linguistic feature extraction
pub mod parse_use_case;

// Stage 1b: text vectorization
pub mod vectorize_use_case;

// Stage 2: positional feature merge
pub mod combine_use_case;

// Stage 3: train/dev partitioning
pub mod split_use_case;

// Stage 4: model fitting
pub mod train_use_case;

// Stage 5: prediction
pub mod predict_use_case;

// Stage 6: metric computation
pub mod evaluate_use_case;
