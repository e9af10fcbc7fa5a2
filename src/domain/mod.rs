// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define the core
// concepts of the pipeline. Rules for this layer:
//   - NO ML library types allowed here
//   - NO file I/O
//   - Only plain data and narrow contracts
//
// The stage orchestrators in Layer 2 depend on the traits here,
// never on a concrete tagger, encoder, or regressor.

// Token and document annotations produced by a tagger
pub mod annotations;

// Fatal error taxonomy for configuration and data-shape failures
pub mod errors;

// The frozen reference table of linguistic tag names
pub mod glossary;

// Core abstractions (traits) that Layer 5 implements
pub mod traits;
