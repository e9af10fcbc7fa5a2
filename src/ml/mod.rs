// ============================================================
// Layer 5 — ML Components
// ============================================================
// Concrete implementations of the three domain capabilities:
//
//   Tagger       → tagger::HeuristicTagger
//   TextEncoder  → encoder::HashedEncoder (+ fastembed, optional)
//   Regressor    → regressor::GbdtRegressor
//
// plus the linguistic feature schema built on top of the tagger.
// Each component is selected by a string identifier at the CLI;
// unknown identifiers are an UnsupportedModel error, never a
// silent fallback.

/// Deterministic lexicon + suffix-rule tagger
pub mod tagger;

/// The count/ratio feature schema over tagged text
pub mod linguistic;

/// Hashed bag-of-words and optional fastembed encoders
pub mod encoder;

/// Gradient-boosted decision tree regressor (gbdt crate)
pub mod regressor;
