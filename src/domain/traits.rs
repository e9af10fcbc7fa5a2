// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline core only ever sees these three capabilities.
// The concrete tagger, embedding model, and regressor live in
// Layer 5 (ml) and can be swapped without touching any stage:
//   - HeuristicTagger  implements Tagger
//   - HashedEncoder    implements TextEncoder
//   - GbdtRegressor    implements Regressor
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::annotations::ParsedText;

// ─── Tagger ───────────────────────────────────────────────────────────────────
/// Any component that can annotate raw text with linguistic labels.
///
/// Implementations:
///   - HeuristicTagger → lexicon + suffix rules, no external model
///   - (future) an ONNX part-of-speech model behind the same contract
pub trait Tagger {
    /// Tokenize, segment, and label one document.
    fn parse(&self, text: &str) -> Result<ParsedText>;
}

// ─── TextEncoder ──────────────────────────────────────────────────────────────
/// Any component that can turn a batch of texts into fixed-length
/// numeric vectors. Order-preserving: output\[i\] encodes texts\[i\].
pub trait TextEncoder {
    /// Encode the whole batch at once. No streaming — the caller is
    /// responsible for the batch fitting in memory.
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Length of every vector this encoder produces.
    fn dimension(&self) -> usize;
}

// ─── Regressor ────────────────────────────────────────────────────────────────
/// A trainable regression model over dense feature rows.
///
/// `fit` consumes feature rows plus one target per row; `predict`
/// is read-only and returns one value per input row, in order.
pub trait Regressor {
    /// Fit the model in place on the given features and targets.
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()>;

    /// Predict one value per feature row.
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>>;
}
