// ============================================================
// Layer 5 — Text Encoders
// ============================================================
// Implementations of the TextEncoder trait, selected by model
// identifier at the vectorize stage:
//
//   "hashed-<dim>"       → HashedEncoder, deterministic hashed
//                          bag-of-words (no model files, no I/O)
//   fastembed model ids  → real sentence embeddings, only when
//                          built with --features local-embeddings
//
// Any other identifier is an UnsupportedModel error.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::errors::PipelineError;
use crate::domain::traits::TextEncoder;

const DEFAULT_HASHED_DIM: usize = 256;

/// Resolve a model identifier to a concrete encoder.
pub fn encoder_for(model_id: &str) -> Result<Box<dyn TextEncoder>> {
    if model_id == "hashed" {
        return Ok(Box::new(HashedEncoder::new(DEFAULT_HASHED_DIM)));
    }
    if let Some(dim) = model_id.strip_prefix("hashed-") {
        let dim: usize = dim
            .parse()
            .map_err(|_| PipelineError::UnsupportedModel(model_id.to_string()))?;
        if dim == 0 {
            return Err(PipelineError::UnsupportedModel(model_id.to_string()).into());
        }
        return Ok(Box::new(HashedEncoder::new(dim)));
    }

    #[cfg(feature = "local-embeddings")]
    if let Some(encoder) = fastembed_encoder::for_id(model_id)? {
        return Ok(encoder);
    }

    Err(PipelineError::UnsupportedModel(model_id.to_string()).into())
}

// ─── HashedEncoder ────────────────────────────────────────────────────────────
/// Hashed bag-of-words: every lowercased word hashes into one of
/// `dim` buckets with a hash-derived sign, then the vector is
/// L2-normalized. Deterministic for a given input order, which is
/// all the downstream combine/train stages require of a vector.
pub struct HashedEncoder {
    dim: usize,
}

impl HashedEncoder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn encode_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dim];
        for word in text.unicode_words() {
            let hash = stable_hash(&word.to_lowercase());
            let bucket = (hash % self.dim as u64) as usize;
            // top bit decides sign so collisions partially cancel
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl TextEncoder for HashedEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.encode_one(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

fn stable_hash(value: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ─── fastembed encoder (optional) ─────────────────────────────────────────────
#[cfg(feature = "local-embeddings")]
mod fastembed_encoder {
    use anyhow::{Context, Result};
    use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

    use crate::domain::traits::TextEncoder;

    /// Sentence embeddings via fastembed. Downloads ONNX weights
    /// on first use and caches them locally.
    pub struct FastembedEncoder {
        model: TextEmbedding,
        dim: usize,
    }

    impl TextEncoder for FastembedEncoder {
        fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            self.model
                .embed(texts.to_vec(), None)
                .context("fastembed embedding failed")
        }

        fn dimension(&self) -> usize {
            self.dim
        }
    }

    /// Map a model identifier to a fastembed model, or None if the
    /// id does not name one (the caller then reports UnsupportedModel).
    pub fn for_id(model_id: &str) -> Result<Option<Box<dyn TextEncoder>>> {
        let (kind, dim) = match model_id {
            "all-minilm-l6-v2" => (EmbeddingModel::AllMiniLML6V2, 384),
            "bge-small-en-v1.5" => (EmbeddingModel::BGESmallENV15, 384),
            _ => return Ok(None),
        };
        let model = TextEmbedding::try_new(InitOptions::new(kind))
            .with_context(|| format!("cannot initialize embedding model '{model_id}'"))?;
        Ok(Some(Box::new(FastembedEncoder { model, dim })))
    }
}
