// ============================================================
// Layer 5 — Linguistic Feature Extractor
// ============================================================
// Turns one tagged document into a flat name → value mapping:
//
//   base statistics        text_length, count_of_tokens,
//                          count_unique_tokens, ratio_unique_tokens,
//                          count_sentences, tokens_per_sentence
//   per-glossary-label     count_<label> and ratio_<label>
//
// The idea is to describe how grammatically and morphologically
// complex a text is — how hard its structure is to read.
//
// The key set is fixed: 6 base features plus two per glossary
// entry, identical for every record in every run. Empty text is
// an error, not a zero row — the ratio features would divide by
// zero.

use std::collections::HashMap;

use anyhow::Result;

use crate::domain::errors::PipelineError;
use crate::domain::glossary::GLOSSARY;
use crate::domain::traits::Tagger;

/// The full ordered feature schema. Base statistics first, then
/// one count/ratio pair per glossary label in glossary order.
/// The combine stage uses this order for its output columns.
pub fn feature_names() -> Vec<String> {
    let mut names = vec![
        "text_length".to_string(),
        "count_of_tokens".to_string(),
        "count_unique_tokens".to_string(),
        "ratio_unique_tokens".to_string(),
        "count_sentences".to_string(),
        "tokens_per_sentence".to_string(),
    ];
    for label in GLOSSARY {
        names.push(format!("count_{label}"));
        names.push(format!("ratio_{label}"));
    }
    names
}

/// Extract the feature mapping for one text.
pub fn extract(text: &str, tagger: &dyn Tagger) -> Result<HashMap<String, f64>> {
    let parsed = tagger.parse(text)?;

    let count_of_tokens = parsed.tokens.len();
    let count_sentences = parsed.sentence_count;
    if count_of_tokens == 0 || count_sentences == 0 {
        return Err(PipelineError::DivisionByZero(
            "text has no tokens or no sentences; ratio features are undefined".to_string(),
        )
        .into());
    }

    let unique_lemmas: std::collections::HashSet<&str> =
        parsed.tokens.iter().map(|t| t.lemma.as_str()).collect();
    let count_unique = unique_lemmas.len();

    let mut features = HashMap::with_capacity(6 + 2 * GLOSSARY.len());
    features.insert("text_length".to_string(), text.chars().count() as f64);
    features.insert("count_of_tokens".to_string(), count_of_tokens as f64);
    features.insert("count_unique_tokens".to_string(), count_unique as f64);
    features.insert(
        "ratio_unique_tokens".to_string(),
        count_unique as f64 / count_of_tokens as f64,
    );
    features.insert("count_sentences".to_string(), count_sentences as f64);
    features.insert(
        "tokens_per_sentence".to_string(),
        count_of_tokens as f64 / count_sentences as f64,
    );

    // One flat list of every label this parse produced, then a
    // count and a token-count ratio per glossary entry
    let mut label_counts: HashMap<&str, usize> = HashMap::new();
    for label in parsed.all_labels() {
        *label_counts.entry(label).or_insert(0) += 1;
    }
    for label in GLOSSARY {
        let count = label_counts.get(label).copied().unwrap_or(0);
        features.insert(format!("count_{label}"), count as f64);
        features.insert(
            format!("ratio_{label}"),
            count as f64 / count_of_tokens as f64,
        );
    }

    Ok(features)
}

/// Extract features for a whole batch, preserving input order.
pub fn extract_all(texts: &[String], tagger: &dyn Tagger) -> Result<Vec<HashMap<String, f64>>> {
    texts.iter().map(|t| extract(t, tagger)).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::tagger::HeuristicTagger;

    const SAMPLE: &str = "The quick brown fox jumped over the lazy dog. It was quick.";

    #[test]
    fn test_base_statistics() {
        let tagger = HeuristicTagger::new();
        let f = extract(SAMPLE, &tagger).unwrap();

        assert!(f["count_of_tokens"] >= 1.0);
        assert_eq!(f["count_sentences"], 2.0);
        assert_eq!(f["text_length"], SAMPLE.chars().count() as f64);

        let ratio = f["ratio_unique_tokens"];
        assert!(ratio > 0.0 && ratio <= 1.0);
        // "the" and "quick" repeat, so uniqueness is strictly below 1
        assert!(ratio < 1.0);
    }

    #[test]
    fn test_fixed_key_set() {
        let tagger = HeuristicTagger::new();
        let f = extract(SAMPLE, &tagger).unwrap();
        let names = feature_names();

        assert_eq!(f.len(), names.len());
        for name in &names {
            assert!(f.contains_key(name), "missing feature '{name}'");
        }
    }

    #[test]
    fn test_glossary_ratios_are_bounded() {
        let tagger = HeuristicTagger::new();
        let f = extract(SAMPLE, &tagger).unwrap();
        for label in crate::domain::glossary::GLOSSARY {
            let ratio = f[&format!("ratio_{label}")];
            assert!((0.0..=1.0).contains(&ratio), "ratio_{label} = {ratio}");
        }
    }

    #[test]
    fn test_counts_reflect_the_parse() {
        let tagger = HeuristicTagger::new();
        let f = extract(SAMPLE, &tagger).unwrap();
        // two sentences → two sentence-final periods
        assert_eq!(f["count_PUNCT"], 2.0);
        // two determiners: "The" and "the"
        assert_eq!(f["count_DET"], 2.0);
    }

    #[test]
    fn test_empty_text_fails_with_division_by_zero() {
        let tagger = HeuristicTagger::new();
        let err = extract("", &tagger).unwrap_err();
        assert!(err.to_string().contains("division by zero"));
    }

    #[test]
    fn test_extract_all_preserves_order_and_length() {
        let tagger = HeuristicTagger::new();
        let texts = vec!["One sentence here.".to_string(), "Another one here.".to_string()];
        let rows = extract_all(&texts, &tagger).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["text_length"], texts[0].chars().count() as f64);
    }
}
