// ============================================================
// Layer 5 — Heuristic Tagger
// ============================================================
// Built-in implementation of the Tagger trait: closed-class
// lexicon plus suffix rules over unicode word boundaries. It
// needs no model files and is fully deterministic, which is
// what the feature extractor needs for reproducible runs.
//
// It is deliberately shallow. Coarse tags land in the universal
// tag set, fine tags in Penn Treebank, dependency labels are a
// flat per-class guess (no parse tree), and entities cover only
// numbers and acronym/proper-noun shapes. Any label it never
// emits still exists in the glossary and counts as zero.

use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::annotations::{ParsedText, TokenAnnotation};
use crate::domain::traits::Tagger;

// Closed-class word lists. Lowercased lookup.
const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every",
    "some", "any", "no", "another", "both", "either", "neither",
];
const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
    "them", "myself", "yourself", "himself", "herself", "itself", "who",
    "whom", "which", "what", "something", "anything", "nothing", "everyone",
];
const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "its", "our", "their"];
const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "with", "from", "into", "onto", "over", "under",
    "about", "against", "between", "through", "during", "before", "after",
    "above", "below", "of", "for", "within", "without", "across", "behind",
];
const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];
const SUBORDINATORS: &[&str] = &[
    "because", "if", "although", "though", "while", "unless", "since",
    "whereas", "whether", "until",
];
const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "am", "be", "been", "being", "has", "have",
    "had", "do", "does", "did",
];
const MODALS: &[&str] = &["will", "would", "can", "could", "shall", "should", "may", "might", "must"];
const INTERJECTIONS: &[&str] = &["oh", "ah", "wow", "hey", "ouch", "oops", "hmm", "yes", "no"];

/// Resolve a tagger identifier to a concrete tagger.
pub fn tagger_for(model_id: &str) -> Result<Box<dyn Tagger>> {
    match model_id {
        "heuristic" => Ok(Box::new(HeuristicTagger::new())),
        other => Err(crate::domain::errors::PipelineError::UnsupportedModel(other.to_string()).into()),
    }
}

/// Lexicon + suffix-rule tagger over unicode segmentation.
#[derive(Debug, Default, Clone)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }
}

impl Tagger for HeuristicTagger {
    fn parse(&self, text: &str) -> Result<ParsedText> {
        // unicode_sentences cannot handle empty input; no text
        // means no tokens and no sentences
        if text.trim().is_empty() {
            return Ok(ParsedText::default());
        }

        let sentence_count = text
            .unicode_sentences()
            .filter(|s| s.chars().any(|c| !c.is_whitespace()))
            .count();

        let mut tokens = Vec::new();
        let mut entity_labels = Vec::new();

        // Tracks whether the next word opens a sentence, so that
        // sentence-initial capitalization is not read as a proper noun
        let mut sentence_start = true;

        for piece in text.split_word_bounds() {
            if piece.chars().all(char::is_whitespace) {
                continue;
            }

            let annotation = tag_token(piece, sentence_start);
            if let Some(entity) = entity_for(piece, &annotation, sentence_start) {
                entity_labels.push(entity.to_string());
            }

            sentence_start = matches!(piece, "." | "!" | "?");
            tokens.push(annotation);
        }

        Ok(ParsedText { tokens, sentence_count, entity_labels })
    }
}

// ─── Per-token classification ─────────────────────────────────────────────────

fn tag_token(token: &str, sentence_start: bool) -> TokenAnnotation {
    let lower = token.to_lowercase();

    let (pos, tag, dep): (&str, &str, &str) = if token.chars().all(|c| !c.is_alphanumeric()) {
        punct_annotation(token)
    } else if is_numeric(token) {
        ("NUM", "CD", "nummod")
    } else if DETERMINERS.contains(&lower.as_str()) {
        ("DET", "DT", "det")
    } else if POSSESSIVE_PRONOUNS.contains(&lower.as_str()) {
        ("PRON", "PRP$", "poss")
    } else if PRONOUNS.contains(&lower.as_str()) {
        ("PRON", "PRP", "nsubj")
    } else if COORDINATORS.contains(&lower.as_str()) {
        ("CCONJ", "CC", "cc")
    } else if SUBORDINATORS.contains(&lower.as_str()) {
        ("SCONJ", "IN", "mark")
    } else if MODALS.contains(&lower.as_str()) {
        ("AUX", "MD", "aux")
    } else if AUXILIARIES.contains(&lower.as_str()) {
        ("AUX", "VBZ", "aux")
    } else if lower == "not" || lower == "n't" {
        ("PART", "RB", "neg")
    } else if lower == "to" {
        ("PART", "TO", "aux")
    } else if PREPOSITIONS.contains(&lower.as_str()) {
        ("ADP", "IN", "prep")
    } else if INTERJECTIONS.contains(&lower.as_str()) {
        ("INTJ", "UH", "intj")
    } else if !sentence_start && starts_uppercase(token) {
        ("PROPN", "NNP", "compound")
    } else if lower.ends_with("ly") && lower.len() > 3 {
        ("ADV", "RB", "advmod")
    } else if lower.ends_with("ing") && lower.len() > 4 {
        ("VERB", "VBG", "ROOT")
    } else if lower.ends_with("ed") && lower.len() > 3 {
        ("VERB", "VBD", "ROOT")
    } else if has_adjective_suffix(&lower) {
        ("ADJ", "JJ", "amod")
    } else if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
        ("NOUN", "NNS", "dep")
    } else {
        ("NOUN", "NN", "dep")
    };

    TokenAnnotation {
        lemma: lemmatize(&lower),
        pos: pos.to_string(),
        tag: tag.to_string(),
        dep: dep.to_string(),
    }
}

fn punct_annotation(token: &str) -> (&'static str, &'static str, &'static str) {
    let tag = match token {
        "." | "!" | "?" | "…" => ".",
        "," => ",",
        ":" | ";" => ":",
        "(" | "[" | "{" => "-LRB-",
        ")" | "]" | "}" => "-RRB-",
        "\"" | "'" | "’" | "”" | "“" | "`" => "''",
        "-" | "–" | "—" => "HYPH",
        "$" => "$",
        "#" => "#",
        _ => "NFP",
    };
    ("PUNCT", tag, "punct")
}

fn is_numeric(token: &str) -> bool {
    let stripped: String = token.chars().filter(|c| *c != ',' && *c != '.').collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_acronym(token: &str) -> bool {
    token.len() >= 2 && token.chars().all(|c| c.is_ascii_uppercase())
}

fn has_adjective_suffix(lower: &str) -> bool {
    lower.len() > 4
        && ["ous", "ful", "ive", "able", "ible", "al", "ic", "ish"]
            .iter()
            .any(|s| lower.ends_with(s))
}

fn entity_for(token: &str, annotation: &TokenAnnotation, sentence_start: bool) -> Option<&'static str> {
    if annotation.pos == "NUM" {
        Some("CARDINAL")
    } else if is_acronym(token) && !is_numeric(token) {
        Some("ORG")
    } else if annotation.pos == "PROPN" && !sentence_start {
        Some("PERSON")
    } else {
        None
    }
}

// Crude suffix-stripping lemmatizer, only used for unique-token
// counting — close variants of one word should collapse.
fn lemmatize(lower: &str) -> String {
    if let Some(stem) = lower.strip_suffix("ies").filter(|s| s.len() > 2) {
        return format!("{stem}y");
    }
    if let Some(stem) = lower.strip_suffix("ing").filter(|s| s.len() > 2) {
        return stem.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ed").filter(|s| s.len() > 2) {
        return stem.to_string();
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && lower.len() > 3 {
        return lower[..lower.len() - 1].to_string();
    }
    lower.to_string()
}
