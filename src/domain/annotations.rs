// ============================================================
// Layer 3 — Parsed-Text Annotations
// ============================================================
// Plain structs describing what a tagger produced for one text.
// No tagging logic lives here — only the shape of the result
// that the linguistic feature extractor consumes.

/// Labels attached to a single token by a tagger.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenAnnotation {
    /// Base form of the token, used for unique-token counting
    pub lemma: String,
    /// Coarse part-of-speech tag (universal tag set, e.g. "NOUN")
    pub pos: String,
    /// Fine-grained tag (e.g. Penn Treebank "NNS")
    pub tag: String,
    /// Syntactic dependency label (e.g. "nsubj", "ROOT")
    pub dep: String,
}

/// Everything a tagger extracts from one document.
#[derive(Debug, Clone, Default)]
pub struct ParsedText {
    /// One annotation per token, in document order
    pub tokens: Vec<TokenAnnotation>,
    /// Number of sentences found by the segmenter
    pub sentence_count: usize,
    /// One label per recognized named entity (e.g. "CARDINAL")
    pub entity_labels: Vec<String>,
}

impl ParsedText {
    /// Collect every label this parse produced into one flat list:
    /// coarse tags + fine tags + dependency labels + entity labels.
    /// The feature extractor counts glossary labels against this list.
    pub fn all_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::with_capacity(self.tokens.len() * 3 + self.entity_labels.len());
        labels.extend(self.tokens.iter().map(|t| t.pos.as_str()));
        labels.extend(self.tokens.iter().map(|t| t.tag.as_str()));
        labels.extend(self.tokens.iter().map(|t| t.dep.as_str()));
        labels.extend(self.entity_labels.iter().map(|e| e.as_str()));
        labels
    }
}
