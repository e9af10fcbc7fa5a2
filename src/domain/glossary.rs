// ============================================================
// Layer 3 — Linguistic Tag Glossary
// ============================================================
// The fixed reference table of tag names that the linguistic
// feature extractor turns into count_<label> / ratio_<label>
// feature pairs.
//
// This table is frozen in source on purpose: if it were read
// from whatever tagger happens to be installed, a tagger
// upgrade could silently change the feature set between runs
// and make old models incompatible with new feature files.
// Labels the current tagger never emits simply count as zero.
//
// Four vocabularies, deduplicated where they overlap (e.g. SYM
// exists both as a universal tag and a fine tag):
//   1. universal (coarse) part-of-speech tags
//   2. Penn Treebank fine-grained tags
//   3. syntactic dependency labels
//   4. named-entity types (OntoNotes scheme)

/// Fixed list of linguistic tag names, one count and one ratio
/// feature per entry. Order defines the feature column order.
pub static GLOSSARY: &[&str] = &[
    // ── universal part-of-speech tags ──
    "ADJ", "ADP", "ADV", "AUX", "CONJ", "CCONJ", "DET", "INTJ", "NOUN", "NUM",
    "PART", "PRON", "PROPN", "PUNCT", "SCONJ", "SYM", "VERB", "X", "EOL",
    "SPACE",
    // ── Penn Treebank fine-grained tags ──
    ".", ",", "-LRB-", "-RRB-", "``", "\"\"", "''", ":", "$", "#", "AFX",
    "CC", "CD", "DT", "EX", "FW", "HYPH", "IN", "JJ", "JJR", "JJS", "LS",
    "MD", "NIL", "NN", "NNP", "NNPS", "NNS", "PDT", "POS", "PRP", "PRP$",
    "RB", "RBR", "RBS", "RP", "TO", "UH", "VB", "VBD", "VBG", "VBN", "VBP",
    "VBZ", "WDT", "WP", "WP$", "WRB", "SP", "ADD", "NFP", "GW", "XX", "BES",
    "HVS",
    // ── syntactic dependency labels ──
    "acl", "acomp", "advcl", "advmod", "agent", "amod", "appos", "attr",
    "aux", "auxpass", "case", "cc", "ccomp", "clf", "complm", "compound",
    "conj", "cop", "csubj", "csubjpass", "dative", "dep", "det", "discourse",
    "dislocated", "dobj", "expl", "fixed", "flat", "goeswith", "hmod", "hyph",
    "infmod", "intj", "iobj", "list", "mark", "meta", "neg", "nmod", "nn",
    "npadvmod", "nsubj", "nsubjpass", "nounmod", "npmod", "num", "number",
    "nummod", "oprd", "obj", "obl", "orphan", "parataxis", "partmod", "pcomp",
    "pobj", "poss", "possessive", "preconj", "prep", "prt", "punct",
    "quantmod", "rcmod", "relcl", "reparandum", "root", "ROOT", "vocative",
    "xcomp",
    // ── named-entity types ──
    "PERSON", "NORP", "FACILITY", "FAC", "ORG", "GPE", "LOC", "PRODUCT",
    "EVENT", "WORK_OF_ART", "LAW", "LANGUAGE", "DATE", "TIME", "PERCENT",
    "MONEY", "QUANTITY", "ORDINAL", "CARDINAL", "PER", "MISC",
];
