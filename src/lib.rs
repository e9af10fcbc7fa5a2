//! Stage-by-stage feature engineering and modeling pipeline for
//! text-based regression.
//!
//! Each stage is a subcommand of the `textgrade` binary; every
//! stage reads its inputs from disk and writes its outputs to
//! disk, so stages never share state in-process:
//!
//! ```text
//! raw text ──▶ parse ────┐
//!          └▶ vectorize ─┴▶ combine ──▶ train ──▶ predict ──▶ evaluate
//! raw text ──▶ split (train/dev partitioning of the labels)
//! ```
//!
//! The layers, outermost first: `cli` (argument parsing),
//! `application` (stage orchestration), `domain` (plain data and
//! capability traits), `data` (tables, splitting, combining),
//! `ml` (tagger, encoders, regressor), `infra` (disk formats and
//! metrics).

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;
