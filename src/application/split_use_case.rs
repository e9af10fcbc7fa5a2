// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Stage 3: partition the labeled table into train and dev CSVs.
// Stratified mode keeps the target distribution in the dev part
// by drawing one row per sorted-target bin; see data::splitter
// for the sampling details (including the seeding quirk).

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::splitter::{split, SplitOptions};
use crate::data::table::Table;
use crate::infra::storage;

/// Configuration for one train/dev split run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Labeled CSV file to partition
    pub input_path: PathBuf,
    /// Fraction of rows reserved for dev, in (0, 1)
    pub dev_fraction: f64,
    /// Preserve the target distribution in the dev part
    pub stratified: bool,
    /// Column holding the continuous target
    pub target_column: String,
    /// Seed for reproducibility
    pub seed: u64,
    /// Corrected stratified sampling (seed once, draw per bin)
    pub independent_draws: bool,
    /// Where the train part is written
    pub train_output_path: PathBuf,
    /// Where the dev part is written
    pub dev_output_path: PathBuf,
}

pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        tracing::info!("Config loaded: {:?}", cfg);

        let table = Table::read_csv(&cfg.input_path)?;
        tracing::info!(
            "Data loaded from '{}': {} rows",
            cfg.input_path.display(),
            table.n_rows()
        );

        let options = SplitOptions {
            dev_fraction: cfg.dev_fraction,
            stratified: cfg.stratified,
            target_column: cfg.target_column.clone(),
            seed: cfg.seed,
            independent_draws: cfg.independent_draws,
        };
        let (train, dev) = split(&table, &options)?;
        tracing::info!("Data split: {} train rows, {} dev rows", train.n_rows(), dev.n_rows());

        storage::ensure_parent_dir(&cfg.train_output_path)?;
        train.write_csv(&cfg.train_output_path)?;
        tracing::info!("Train data saved to '{}'", cfg.train_output_path.display());

        storage::ensure_parent_dir(&cfg.dev_output_path)?;
        dev.write_csv(&cfg.dev_output_path)?;
        tracing::info!("Dev data saved to '{}'", cfg.dev_output_path.display());
        Ok(())
    }
}
