// ============================================================
// Layer 4 — Train/Dev Splitter
// ============================================================
// Partitions a labeled table into disjoint train and dev parts.
//
// Two modes:
//   - non-stratified: seeded shuffle, reserve round(N * fraction)
//     rows for dev (Fisher-Yates via rand::seq::SliceRandom)
//   - stratified by a continuous target: sort rows by target,
//     walk contiguous bins of round(N / desired_dev) rows, draw
//     exactly one row per bin
//
// All size rounding is half-to-even, matching the upstream
// pipeline: desired_dev for 10 rows at 0.25 is round(2.5) = 2,
// not 3. Ties land on exact .5 often enough that the choice is
// observable in the split sizes.
//
// The stratified mode reconstructs the RNG from the same seed
// before every bin draw. Every equal-sized bin therefore yields
// the same relative offset. That is the upstream pipeline's
// observable behavior and callers depend on its exact row
// selection, so it stays. `independent_draws` seeds once and
// draws each bin independently instead.
//
// Invariant: train ∪ dev = input rows, train ∩ dev = ∅.
// Stratified dev size is one row per bin (≈ N / bin_size), which
// only equals round(N * fraction) when N divides evenly.

use std::cmp::Ordering;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::data::table::Table;
use crate::domain::errors::PipelineError;

/// Everything the splitter needs to know about one run.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Fraction of rows reserved for the dev part, in (0, 1)
    pub dev_fraction: f64,
    /// Preserve the target distribution in the dev part
    pub stratified: bool,
    /// Column holding the continuous target (stratified mode only)
    pub target_column: String,
    /// Seed for reproducibility
    pub seed: u64,
    /// Seed once and draw each bin independently instead of
    /// reconstructing the RNG per draw (corrected mode, off by default)
    pub independent_draws: bool,
}

/// Split `table` into (train, dev).
pub fn split(table: &Table, opts: &SplitOptions) -> Result<(Table, Table)> {
    if opts.stratified {
        split_stratified(table, opts)
    } else {
        split_shuffled(table, opts)
    }
}

// Round half to even, like Python's round(). f64::round() rounds
// half away from zero, which over-reserves dev rows on .5 ties.
fn round_half_even(x: f64) -> usize {
    let floor = x.floor();
    if x - floor == 0.5 {
        let f = floor as usize;
        if f % 2 == 0 {
            f
        } else {
            f + 1
        }
    } else {
        x.round() as usize
    }
}

// ─── Non-stratified mode ──────────────────────────────────────────────────────
// Shuffle all row indices with a seeded RNG, then split off the
// dev tail. Any standard shuffle-split qualifies here.
fn split_shuffled(table: &Table, opts: &SplitOptions) -> Result<(Table, Table)> {
    let n = table.n_rows();
    let mut indices: Vec<usize> = (0..n).collect();

    let mut rng = StdRng::seed_from_u64(opts.seed);
    indices.shuffle(&mut rng);

    let dev_count = round_half_even((n as f64) * opts.dev_fraction).min(n);

    // split_off(k) removes elements [k..] and returns them
    let dev_indices = indices.split_off(n - dev_count);

    Ok((table.select_rows(&indices), table.select_rows(&dev_indices)))
}

// ─── Stratified mode ──────────────────────────────────────────────────────────
// Sort by target, then sample one row per contiguous bin so the
// dev part covers the whole target range.
fn split_stratified(table: &Table, opts: &SplitOptions) -> Result<(Table, Table)> {
    let targets = table.column_f64(&opts.target_column)?;
    let n = table.n_rows();

    // Row indices sorted by target ascending; ties keep load order
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        targets[a].partial_cmp(&targets[b]).unwrap_or(Ordering::Equal)
    });

    let desired_dev = round_half_even((n as f64) * opts.dev_fraction);
    if desired_dev == 0 {
        return Err(PipelineError::DivisionByZero(format!(
            "dev fraction {} of {} rows rounds to zero dev samples",
            opts.dev_fraction, n
        ))
        .into());
    }
    let bin_size = round_half_even((n as f64) / (desired_dev as f64));

    // One RNG for the whole run — only consulted in corrected mode
    let mut run_rng = StdRng::seed_from_u64(opts.seed);

    let mut dev_indices = Vec::with_capacity(n / bin_size + 1);
    for bin in order.chunks(bin_size) {
        let offset = if opts.independent_draws {
            run_rng.gen_range(0..bin.len())
        } else {
            // Fresh RNG from the same seed before every draw —
            // equal-sized bins all pick the same relative offset
            StdRng::seed_from_u64(opts.seed).gen_range(0..bin.len())
        };
        dev_indices.push(bin[offset]);
    }

    // Train = everything not drawn, in original row order
    let mut in_dev = vec![false; n];
    for &i in &dev_indices {
        in_dev[i] = true;
    }
    let train_indices: Vec<usize> = (0..n).filter(|&i| !in_dev[i]).collect();

    Ok((table.select_rows(&train_indices), table.select_rows(&dev_indices)))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_table(n: usize) -> Table {
        let mut t = Table::new(vec!["id".into(), "score".into()]);
        for i in 0..n {
            // target strictly increasing so sorted order == row order
            t.push_row(vec![i.to_string(), (i as f64 * 0.5).to_string()])
                .unwrap();
        }
        t
    }

    fn opts(dev_fraction: f64, stratified: bool) -> SplitOptions {
        SplitOptions {
            dev_fraction,
            stratified,
            target_column: "score".into(),
            seed: 42,
            independent_draws: false,
        }
    }

    #[test]
    fn test_stratified_100_rows_at_tenth() {
        // 100 rows, fraction 0.1 → desired 10, bin_size 10 → exactly
        // 10 dev rows and 90 train rows
        let t = labeled_table(100);
        let (train, dev) = split(&t, &opts(0.1, true)).unwrap();
        assert_eq!(dev.n_rows(), 10);
        assert_eq!(train.n_rows(), 90);
    }

    #[test]
    fn test_stratified_partition_is_disjoint_and_exhaustive() {
        let t = labeled_table(100);
        let (train, dev) = split(&t, &opts(0.1, true)).unwrap();

        let mut ids: Vec<String> = train.column_str("id").unwrap();
        ids.extend(dev.column_str("id").unwrap());
        ids.sort_by_key(|s| s.parse::<usize>().unwrap());
        let expected: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_stratified_one_draw_per_bin_covers_target_range() {
        let t = labeled_table(100);
        let (_, dev) = split(&t, &opts(0.1, true)).unwrap();
        let ids: Vec<usize> = dev
            .column_str("id")
            .unwrap()
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        // exactly one drawn row per contiguous bin of 10
        for (bin, &id) in ids.iter().enumerate() {
            assert!(id >= bin * 10 && id < (bin + 1) * 10);
        }
    }

    #[test]
    fn test_stratified_reseeding_picks_same_offset_per_bin() {
        let t = labeled_table(100);
        let (_, dev) = split(&t, &opts(0.1, true)).unwrap();
        let offsets: Vec<usize> = dev
            .column_str("id")
            .unwrap()
            .iter()
            .map(|s| s.parse::<usize>().unwrap() % 10)
            .collect();
        // the per-draw reseeding quirk: all equal-sized bins agree
        assert!(offsets.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_independent_draws_still_partitions() {
        let t = labeled_table(100);
        let mut o = opts(0.1, true);
        o.independent_draws = true;
        let (train, dev) = split(&t, &o).unwrap();
        assert_eq!(train.n_rows() + dev.n_rows(), 100);
        assert_eq!(dev.n_rows(), 10);
    }

    #[test]
    fn test_rounding_ties_go_to_even() {
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(3.5), 4);
        assert_eq!(round_half_even(2.4), 2);
        assert_eq!(round_half_even(2.6), 3);
    }

    #[test]
    fn test_stratified_desired_dev_tie_rounds_to_even() {
        // 10 rows at 0.25: desired = round(2.5) = 2, bin_size = 5
        // → exactly 2 dev rows, not 4
        let t = labeled_table(10);
        let (train, dev) = split(&t, &opts(0.25, true)).unwrap();
        assert_eq!(dev.n_rows(), 2);
        assert_eq!(train.n_rows(), 8);
    }

    #[test]
    fn test_stratified_bin_size_tie_rounds_to_even() {
        // 10 rows at 0.45: desired = round(4.5) = 4, then
        // bin_size = round(10 / 4) = round(2.5) = 2 → 5 bins,
        // one draw each
        let t = labeled_table(10);
        let (_, dev) = split(&t, &opts(0.45, true)).unwrap();
        assert_eq!(dev.n_rows(), 5);
    }

    #[test]
    fn test_stratified_degenerate_fraction_fails() {
        // round(5 * 0.01) == 0 → bin size would divide by zero
        let t = labeled_table(5);
        let err = split(&t, &opts(0.01, true)).unwrap_err();
        assert!(err.to_string().contains("division by zero"));
    }

    #[test]
    fn test_stratified_is_deterministic() {
        let t = labeled_table(50);
        let (_, dev_a) = split(&t, &opts(0.2, true)).unwrap();
        let (_, dev_b) = split(&t, &opts(0.2, true)).unwrap();
        assert_eq!(dev_a.column_str("id").unwrap(), dev_b.column_str("id").unwrap());
    }

    #[test]
    fn test_shuffled_split_sizes() {
        let t = labeled_table(37);
        let (train, dev) = split(&t, &opts(0.25, false)).unwrap();
        assert_eq!(train.n_rows() + dev.n_rows(), 37);
        assert_eq!(dev.n_rows(), 9); // round(37 * 0.25)
    }

    #[test]
    fn test_shuffled_split_is_deterministic() {
        let t = labeled_table(40);
        let (train_a, _) = split(&t, &opts(0.3, false)).unwrap();
        let (train_b, _) = split(&t, &opts(0.3, false)).unwrap();
        assert_eq!(train_a.column_str("id").unwrap(), train_b.column_str("id").unwrap());
    }
}
