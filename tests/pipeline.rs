// End-to-end run of every pipeline stage against a small
// synthetic dataset, exchanging real files in a temp directory
// exactly the way the CLI stages do.

use std::path::{Path, PathBuf};

use textgrade::application::{
    combine_use_case::{CombineConfig, CombineUseCase},
    evaluate_use_case::{EvaluateConfig, EvaluateUseCase},
    parse_use_case::{ParseConfig, ParseUseCase},
    predict_use_case::{PredictConfig, PredictUseCase},
    split_use_case::{SplitConfig, SplitUseCase},
    train_use_case::{TrainConfig, TrainUseCase},
    vectorize_use_case::{VectorizeConfig, VectorizeUseCase},
};
use textgrade::data::table::Table;
use textgrade::infra::metrics::MetricsReport;
use textgrade::infra::storage;
use textgrade::ml::regressor::GbdtParams;

/// 30 labeled rows; target grows with the row index so the
/// stratified split has a spread of values to bin over.
fn write_raw_csv(path: &Path) {
    let mut table = Table::new(vec!["text".to_string(), "target".to_string()]);
    for i in 0..30 {
        let text = format!(
            "Sentence number {i} talks about a small cat. It also mentions {i} noisy dogs, quite often."
        );
        table
            .push_row(vec![text, (i as f64 * 0.5).to_string()])
            .unwrap();
    }
    storage::ensure_parent_dir(path).unwrap();
    table.write_csv(path).unwrap();
}

fn parse_and_vectorize(raw: &Path, dir: &Path, part: &str) -> PathBuf {
    let features_json = dir.join(format!("{part}_linguistic.json"));
    ParseUseCase::new(ParseConfig {
        input_path: raw.to_path_buf(),
        text_column: "text".to_string(),
        tagger_model: "heuristic".to_string(),
        output_path: features_json.clone(),
    })
    .execute()
    .unwrap();

    let vectors_bin = dir.join(format!("{part}_vectors.bin"));
    VectorizeUseCase::new(VectorizeConfig {
        input_path: raw.to_path_buf(),
        text_column: "text".to_string(),
        encoder_model: "hashed-32".to_string(),
        output_path: vectors_bin.clone(),
    })
    .execute()
    .unwrap();

    let combined_csv = dir.join(format!("{part}_features.csv"));
    CombineUseCase::new(CombineConfig {
        features_path: features_json,
        vectors_path: vectors_bin,
        output_path: combined_csv.clone(),
    })
    .execute()
    .unwrap();

    combined_csv
}

#[test]
fn full_pipeline_produces_finite_metrics() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();

    let raw_csv = dir.join("raw.csv");
    write_raw_csv(&raw_csv);

    // ── split: 30 rows at 0.2 stratified → 6 dev, 24 train ────────────────────
    let train_csv = dir.join("train.csv");
    let dev_csv = dir.join("dev.csv");
    SplitUseCase::new(SplitConfig {
        input_path: raw_csv,
        dev_fraction: 0.2,
        stratified: true,
        target_column: "target".to_string(),
        seed: 7,
        independent_draws: false,
        train_output_path: train_csv.clone(),
        dev_output_path: dev_csv.clone(),
    })
    .execute()
    .unwrap();

    let train = Table::read_csv(&train_csv).unwrap();
    let dev = Table::read_csv(&dev_csv).unwrap();
    assert_eq!(train.n_rows(), 24);
    assert_eq!(dev.n_rows(), 6);

    // ── features for each part ────────────────────────────────────────────────
    let train_features = parse_and_vectorize(&train_csv, dir, "train");
    let dev_features = parse_and_vectorize(&dev_csv, dir, "dev");

    // ── train ─────────────────────────────────────────────────────────────────
    let model_path = dir.join("model.json");
    TrainUseCase::new(TrainConfig {
        features_path: train_features,
        target_path: train_csv,
        target_column: "target".to_string(),
        model_name: "gbdt".to_string(),
        params: GbdtParams {
            iterations: 15,
            max_depth: 3,
            shrinkage: 0.3,
            min_leaf_size: 1,
        },
        model_output_path: model_path.clone(),
    })
    .execute()
    .unwrap();

    // ── predict ───────────────────────────────────────────────────────────────
    let predictions_csv = dir.join("predictions.csv");
    PredictUseCase::new(PredictConfig {
        features_path: dev_features,
        model_path,
        model_name: "gbdt".to_string(),
        output_column: "prediction".to_string(),
        output_path: predictions_csv.clone(),
    })
    .execute()
    .unwrap();

    let predictions = Table::read_csv(&predictions_csv).unwrap();
    assert_eq!(predictions.n_rows(), 6);

    // ── evaluate ──────────────────────────────────────────────────────────────
    let metrics_json = dir.join("metrics.json");
    EvaluateUseCase::new(EvaluateConfig {
        ground_truth_path: dev_csv,
        ground_truth_column: "target".to_string(),
        prediction_path: predictions_csv,
        prediction_column: "prediction".to_string(),
        output_path: metrics_json.clone(),
    })
    .execute()
    .unwrap();

    let report: MetricsReport = storage::load_json(&metrics_json).unwrap();
    assert!(report.mse.is_finite() && report.mse >= 0.0);
    assert!((report.rmse - report.mse.sqrt()).abs() < 1e-9);
}

#[test]
fn train_with_unknown_model_name_fails() {
    let dir = tempfile::tempdir().unwrap();
    let dir = dir.path();

    let raw_csv = dir.join("raw.csv");
    write_raw_csv(&raw_csv);
    let features = parse_and_vectorize(&raw_csv, dir, "all");

    let err = TrainUseCase::new(TrainConfig {
        features_path: features,
        target_path: raw_csv,
        target_column: "target".to_string(),
        model_name: "XGBRegressor".to_string(),
        params: GbdtParams::default(),
        model_output_path: dir.join("model.json"),
    })
    .execute()
    .unwrap_err();
    assert!(err.to_string().contains("unsupported model"));
}
