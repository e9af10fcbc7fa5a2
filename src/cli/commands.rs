// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// One subcommand per pipeline stage, each with its own flags.
// clap's derive macros generate help text, missing-argument
// errors, and string → number conversion.
//
// The From impls at the bottom are the boundary between Layer 1
// and Layer 2 — the application layer never sees clap types.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::{
    combine_use_case::CombineConfig, evaluate_use_case::EvaluateConfig,
    parse_use_case::ParseConfig, predict_use_case::PredictConfig, split_use_case::SplitConfig,
    train_use_case::TrainConfig, vectorize_use_case::VectorizeConfig,
};
use crate::ml::regressor::GbdtParams;

/// The pipeline stages, in the order they are normally run.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract linguistic count/ratio features from raw texts
    Parse(ParseArgs),

    /// Encode raw texts into fixed-length vectors
    Vectorize(VectorizeArgs),

    /// Merge linguistic features and vectors into one table
    Combine(CombineArgs),

    /// Partition a labeled table into train and dev parts
    Split(SplitArgs),

    /// Fit the gradient-boosted regressor
    Train(TrainArgs),

    /// Apply a fitted model to a feature table
    Predict(PredictArgs),

    /// Compare predictions to ground truth (mse/rmse)
    Evaluate(EvaluateArgs),
}

/// Arguments for the `parse` stage.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// CSV file holding the raw texts
    #[arg(long, default_value = "data/raw.csv")]
    pub input: PathBuf,

    /// Column containing the text
    #[arg(long, default_value = "text")]
    pub text_column: String,

    /// Tagger identifier
    #[arg(long, default_value = "heuristic")]
    pub tagger: String,

    /// Output JSON feature list
    #[arg(long, default_value = "data/features/linguistic.json")]
    pub output: PathBuf,
}

impl From<ParseArgs> for ParseConfig {
    fn from(a: ParseArgs) -> Self {
        ParseConfig {
            input_path:   a.input,
            text_column:  a.text_column,
            tagger_model: a.tagger,
            output_path:  a.output,
        }
    }
}

/// Arguments for the `vectorize` stage.
#[derive(Args, Debug)]
pub struct VectorizeArgs {
    /// CSV file holding the raw texts
    #[arg(long, default_value = "data/raw.csv")]
    pub input: PathBuf,

    /// Column containing the text
    #[arg(long, default_value = "text")]
    pub text_column: String,

    /// Encoder identifier ("hashed", "hashed-<dim>", or a
    /// fastembed model id with --features local-embeddings)
    #[arg(long, default_value = "hashed-256")]
    pub model: String,

    /// Output binary vector array
    #[arg(long, default_value = "data/features/vectors.bin")]
    pub output: PathBuf,
}

impl From<VectorizeArgs> for VectorizeConfig {
    fn from(a: VectorizeArgs) -> Self {
        VectorizeConfig {
            input_path:    a.input,
            text_column:   a.text_column,
            encoder_model: a.model,
            output_path:   a.output,
        }
    }
}

/// Arguments for the `combine` stage.
#[derive(Args, Debug)]
pub struct CombineArgs {
    /// JSON feature list from `parse`
    #[arg(long, default_value = "data/features/linguistic.json")]
    pub features: PathBuf,

    /// Binary vector array from `vectorize`
    #[arg(long, default_value = "data/features/vectors.bin")]
    pub vectors: PathBuf,

    /// Output combined CSV table
    #[arg(long, default_value = "data/features/combined.csv")]
    pub output: PathBuf,
}

impl From<CombineArgs> for CombineConfig {
    fn from(a: CombineArgs) -> Self {
        CombineConfig {
            features_path: a.features,
            vectors_path:  a.vectors,
            output_path:   a.output,
        }
    }
}

/// Arguments for the `split` stage.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Labeled CSV file to partition
    #[arg(long, default_value = "data/raw.csv")]
    pub input: PathBuf,

    /// Fraction of rows reserved for dev, in (0, 1)
    #[arg(long, default_value_t = 0.1)]
    pub dev_fraction: f64,

    /// Preserve the target distribution in the dev part
    #[arg(long)]
    pub stratified: bool,

    /// Column holding the continuous target
    #[arg(long, default_value = "target")]
    pub target_column: String,

    /// Seed for reproducibility
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Stratified mode: seed once and draw each bin independently
    /// instead of reconstructing the RNG before every draw
    #[arg(long)]
    pub independent_draws: bool,

    /// Output CSV for the train part
    #[arg(long, default_value = "data/split/train.csv")]
    pub train_output: PathBuf,

    /// Output CSV for the dev part
    #[arg(long, default_value = "data/split/dev.csv")]
    pub dev_output: PathBuf,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            input_path:        a.input,
            dev_fraction:      a.dev_fraction,
            stratified:        a.stratified,
            target_column:     a.target_column,
            seed:              a.seed,
            independent_draws: a.independent_draws,
            train_output_path: a.train_output,
            dev_output_path:   a.dev_output,
        }
    }
}

/// Arguments for the `train` stage.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Combined feature CSV for the train part
    #[arg(long, default_value = "data/features/train.csv")]
    pub features: PathBuf,

    /// Labeled CSV holding the training targets
    #[arg(long, default_value = "data/split/train.csv")]
    pub targets: PathBuf,

    /// Target column in the targets CSV
    #[arg(long, default_value = "target")]
    pub target_column: String,

    /// Model identifier
    #[arg(long, default_value = "gbdt")]
    pub model_name: String,

    /// Number of boosting rounds
    #[arg(long, default_value_t = 100)]
    pub iterations: usize,

    /// Maximum tree depth
    #[arg(long, default_value_t = 4)]
    pub max_depth: u32,

    /// Learning rate
    #[arg(long, default_value_t = 0.1)]
    pub shrinkage: f64,

    /// Minimum number of samples per leaf
    #[arg(long, default_value_t = 1)]
    pub min_leaf_size: usize,

    /// Output path for the serialized model
    #[arg(long, default_value = "models/gbdt.json")]
    pub model_output: PathBuf,
}

impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            features_path:     a.features,
            target_path:       a.targets,
            target_column:     a.target_column,
            model_name:        a.model_name,
            params: GbdtParams {
                iterations:    a.iterations,
                max_depth:     a.max_depth,
                shrinkage:     a.shrinkage,
                min_leaf_size: a.min_leaf_size,
            },
            model_output_path: a.model_output,
        }
    }
}

/// Arguments for the `predict` stage.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Combined feature CSV to predict on
    #[arg(long, default_value = "data/features/dev.csv")]
    pub features: PathBuf,

    /// Serialized model from `train`
    #[arg(long, default_value = "models/gbdt.json")]
    pub model: PathBuf,

    /// Model identifier — must match what was trained
    #[arg(long, default_value = "gbdt")]
    pub model_name: String,

    /// Name of the prediction column in the output
    #[arg(long, default_value = "prediction")]
    pub output_column: String,

    /// Output CSV with one prediction per row
    #[arg(long, default_value = "data/predictions/dev.csv")]
    pub output: PathBuf,
}

impl From<PredictArgs> for PredictConfig {
    fn from(a: PredictArgs) -> Self {
        PredictConfig {
            features_path: a.features,
            model_path:    a.model,
            model_name:    a.model_name,
            output_column: a.output_column,
            output_path:   a.output,
        }
    }
}

/// Arguments for the `evaluate` stage.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// CSV holding the true target values
    #[arg(long, default_value = "data/split/dev.csv")]
    pub ground_truth: PathBuf,

    /// Target column in the ground-truth CSV
    #[arg(long, default_value = "target")]
    pub ground_truth_column: String,

    /// CSV holding the predicted values
    #[arg(long, default_value = "data/predictions/dev.csv")]
    pub predictions: PathBuf,

    /// Prediction column in the predictions CSV
    #[arg(long, default_value = "prediction")]
    pub prediction_column: String,

    /// Output metrics JSON
    #[arg(long, default_value = "reports/metrics.json")]
    pub output: PathBuf,
}

impl From<EvaluateArgs> for EvaluateConfig {
    fn from(a: EvaluateArgs) -> Self {
        EvaluateConfig {
            ground_truth_path:   a.ground_truth,
            ground_truth_column: a.ground_truth_column,
            prediction_path:     a.predictions,
            prediction_column:   a.prediction_column,
            output_path:         a.output,
        }
    }
}
