// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and dispatches to the matching use case in Layer 2 —
// this layer only routes, never computes.
//
// The stages are normally run in this order:
//   split → parse → vectorize → combine (per part)
//   → train → predict → evaluate

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::Commands;

use crate::application::{
    combine_use_case::CombineUseCase, evaluate_use_case::EvaluateUseCase,
    parse_use_case::ParseUseCase, predict_use_case::PredictUseCase, split_use_case::SplitUseCase,
    train_use_case::TrainUseCase, vectorize_use_case::VectorizeUseCase,
};

/// Stage-by-stage text regression pipeline.
#[derive(Parser, Debug)]
#[command(
    name = "textgrade",
    version,
    about = "Extract text features, train a gradient-boosted regressor, and score predictions."
)]
pub struct Cli {
    /// The pipeline stage to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and run the corresponding stage.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Parse(args) => {
                ParseUseCase::new(args.into()).execute()?;
                println!("Linguistic parsing complete.");
            }
            Commands::Vectorize(args) => {
                VectorizeUseCase::new(args.into()).execute()?;
                println!("Vectorization complete.");
            }
            Commands::Combine(args) => {
                CombineUseCase::new(args.into()).execute()?;
                println!("Feature combination complete.");
            }
            Commands::Split(args) => {
                SplitUseCase::new(args.into()).execute()?;
                println!("Train/dev split complete.");
            }
            Commands::Train(args) => {
                TrainUseCase::new(args.into()).execute()?;
                println!("Training complete. Model saved.");
            }
            Commands::Predict(args) => {
                PredictUseCase::new(args.into()).execute()?;
                println!("Prediction complete.");
            }
            Commands::Evaluate(args) => {
                EvaluateUseCase::new(args.into()).execute()?;
                println!("Evaluation complete.");
            }
        }
        Ok(())
    }
}
