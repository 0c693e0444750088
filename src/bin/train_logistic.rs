//! Train a logistic regression on transcript linguistic features
//!
//! Usage: cargo run --bin train_logistic -- --data Data

use anyhow::{ensure, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use speech_ml::corpus::{CorpusLoader, Label};
use speech_ml::data::Dataset;
use speech_ml::features::FeatureExtractor;
use speech_ml::metrics::ClassificationReport;
use speech_ml::models::{LogisticRegression, Penalty};
use speech_ml::report::BarChart;

#[derive(Parser, Debug)]
#[command(author, version, about = "Train logistic regression on transcript features")]
struct Args {
    /// Corpus directory containing control/ and dementia/
    #[arg(short, long, default_value = "Data")]
    data: PathBuf,

    /// Test set ratio
    #[arg(long, default_value = "0.2")]
    test_ratio: f64,

    /// Random seed for the train/test split
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Maximum gradient descent iterations
    #[arg(long, default_value = "1000")]
    max_iter: usize,

    /// Learning rate
    #[arg(long, default_value = "0.1")]
    learning_rate: f64,

    /// L2 regularization strength (off when omitted)
    #[arg(long)]
    l2: Option<f64>,

    /// Write the coefficient chart values to this CSV file
    #[arg(long)]
    chart_csv: Option<PathBuf>,

    /// Write the extracted feature dataset to this CSV file
    #[arg(long)]
    dataset_csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("speech_ml=info")
        .init();

    let args = Args::parse();

    println!("{}", "=".repeat(60).blue());
    println!("{}", "Speech ML - Logistic Regression".bold().blue());
    println!("{}", "=".repeat(60).blue());

    // Load corpus
    info!("loading corpus from {}", args.data.display());
    let transcripts = CorpusLoader::new().load(&args.data)?;
    ensure!(!transcripts.is_empty(), "no labeled transcripts found");

    // Extract features
    info!("extracting linguistic features");
    let extractor = FeatureExtractor::new();
    let mut dataset = Dataset::from_transcripts(&transcripts, &extractor);

    let (healthy, dementia) = dataset.class_counts();
    println!(
        "\nCorpus: {} transcripts ({} healthy, {} dementia), {} features",
        dataset.n_samples(),
        healthy,
        dementia,
        dataset.n_features()
    );

    if let Some(path) = &args.dataset_csv {
        dataset.save_csv(path)?;
        println!("Saved feature dataset to {}", path.display());
    }

    // Gradient descent needs comparable feature scales
    dataset.standardize();

    let split = dataset.random_split(args.test_ratio, args.seed);
    println!("Train set: {} samples", split.train.n_samples());
    println!("Test set:  {} samples\n", split.test.n_samples());

    // Train
    let penalty = match args.l2 {
        Some(alpha) => Penalty::L2(alpha),
        None => Penalty::None,
    };
    let mut model = LogisticRegression::new(args.learning_rate, args.max_iter, 1e-6, penalty);

    info!("fitting logistic regression");
    model.fit(&split.train.features_array(), &split.train.labels_array())?;

    // Evaluate
    let predictions = model.predict(&split.test.features_array())?.to_vec();
    let report =
        ClassificationReport::compute(&split.test.labels, &predictions, Label::class_names());

    println!("{}", "=== Classification Report ===".bold());
    println!("{}", report);
    println!("{}", report.confusion.display());
    println!("{}", model.summary(&dataset.feature_names));

    // Chart: which features push toward the dementia class
    let entries: Vec<(String, f64)> = dataset
        .feature_names
        .iter()
        .cloned()
        .zip(model.coefficients()?.iter().copied())
        .collect();

    let chart = BarChart::signed("Feature Coefficients (Logistic Regression)", entries);
    println!("{}", chart.render());

    if let Some(path) = &args.chart_csv {
        chart.save_csv(path)?;
        println!("Saved chart values to {}", path.display());
    }

    Ok(())
}
