//! Train a random forest on transcript linguistic features
//!
//! Usage: cargo run --bin train_forest -- --data Data --trees 100

use anyhow::{ensure, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use speech_ml::corpus::{CorpusLoader, Label};
use speech_ml::data::Dataset;
use speech_ml::features::FeatureExtractor;
use speech_ml::metrics::ClassificationReport;
use speech_ml::models::{ForestConfig, RandomForest};
use speech_ml::report::BarChart;

#[derive(Parser, Debug)]
#[command(author, version, about = "Train random forest on transcript features")]
struct Args {
    /// Corpus directory containing control/ and dementia/
    #[arg(short, long, default_value = "Data")]
    data: PathBuf,

    /// Number of trees
    #[arg(short, long, default_value = "100")]
    trees: usize,

    /// Max tree depth
    #[arg(long, default_value = "10")]
    max_depth: usize,

    /// Test set ratio
    #[arg(long, default_value = "0.2")]
    test_ratio: f64,

    /// Random seed for the split and the forest
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Write the importance chart values to this CSV file
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
    println!("{}", "Speech ML - Random Forest".bold().blue());
    println!("{}", "=".repeat(60).blue());

    // Load corpus
    info!("loading corpus from {}", args.data.display());
    let transcripts = CorpusLoader::new().load(&args.data)?;
    ensure!(!transcripts.is_empty(), "no labeled transcripts found");

    // Extract features
    info!("extracting linguistic features");
    let extractor = FeatureExtractor::new();
    let dataset = Dataset::from_transcripts(&transcripts, &extractor);

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

    let split = dataset.random_split(args.test_ratio, args.seed);
    println!("Train set: {} samples", split.train.n_samples());
    println!("Test set:  {} samples\n", split.test.n_samples());

    // Train
    let config = ForestConfig {
        n_trees: args.trees,
        max_depth: args.max_depth,
        seed: args.seed,
        ..Default::default()
    };

    info!("fitting random forest with {} trees", args.trees);
    let start = std::time::Instant::now();
    let mut forest = RandomForest::new(config);
    forest.fit(&split.train);
    println!("Training completed in {:.2}s\n", start.elapsed().as_secs_f64());

    // Evaluate
    let predictions = forest.predict(&split.test);
    let report =
        ClassificationReport::compute(&split.test.labels, &predictions, Label::class_names());

    println!("{}", "=== Classification Report ===".bold());
    println!("{}", report);
    println!("{}", report.confusion.display());

    if let Some(oob) = forest.oob_score() {
        println!("OOB accuracy: {:.2}%\n", oob * 100.0);
    }

    // Chart: which features the forest leans on
    let entries: Vec<(String, f64)> = forest
        .feature_importance_ranking()
        .into_iter()
        .map(|(name, imp)| (name.to_string(), imp))
        .collect();

    let chart = BarChart::magnitude("Feature Importance (Random Forest)", entries);
    println!("{}", chart.render());

    if let Some(path) = &args.chart_csv {
        chart.save_csv(path)?;
        println!("Saved chart values to {}", path.display());
    }

    Ok(())
}
