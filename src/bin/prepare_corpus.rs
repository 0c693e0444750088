//! Rename raw transcript files to carry their class prefix
//!
//! Usage: cargo run --bin prepare_corpus -- --data Data

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use speech_ml::corpus;

#[derive(Parser, Debug)]
#[command(author, version, about = "Label transcript files by renaming them")]
struct Args {
    /// Corpus directory containing control/ and dementia/
    #[arg(short, long, default_value = "Data")]
    data: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("speech_ml=info")
        .init();

    let args = Args::parse();

    info!("preparing corpus at {}", args.data.display());
    let renamed = corpus::prepare(&args.data)?;

    println!("Renamed {} transcript files under {}", renamed, args.data.display());
    Ok(())
}
