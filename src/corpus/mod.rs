//! Corpus loading and preparation module
//!
//! Reads labeled speech transcripts from a `control/` + `dementia/`
//! directory layout and renames raw files to carry their class prefix.

mod loader;
mod transcript;

pub use loader::{prepare, CorpusLoader};
pub use transcript::{Label, Transcript};
