//! Corpus loading and preparation
//!
//! The corpus lives in a fixed directory layout:
//!
//! ```text
//! Data/
//!   control/    healthy_0.txt, healthy_1.txt, ...
//!   dementia/   dementia_0.txt, dementia_1.txt, ...
//! ```

use super::{Label, Transcript};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Class subdirectories and the filename prefix each one receives
const CLASS_DIRS: &[(&str, &str)] = &[("control", "healthy"), ("dementia", "dementia")];

const TRANSCRIPT_EXT: &str = "txt";

/// Loader for labeled transcript corpora
pub struct CorpusLoader;

impl CorpusLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load every labeled transcript under `data_dir`
    ///
    /// Walks `control/` and `dementia/`, reads each `*.txt` file, and labels
    /// it by its filename prefix. Files without a `healthy`/`dementia` prefix
    /// are skipped with a warning. Entries are visited in sorted filename
    /// order so a seeded split downstream is reproducible.
    pub fn load<P: AsRef<Path>>(&self, data_dir: P) -> Result<Vec<Transcript>> {
        let data_dir = data_dir.as_ref();
        let mut transcripts = Vec::new();

        for (dir_name, _) in CLASS_DIRS {
            let class_dir = data_dir.join(dir_name);
            for path in sorted_transcript_files(&class_dir)? {
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string();

                let Some(label) = Label::from_filename(&file_name) else {
                    warn!("skipping unlabeled transcript: {}", path.display());
                    continue;
                };

                let text = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read transcript: {}", path.display()))?;

                let source = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or(&file_name)
                    .to_string();

                debug!("loaded {} ({} bytes, {})", source, text.len(), label);
                transcripts.push(Transcript::new(source, label, text));
            }
        }

        Ok(transcripts)
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Rename raw transcript files so their filenames carry the class label
///
/// `control/*.txt` becomes `healthy_<i>.txt` and `dementia/*.txt` becomes
/// `dementia_<i>.txt`, with `<i>` assigned in sorted filename order. Files
/// that already have their target name are left alone, so re-running is a
/// no-op. Returns the number of files renamed.
pub fn prepare<P: AsRef<Path>>(data_dir: P) -> Result<usize> {
    let data_dir = data_dir.as_ref();
    let mut renamed = 0;

    for (dir_name, prefix) in CLASS_DIRS {
        let class_dir = data_dir.join(dir_name);

        for (idx, old_path) in sorted_transcript_files(&class_dir)?.into_iter().enumerate() {
            let new_name = format!("{}_{}.{}", prefix, idx, TRANSCRIPT_EXT);
            let new_path = class_dir.join(&new_name);

            if old_path == new_path {
                continue;
            }
            if new_path.exists() {
                bail!(
                    "refusing to overwrite {} while renaming {}",
                    new_path.display(),
                    old_path.display()
                );
            }

            fs::rename(&old_path, &new_path).with_context(|| {
                format!(
                    "Failed to rename {} -> {}",
                    old_path.display(),
                    new_path.display()
                )
            })?;
            debug!("renamed {} -> {}", old_path.display(), new_name);
            renamed += 1;
        }
    }

    Ok(renamed)
}

/// List `*.txt` files in a class directory, sorted by filename
fn sorted_transcript_files(class_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(class_dir)
        .with_context(|| format!("Failed to open class directory: {}", class_dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(TRANSCRIPT_EXT)
        })
        .collect();

    files.sort();
    Ok(files)
}
