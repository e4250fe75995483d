//! Batch driver: applies the annotator across many files in parallel.
//!
//! Each file is an independent `process` call; a failing file is
//! recorded and the batch always runs to completion.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;

use crate::annotate::Annotator;
use crate::config::Config;
use crate::error::DocstampError;

/// What happened to one file during a run.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Updated,
    Unchanged,
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub files: Vec<FileResult>,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub duration_ms: u128,
}

impl RunReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

pub struct Engine {
    annotator: Annotator,
    dry_run: bool,
}

impl Engine {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            annotator: Annotator::new(
                config.comments.clone(),
                config.visibilities.clone(),
                config.kinds.clone(),
            ),
            dry_run: config.dry_run,
        }
    }

    /// Annotates every file, writing back only those that changed.
    #[must_use]
    pub fn run(&self, files: &[PathBuf]) -> RunReport {
        let start = std::time::Instant::now();

        let results: Vec<FileResult> = files
            .par_iter()
            .map(|path| FileResult {
                path: path.clone(),
                outcome: self.annotate_file(path),
            })
            .collect();

        let updated = count(&results, |o| matches!(o, Outcome::Updated));
        let unchanged = count(&results, |o| matches!(o, Outcome::Unchanged));
        let failed = count(&results, |o| matches!(o, Outcome::Failed { .. }));

        RunReport {
            files: results,
            updated,
            unchanged,
            failed,
            duration_ms: start.elapsed().as_millis(),
        }
    }

    fn annotate_file(&self, path: &Path) -> Outcome {
        match self.try_annotate(path) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failed {
                message: e.to_string(),
            },
        }
    }

    fn try_annotate(&self, path: &Path) -> crate::error::Result<Outcome> {
        let source = fs::read_to_string(path).map_err(|e| io_error(e, path))?;
        let output = self.annotator.process(&source)?;

        if output == source {
            return Ok(Outcome::Unchanged);
        }

        if !self.dry_run {
            fs::write(path, &output).map_err(|e| io_error(e, path))?;
        }

        Ok(Outcome::Updated)
    }
}

fn count(results: &[FileResult], pred: impl Fn(&Outcome) -> bool) -> usize {
    results.iter().filter(|r| pred(&r.outcome)).count()
}

fn io_error(source: std::io::Error, path: &Path) -> DocstampError {
    DocstampError::Io {
        source,
        path: path.to_path_buf(),
    }
}
