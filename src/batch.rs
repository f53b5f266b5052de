//! Batch rendering of orders-phase test cases.
//!
//! Renders every `*.json` test case in a directory to `<stem>.svg` in an
//! output directory. Each case gets its own session, so cases are rendered
//! concurrently on a rayon pool with nothing shared but the configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::RenderConfig;
use crate::map::BackgroundMap;
use crate::protocol::{load_orders_test, ProtocolError};
use crate::render::RenderError;
use crate::session::{RenderOutcome, Session};

/// Errors that stop a whole batch.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to list {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors for a single test case. The batch carries on past these.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the test case JSON files.
    pub input_dir: PathBuf,
    /// Directory the SVG files are written to. Created if missing.
    pub output_dir: PathBuf,
    /// Number of worker threads.
    pub threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            threads: 4,
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// SVG files written, sorted.
    pub rendered: Vec<PathBuf>,
    /// Inputs that failed, with the reason.
    pub failed: Vec<(PathBuf, CaseError)>,
}

/// The `*.json` files directly inside `dir`, sorted by name.
pub fn list_cases(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(dir).map_err(|source| BatchError::ReadDir {
        path: dir.display().to_string(),
        source,
    })?;
    let mut cases: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    cases.sort();
    Ok(cases)
}

/// Renders one test case to `output_dir/<stem>.svg`.
pub fn render_case(
    input: &Path,
    output_dir: &Path,
    config: &RenderConfig,
    background: Option<&BackgroundMap>,
) -> Result<PathBuf, CaseError> {
    let test = load_orders_test(input)?;
    let mut session = Session::new(config.clone());
    let id = session.request();
    if let RenderOutcome::Rendered { primitives } = session.complete_orders_test(id, &test)? {
        info!(case = %input.display(), primitives, "rendered case");
    }

    let name = input.file_name().unwrap_or(input.as_os_str());
    let output = output_dir.join(name).with_extension("svg");
    fs::write(&output, session.document(background)).map_err(|source| CaseError::Write {
        path: output.display().to_string(),
        source,
    })?;
    Ok(output)
}

/// Renders every test case in `batch.input_dir`.
pub fn render_batch(
    batch: &BatchConfig,
    config: &RenderConfig,
    background: Option<&BackgroundMap>,
) -> Result<BatchReport, BatchError> {
    let cases = list_cases(&batch.input_dir)?;
    fs::create_dir_all(&batch.output_dir).map_err(|source| BatchError::CreateDir {
        path: batch.output_dir.display().to_string(),
        source,
    })?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(batch.threads.max(1))
        .build()?;

    let completed = AtomicUsize::new(0);
    let total = cases.len();
    let results: Vec<(PathBuf, Result<PathBuf, CaseError>)> = pool.install(|| {
        cases
            .into_par_iter()
            .map(|input| {
                let result = render_case(&input, &batch.output_dir, config, background);
                let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if let Err(e) = &result {
                    warn!(case = %input.display(), error = %e, "case failed ({}/{})", n, total);
                }
                (input, result)
            })
            .collect()
    });

    let mut report = BatchReport::default();
    for (input, result) in results {
        match result {
            Ok(output) => report.rendered.push(output),
            Err(e) => report.failed.push((input, e)),
        }
    }
    report.rendered.sort();
    info!(
        rendered = report.rendered.len(),
        failed = report.failed.len(),
        "batch complete"
    );
    Ok(report)
}
