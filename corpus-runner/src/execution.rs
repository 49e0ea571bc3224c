use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use colored::Colorize;
use jsxlight::HighlightOptions;
use rayon::prelude::*;
use tracing::debug;

use crate::panic_message::panic_text;
use crate::runner::{CaseResult, check_source};

#[derive(Debug, Default)]
pub struct CorpusSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub records: usize,
    pub failures: Vec<(PathBuf, String)>,
}

pub fn init_thread_pool() {
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(8);

    // Nested templates and JSX recurse on the worker stack.
    rayon::ThreadPoolBuilder::new()
        .stack_size(32 * 1024 * 1024)
        .num_threads(threads)
        .build_global()
        .ok();
}

pub fn run_corpus(files: &[PathBuf], options: &HighlightOptions, verbose: bool) -> CorpusSummary {
    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, check_file(path, options)))
        .collect();

    let mut summary = CorpusSummary::default();
    for (path, result) in results {
        apply_result(&mut summary, path, result, verbose);
    }
    summary
}

fn check_file(path: &Path, options: &HighlightOptions) -> CaseResult {
    let source = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => return CaseResult::Skipped(format!("failed to read file: {err}")),
    };
    debug!(path = %path.display(), len = source.len(), "checking");

    panic::catch_unwind(AssertUnwindSafe(|| check_source(&source, options))).unwrap_or_else(
        |payload| CaseResult::Failed(format!("highlighter panicked: {}", panic_text(&*payload))),
    )
}

fn apply_result(summary: &mut CorpusSummary, path: &Path, result: CaseResult, verbose: bool) {
    match result {
        CaseResult::Passed { records } => {
            summary.passed += 1;
            summary.records += records;
            if verbose {
                println!("{} {} ({records} records)", "PASS".green(), path.display());
            }
        }
        CaseResult::Failed(reason) => {
            summary.failed += 1;
            if verbose {
                println!("{} {} - {}", "FAIL".red(), path.display(), reason);
            }
            summary.failures.push((path.to_path_buf(), reason));
        }
        CaseResult::Skipped(reason) => {
            summary.skipped += 1;
            if verbose {
                println!("{} {} - {}", "SKIP".yellow(), path.display(), reason);
            }
        }
    }
}
