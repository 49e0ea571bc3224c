use std::process;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use jsxlight::HighlightOptions;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::discovery::collect_source_files;
use crate::execution::{CorpusSummary, init_thread_pool, run_corpus};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    init_thread_pool();

    let mut options = HighlightOptions::default();
    if let Some(max_nesting) = cli.max_nesting {
        options = options.with_max_nesting(max_nesting);
    }

    let files = collect_source_files(&cli.path);
    println!(
        "{} {} source files...\n",
        "Highlighting".bold().cyan(),
        files.len()
    );

    let summary = run_corpus(&files, &options, cli.verbose);
    print_totals(&summary, start.elapsed().as_secs_f64());

    if summary.failed > 0 {
        if !cli.verbose {
            print_failure_sample(&summary.failures);
        }
        process::exit(1);
    }
}

fn print_totals(summary: &CorpusSummary, elapsed_secs: f64) {
    println!("\n{}", "=".repeat(60));
    println!(
        "Passed: {} | Failed: {} | Skipped: {}",
        summary.passed.to_string().green().bold(),
        summary.failed.to_string().red().bold(),
        summary.skipped.to_string().yellow().bold()
    );
    println!(
        "{} records in {:.2}s",
        summary.records,
        elapsed_secs
    );
    println!("{}", "=".repeat(60));
}

fn print_failure_sample(failures: &[(std::path::PathBuf, String)]) {
    let max_rows = 10;
    let shown = failures.len().min(max_rows);

    println!("\n{}", "Sample failures:".red().bold());
    for (path, reason) in failures.iter().take(shown) {
        println!("  {} - {}", path.display(), reason);
    }
    if failures.len() > shown {
        println!(
            "  ... and {} more (use --verbose for all)",
            failures.len() - shown
        );
    }
}
