use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use jsxlight::diagnostics::source_map::SourceMap;
use jsxlight::{HighlightError, HighlightOptions, Token};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod render;
mod repl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Colored terminal output
    Ansi,
    /// `<span class="hl-...">` markup
    Html,
    /// Raw records as JSON
    Json,
    /// One record per line with its text
    Tokens,
}

#[derive(Parser)]
#[command(name = "jsxlight", about = "Syntax highlighting for JavaScript and JSX")]
struct Cli {
    /// Path to a .js/.jsx file to highlight
    file: Option<PathBuf>,
    /// Highlight inline source instead of a file
    #[arg(long)]
    eval: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Ansi)]
    format: Format,
    /// Emit every record separately instead of merging neighbours
    #[arg(long)]
    no_coalesce: bool,
    /// Maximum nesting of templates and JSX
    #[arg(long)]
    max_nesting: Option<usize>,
    /// JSON file with highlight options; flags override its values
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
    /// List the highlight names with their colors and exit
    #[arg(long)]
    legend: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "jsxlight".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    if cli.legend {
        print!("{}", render::legend());
        return;
    }

    let options = match load_options(&cli) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{} {message}", "error:".red().bold());
            process::exit(1);
        }
    };

    let (source, source_path) = match (&cli.eval, &cli.file) {
        (Some(code), _) => (code.clone().into_bytes(), PathBuf::from("<eval>")),
        (None, Some(file)) => match fs::read(file) {
            Ok(bytes) => (bytes, file.clone()),
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    file.display().yellow()
                );
                process::exit(1);
            }
        },
        (None, None) => {
            if let Err(err) = repl::run(options) {
                eprintln!("{} {err}", "repl error:".red().bold());
                process::exit(1);
            }
            return;
        }
    };

    debug!(
        source = %source_path.display(),
        len = source.len(),
        coalescing = options.coalescing,
        max_nesting = options.max_nesting,
        "highlighting"
    );
    let mut tokens: Vec<Token> = Vec::new();
    if let Err(err) = jsxlight::highlight(&source, &mut tokens, &options) {
        eprintln!("{}", format_highlight_error(&source, &source_path, &err));
        process::exit(1);
    }
    debug!(records = tokens.len(), format = ?cli.format, "rendering");

    match cli.format {
        Format::Ansi => print!("{}", render::ansi(&source, &tokens)),
        Format::Html => println!("{}", jsxlight::render::render_html(&source, &tokens)),
        Format::Json => match jsxlight::render::render_json(&tokens) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                process::exit(1);
            }
        },
        Format::Tokens => print!("{}", render::token_dump(&source, &tokens)),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// File options first, then command-line overrides.
fn load_options(cli: &Cli) -> Result<HighlightOptions, String> {
    let mut options = match &cli.options {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("could not read '{}': {e}", path.display()))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("invalid options in '{}': {e}", path.display()))?
        }
        None => HighlightOptions::default(),
    };
    if cli.no_coalesce {
        options = options.with_coalescing(false);
    }
    if let Some(max_nesting) = cli.max_nesting {
        options = options.with_max_nesting(max_nesting);
    }
    debug!(?options, "options loaded");
    Ok(options)
}

/// Error location followed by the offending line and a caret under the column.
fn format_highlight_error(source: &[u8], source_path: &Path, err: &HighlightError) -> String {
    let map = SourceMap::from_source(source);
    let pos = map.byte_to_pos(err.offset());
    let line = source
        .get(map.line_range(err.offset()))
        .map(String::from_utf8_lossy)
        .unwrap_or_default();
    format!(
        "{} at {}:{}:{}: {}\n  {}\n  {}{}",
        "highlight error".red().bold(),
        source_path.display().to_string().cyan(),
        pos.line,
        pos.col,
        err.to_string().bright_white(),
        line.trim_end_matches('\r'),
        " ".repeat(pos.col - 1),
        "^".red().bold()
    )
}
