mod helper;
mod highlighter;

use jsxlight::{Highlight, HighlightOptions, Token};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::render;

pub fn run(options: HighlightOptions) -> Result<(), ReadlineError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper::new(options)));

    let mut show_tokens = false;

    println!(
        "{} {}",
        "jsxlight".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match trimmed {
                    ".exit" | "exit" => break,
                    ".help" => {
                        print_help();
                        continue;
                    }
                    ".tokens" => {
                        show_tokens = !show_tokens;
                        let state = if show_tokens { "on" } else { "off" };
                        println!("{}", format!("token dump {state}").green());
                        continue;
                    }
                    _ => {}
                }

                let _ = rl.add_history_entry(trimmed);
                run_snippet(&line, &options, show_tokens);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("{}", ".help                show commands".bright_blue());
    println!(
        "{}",
        ".tokens              toggle the record dump".bright_blue()
    );
    println!("{}", ".exit                exit REPL".bright_blue());
}

fn run_snippet(source: &str, options: &HighlightOptions, show_tokens: bool) {
    let mut tokens = Vec::new();
    if let Err(err) = jsxlight::highlight(source.as_bytes(), &mut tokens, options) {
        eprintln!("{} {err}", "error:".red().bold());
        return;
    }
    if show_tokens {
        print!("{}", render::token_dump(source.as_bytes(), &tokens));
    }
    let errors = tokens
        .iter()
        .filter(|t| t.highlight == Highlight::Error)
        .count();
    let summary = format!("{} records, {errors} errors", tokens.len());
    if errors == 0 {
        println!("{}", summary.bright_black());
    } else {
        println!("{}", summary.yellow());
    }
}

/// Whether the editor should keep reading lines before submitting.
///
/// Braces, brackets and parentheses are counted from the highlighted records,
/// so those inside strings, comments and templates are ignored.
pub fn needs_more_input(source: &str, options: &HighlightOptions) -> bool {
    let mut tokens: Vec<Token> = Vec::new();
    if jsxlight::highlight(source.as_bytes(), &mut tokens, &options.with_coalescing(false)).is_err()
    {
        return false;
    }

    let bytes = source.as_bytes();
    let mut depth = 0i32;
    for token in &tokens {
        let opener = match token.highlight {
            Highlight::SymbolParens | Highlight::SymbolBracket | Highlight::SymbolBrace => {
                bytes[token.begin]
            }
            _ => continue,
        };
        match opener {
            b'(' | b'[' | b'{' => depth += 1,
            _ => depth -= 1,
        }
    }

    let unterminated = tokens.last().is_some_and(|last| {
        last.end() == bytes.len()
            && matches!(last.highlight, Highlight::String | Highlight::StringDelimiter)
            && !matches!(bytes.last(), Some(b'\'' | b'"' | b'`'))
    });

    depth > 0 || unterminated || source.trim_end().ends_with('\\')
}
