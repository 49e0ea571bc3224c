use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "corpus-runner",
    about = "Highlight a directory of JavaScript files and check every scan"
)]
pub struct Cli {
    #[arg(default_value = ".")]
    pub path: PathBuf,

    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Nesting limit passed to the highlighter
    #[arg(long)]
    pub max_nesting: Option<usize>,
}
