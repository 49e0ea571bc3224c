use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const EXTENSIONS: [&str; 4] = ["js", "jsx", "mjs", "cjs"];

pub fn collect_source_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_source_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
        && !is_excluded(path)
}

fn is_excluded(path: &Path) -> bool {
    path.components().any(|part| {
        let text = part.as_os_str().to_string_lossy();
        text == ".git" || text.ends_with(".min.js")
    })
}
