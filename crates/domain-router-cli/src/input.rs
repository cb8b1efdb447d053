use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

/// File list from the command line, or from `reader` one path per line when
/// no argument was given
pub fn file_list(args: Vec<String>, reader: impl BufRead) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    let mut files = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read file list from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            files.push(line.to_string());
        }
    }
    Ok(files)
}

/// Directory files are resolved against: `--root`, or
/// `<config directory>/<domain>/<sub...>` under the working directory
pub fn resolve_root(root: Option<String>, directory: &str, domain: &str, sub: &[&str]) -> Result<String> {
    if let Some(root) = root {
        return Ok(root);
    }

    let mut path = std::env::current_dir().context("Failed to read current directory")?;
    path.push(directory);
    path.push(domain);
    for part in sub {
        path.push(part);
    }
    Ok(display_path(&path))
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
