use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};

/// Resolve the positional input into the list of PDFs to process.
///
/// A single `.pdf` file yields exactly that file; a directory yields its
/// immediate `*.pdf` children sorted by name. An empty result is fatal so the
/// run aborts before any remote call is made.
pub fn discover_pdfs(input: &Path) -> Result<Vec<PathBuf>> {
    let raw = input.display().to_string();
    if looks_like_url(&raw) {
        return Err(anyhow!("URL inputs are not supported: {raw}"));
    }
    if !input.exists() {
        return Err(anyhow!("input does not exist: {}", input.display()));
    }

    let mut files = Vec::new();
    if input.is_file() {
        if is_pdf(input) {
            files.push(input.to_path_buf());
        }
    } else if input.is_dir() {
        for entry in std::fs::read_dir(input)
            .with_context(|| format!("reading directory: {}", input.display()))?
        {
            let entry = entry.with_context(|| "reading directory entry")?;
            let path = entry.path();
            if path.is_file() && is_pdf(&path) {
                files.push(path);
            }
        }
        files.sort();
    }

    if files.is_empty() {
        return Err(anyhow!("no PDF files found in {}", input.display()));
    }
    Ok(files)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn looks_like_url(s: &str) -> bool {
    let s = s.to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with("file://")
}
