//! Filesystem walk of the sample folder.
//!
//! Uses the `ignore` crate's walker with an extension allow-list. Only
//! files are indexed; `.DS_Store` and any previously generated
//! `index.json` are always skipped. Returns entries sorted by path, with
//! forward-slash relative paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;

use crate::manifest::model::ManifestEntry;

/// Extensions that make it into the index.
pub const ALLOWED_EXTENSIONS: [&str; 9] = [
    ".md", ".txt", ".pdf", ".doc", ".docx", ".png", ".jpg", ".jpeg", ".webp",
];

/// Scan the sample folder rooted at `dir`.
pub fn scan(dir: &Path) -> Result<Vec<ManifestEntry>> {
    let mut builder = WalkBuilder::new(dir);
    builder
        .hidden(false) // .DS_Store is filtered by name, everything else stays
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .require_git(false);

    let mut entries: Vec<ManifestEntry> = Vec::new();

    for result in builder.build() {
        let entry = result.with_context(|| "error walking sample folder")?;
        let path = entry.path();
        if path == dir || path.is_dir() {
            continue;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name == ".DS_Store" || name == crate::workspace::INDEX_FILE_NAME {
            continue;
        }

        let ext = extension_of(&name);
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            continue;
        }

        let bytes = entry
            .metadata()
            .with_context(|| format!("cannot stat {}", path.display()))?
            .len();

        entries.push(ManifestEntry {
            path: relative_to(dir, path)?,
            bytes,
            ext,
            name,
        });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Lowercased extension including the leading dot; empty when absent.
fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

/// Return the path of `target` relative to `base`, as a forward-slash string.
fn relative_to(base: &Path, target: &Path) -> Result<String> {
    let rel: PathBuf = target
        .strip_prefix(base)
        .with_context(|| format!("{:?} is not under {:?}", target, base))?
        .into();

    // Always use forward slashes, even on Windows.
    let s = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");

    Ok(s)
}
