//! `otln sync` — scan the sample folder and regenerate index.json.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use crossterm::style::Stylize;

use crate::manifest::model::Manifest;
use crate::scanner::tree;
use crate::workspace;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

pub fn run(dir: Option<PathBuf>) -> Result<()> {
    let dir = match workspace::resolve_dir(dir) {
        Ok(dir) => dir,
        Err(err) => {
            // Missing sample folder is a warning, not a failure.
            println!("  {}", format!("{err:#}").yellow());
            return Ok(());
        }
    };
    run_in(&dir)
}

pub fn run_in(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        println!(
            "  {}",
            format!("{} is not a folder — nothing to index", dir.display()).yellow()
        );
        return Ok(());
    }

    let manifest = build_manifest(dir)?;
    let count = manifest.files.len();
    write_manifest(dir, &manifest)?;

    println!(
        "  {} {} {}",
        "Indexed".green().bold(),
        count.to_string().green().bold(),
        format!("file{} into {}", plural(count), workspace::INDEX_FILE_NAME).green()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Manifest generation
// ---------------------------------------------------------------------------

/// Scan `dir` and assemble a fresh manifest with the current timestamp.
pub fn build_manifest(dir: &Path) -> Result<Manifest> {
    let files = tree::scan(dir)?;
    Ok(Manifest {
        source: dir.display().to_string(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        files,
    })
}

fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<()> {
    let path = workspace::index_path(dir);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json + "\n")
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
