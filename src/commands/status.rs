//! `otln status` — diff the sample folder against index.json (read-only).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use crate::manifest::model::{Manifest, format_bytes};
use crate::scanner::{diff, tree};
use crate::workspace;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

pub fn run(dir: Option<PathBuf>) -> Result<()> {
    let dir = workspace::resolve_dir(dir)?;
    run_in(&dir)
}

pub fn run_in(dir: &Path) -> Result<()> {
    let report = compute(dir)?;
    print_report(&report);
    Ok(())
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute the drift report for the sample folder at `dir`.
pub fn compute(dir: &Path) -> Result<diff::ManifestDiff> {
    let index_path = workspace::index_path(dir);
    let json = fs::read_to_string(&index_path).with_context(|| {
        format!(
            "no {} in {} — run `otln sync` first",
            workspace::INDEX_FILE_NAME,
            dir.display()
        )
    })?;
    let manifest: Manifest = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a valid manifest", index_path.display()))?;
    let disk = tree::scan(dir)?;
    Ok(diff::compute(&disk, &manifest))
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_report(d: &diff::ManifestDiff) {
    if !d.added.is_empty() {
        println!("\n  {}", "New files (not in index):".green().bold());
        for path in &d.added {
            println!("    {}", path);
        }
    }

    if !d.removed.is_empty() {
        println!("\n  {}", "Indexed files gone from disk:".red().bold());
        for path in &d.removed {
            println!("    {}", path);
        }
    }

    if !d.resized.is_empty() {
        println!("\n  {}", "Files changed since last sync:".yellow().bold());
        for (path, indexed, on_disk) in &d.resized {
            println!(
                "    {}  [{} -> {}]",
                path,
                size_or_zero(*indexed),
                size_or_zero(*on_disk)
            );
        }
    }

    if d.is_clean() {
        println!("\n  {}", "Sample folder is in sync.".green());
    } else {
        println!("\n  {}", "Run `otln sync` to update the index.".dark_grey());
    }
}

fn size_or_zero(bytes: u64) -> String {
    let s = format_bytes(bytes);
    if s.is_empty() { "0 KB".to_string() } else { s }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
