//! Drift between the generated manifest and the live sample folder.

use std::collections::HashMap;

use crate::manifest::model::{Manifest, ManifestEntry};

/// Result of diffing the sample folder against `index.json`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    /// Paths on disk but not in the manifest.
    pub added: Vec<String>,
    /// Paths in the manifest but gone from disk.
    pub removed: Vec<String>,
    /// Paths whose size changed: `(path, manifest bytes, disk bytes)`.
    pub resized: Vec<(String, u64, u64)>,
}

impl ManifestDiff {
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.resized.is_empty()
    }
}

/// Compute the diff between scanned `disk` entries and the manifest.
///
/// All output lists are sorted by path for deterministic output.
pub fn compute(disk: &[ManifestEntry], manifest: &Manifest) -> ManifestDiff {
    let disk_by_path: HashMap<&str, &ManifestEntry> =
        disk.iter().map(|e| (e.path.as_str(), e)).collect();
    let manifest_by_path: HashMap<&str, &ManifestEntry> =
        manifest.files.iter().map(|e| (e.path.as_str(), e)).collect();

    let mut added: Vec<String> = disk
        .iter()
        .filter(|e| !manifest_by_path.contains_key(e.path.as_str()))
        .map(|e| e.path.clone())
        .collect();
    added.sort();

    let mut removed: Vec<String> = manifest
        .files
        .iter()
        .filter(|e| !disk_by_path.contains_key(e.path.as_str()))
        .map(|e| e.path.clone())
        .collect();
    removed.sort();

    let mut resized: Vec<(String, u64, u64)> = manifest
        .files
        .iter()
        .filter_map(|e| {
            let on_disk = disk_by_path.get(e.path.as_str())?;
            (on_disk.bytes != e.bytes).then(|| (e.path.clone(), e.bytes, on_disk.bytes))
        })
        .collect();
    resized.sort();

    ManifestDiff {
        added,
        removed,
        resized,
    }
}
