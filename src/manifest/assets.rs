//! Batch loader for a topic's sample pack.
//!
//! Reads `index.json` plus every indexed markdown file in one pass.
//! Failures across the batch reduce to a single aggregated error; callers
//! clear any previously loaded state on error so stale and failed data
//! never mix.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::manifest::model::{self, Manifest};
use crate::parser::{article, faq};
use crate::workspace;

/// Everything the topic page renders from the sample folder.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicAssets {
    pub manifest: Manifest,
    /// Raw `summary.md` text.
    pub overview: Option<String>,
    /// Raw `writing_strategy.md` text (fed to the outline parser).
    pub strategy: Option<String>,
    pub faq: Vec<faq::FaqItem>,
    pub article: Option<article::Article>,
}

/// Load the sample pack from `dir`, re-reading everything from disk.
pub fn load(dir: &Path) -> Result<TopicAssets> {
    let index_path = workspace::index_path(dir);
    let index_text = fs::read_to_string(&index_path).with_context(|| {
        format!(
            "cannot read {} — run `otln sync` to generate the sample index",
            index_path.display()
        )
    })?;
    let manifest: Manifest = serde_json::from_str(&index_text)
        .with_context(|| format!("{} is not a valid sample index", index_path.display()))?;

    let mut contents: HashMap<String, String> = HashMap::new();
    let mut failures: Vec<String> = Vec::new();
    for path in manifest.markdown_paths() {
        match fs::read_to_string(dir.join(path)) {
            Ok(text) => {
                contents.insert(path.to_string(), text);
            }
            Err(_) => failures.push(path.to_string()),
        }
    }
    if !failures.is_empty() {
        bail!(
            "cannot load sample markdown ({}) — run `otln sync` to refresh the index",
            failures.join(", ")
        );
    }

    Ok(from_contents(manifest, &contents))
}

/// Assemble assets from already-loaded markdown texts (pure, for tests
/// and the demo pack).
pub fn from_contents(manifest: Manifest, contents: &HashMap<String, String>) -> TopicAssets {
    let md_paths = manifest.markdown_paths();
    let roles = model::assign_roles(&md_paths);

    let text_for = |path: &Option<String>| {
        path.as_deref()
            .and_then(|p| contents.get(p))
            .cloned()
    };

    let overview = text_for(&roles.summary);
    let strategy = text_for(&roles.strategy);
    let faq = text_for(&roles.faq)
        .map(|t| faq::parse(&t))
        .unwrap_or_default();
    let article = text_for(&roles.body).map(|t| article::split(&t));

    TopicAssets {
        manifest,
        overview,
        strategy,
        faq,
        article,
    }
}
