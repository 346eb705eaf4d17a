//! `index.json` model, markdown role assignment, and display formatting.

use serde::{Deserialize, Serialize};

/// The generated sample-asset manifest (`index.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Informational: the folder the index was generated from.
    pub source: String,
    /// ISO-8601 UTC timestamp of the last sync.
    #[serde(rename = "generatedAt")]
    pub generated_at: String,
    /// Indexed files, sorted by `path`.
    pub files: Vec<ManifestEntry>,
}

/// One indexed sample file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// POSIX path relative to the sample folder.
    pub path: String,
    pub bytes: u64,
    /// Lowercased extension including the leading dot.
    pub ext: String,
    /// Base filename.
    pub name: String,
}

impl Manifest {
    /// Paths of all indexed markdown files, in manifest order.
    pub fn markdown_paths(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| f.ext.eq_ignore_ascii_case(".md"))
            .map(|f| f.path.as_str())
            .collect()
    }

    /// PDF files under the `references/` prefix.
    pub fn reference_pdfs(&self) -> Vec<&ManifestEntry> {
        self.files
            .iter()
            .filter(|f| f.ext == ".pdf" && f.path.to_lowercase().starts_with("references/"))
            .collect()
    }

    /// Remaining binary attachments (doc/docx; pdfs are surfaced elsewhere).
    pub fn doc_attachments(&self) -> Vec<&ManifestEntry> {
        self.files
            .iter()
            .filter(|f| {
                let ext = f.ext.to_lowercase();
                ext == ".doc" || ext == ".docx"
            })
            .collect()
    }
}

/// Role assignment for indexed markdown files, matched case-insensitively
/// on the manifest path.
///
/// Precedence: `summary.md`, then `writing_strategy.md`, then anything
/// containing `faq`; the first remaining `.md` becomes the main body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownRoles {
    pub summary: Option<String>,
    pub strategy: Option<String>,
    pub faq: Option<String>,
    pub body: Option<String>,
}

pub fn assign_roles(md_paths: &[&str]) -> MarkdownRoles {
    let summary = md_paths
        .iter()
        .find(|p| p.eq_ignore_ascii_case("summary.md"))
        .map(|p| p.to_string());
    let strategy = md_paths
        .iter()
        .find(|p| p.eq_ignore_ascii_case("writing_strategy.md"))
        .map(|p| p.to_string());
    let faq = md_paths
        .iter()
        .find(|p| {
            let lower = p.to_lowercase();
            lower == "faq.md" || lower.contains("faq")
        })
        .map(|p| p.to_string());
    let body = md_paths
        .iter()
        .find(|p| {
            let claimed = [&summary, &strategy, &faq];
            p.to_lowercase().ends_with(".md")
                && !claimed.iter().any(|c| c.as_deref() == Some(**p))
        })
        .map(|p| p.to_string());

    MarkdownRoles {
        summary,
        strategy,
        faq,
        body,
    }
}

/// Human-readable size: empty for zero, rounded KB under 1 MiB, else
/// one-decimal MB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return String::new();
    }
    if bytes < 1024 * 1024 {
        let kb = (bytes as f64 / 1024.0).round() as u64;
        return format!("{} KB", kb);
    }
    format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}

/// Short type badge for an extension.
pub fn file_type_label(ext: &str) -> String {
    let lower = ext.to_lowercase();
    match lower.as_str() {
        ".pdf" => "PDF".to_string(),
        ".doc" | ".docx" => "DOCX".to_string(),
        other => other.trim_start_matches('.').to_uppercase(),
    }
}
