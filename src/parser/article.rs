//! Article splitter: main-body markdown → `{title, body, references}`.
//!
//! A line equal to `references` (case-insensitive) on its own marks the
//! boundary; everything after it is one reference entry per non-empty
//! line. Without the marker the whole text is the body.

/// A split main-body document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    /// First non-empty line of the document, trimmed.
    pub title: Option<String>,
    pub body: String,
    pub references: Vec<String>,
}

impl Article {
    /// Body paragraphs: one per non-empty trimmed line.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.body
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}

/// Split raw text at the `references` marker line.
pub fn split(raw: &str) -> Article {
    let lines: Vec<&str> = raw.lines().collect();
    let title = lines
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .map(String::from);

    let marker = lines
        .iter()
        .position(|l| l.trim().eq_ignore_ascii_case("references"));

    match marker {
        None => Article {
            title,
            body: raw.to_string(),
            references: Vec::new(),
        },
        Some(idx) => Article {
            title,
            body: lines[..idx].join("\n").trim().to_string(),
            references: lines[idx + 1..]
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_body_and_references_at_marker() {
        let a = split("Title\nBody line\nReferences\nRef one\nRef two");
        assert_eq!(a.title.as_deref(), Some("Title"));
        assert!(a.body.contains("Title"));
        assert!(a.body.contains("Body line"));
        assert!(!a.body.contains("Ref one"));
        assert_eq!(a.references, vec!["Ref one", "Ref two"]);
    }

    #[test]
    fn marker_match_is_case_insensitive_and_trimmed() {
        let a = split("T\n  REFERENCES  \nr1");
        assert_eq!(a.references, vec!["r1"]);
    }

    #[test]
    fn no_marker_keeps_whole_text_as_body() {
        let raw = "Title\n\nJust body text.";
        let a = split(raw);
        assert_eq!(a.title.as_deref(), Some("Title"));
        assert_eq!(a.body, raw);
        assert!(a.references.is_empty());
    }

    #[test]
    fn title_skips_leading_blank_lines() {
        let a = split("\n\n  Late title\nbody");
        assert_eq!(a.title.as_deref(), Some("Late title"));
    }

    #[test]
    fn empty_input_yields_empty_article() {
        let a = split("");
        assert_eq!(a.title, None);
        assert!(a.body.is_empty());
        assert!(a.references.is_empty());
    }

    #[test]
    fn blank_lines_after_marker_are_not_references() {
        let a = split("T\nreferences\n\nonly ref\n\n");
        assert_eq!(a.references, vec!["only ref"]);
    }

    #[test]
    fn paragraphs_come_from_non_empty_body_lines() {
        let a = split("Title\n\nFirst para.\n  Second para.  \nReferences\nr");
        assert_eq!(a.paragraphs(), vec!["Title", "First para.", "Second para."]);
    }

    #[test]
    fn a_line_merely_containing_references_is_not_a_marker() {
        let a = split("T\nSee the references below.\nmore body");
        assert!(a.references.is_empty());
        assert!(a.body.contains("more body"));
    }
}
