//! `otln inspect` — parse a single markdown file and print its structure.
//!
//! One of `--outline`, `--faq` or `--article` selects the parser; the
//! result is printed as plain indented text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::outline::model::OutlineNode;
use crate::parser::{article, faq, outline};

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

pub fn run_outline(file: &Path) -> Result<()> {
    let raw = read(file)?;
    match outline::parse(&raw) {
        Some(root) => {
            for line in outline_lines(&root) {
                println!("  {}", line);
            }
            println!("\n  {} nodes", root.count());
        }
        None => println!("  No outline markers found."),
    }
    Ok(())
}

pub fn run_faq(file: &Path) -> Result<()> {
    let raw = read(file)?;
    let items = faq::parse(&raw);
    if items.is_empty() {
        println!("  No Q/A pairs found.");
        return Ok(());
    }
    for line in faq_lines(&items) {
        println!("  {}", line);
    }
    Ok(())
}

pub fn run_article(file: &Path) -> Result<()> {
    let raw = read(file)?;
    let split = article::split(&raw);
    for line in article_lines(&split) {
        println!("  {}", line);
    }
    Ok(())
}

fn read(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Indented tree rendition of a parsed outline.
pub fn outline_lines(root: &OutlineNode) -> Vec<String> {
    let mut lines = Vec::new();
    push_node(root, 0, &mut lines);
    lines
}

fn push_node(node: &OutlineNode, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!("{}{}", "  ".repeat(depth), node.label));
    for child in &node.children {
        push_node(child, depth + 1, lines);
    }
}

pub fn faq_lines(items: &[faq::FaqItem]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("Q: {}", item.question));
        lines.push(format!("A: {}", item.answer));
    }
    lines
}

pub fn article_lines(split: &article::Article) -> Vec<String> {
    let mut lines = Vec::new();
    match &split.title {
        Some(title) => lines.push(format!("Title: {}", title)),
        None => lines.push("Title: (none)".to_string()),
    }
    lines.push(format!("Paragraphs: {}", split.paragraphs().len()));
    if split.references.is_empty() {
        lines.push("References: (none)".to_string());
    } else {
        lines.push(format!("References: {}", split.references.len()));
        for reference in &split.references {
            lines.push(format!("  {}", reference));
        }
    }
    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
