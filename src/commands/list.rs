//! `otln list` — print the built-in catalog of categories, works and topics.

use anyhow::Result;
use crossterm::style::Stylize;

use crate::catalog::model as catalog;

pub fn run() -> Result<()> {
    for category in catalog::categories() {
        println!(
            "\n  {} {}",
            category.title.cyan().bold(),
            format!("({})", category.slug).dark_grey()
        );
        if category.works.is_empty() {
            println!("    {}", "(no works yet)".dark_grey());
            continue;
        }
        for work in &category.works {
            println!(
                "    {} — {} {}",
                work.title.bold(),
                work.author,
                format!("({})", work.slug).dark_grey()
            );
            for topic in &work.topics {
                println!(
                    "      {} {}",
                    topic.title,
                    format!("({})", topic.slug).dark_grey()
                );
            }
        }
    }
    println!(
        "\n  {}",
        "Open one with `otln view <category> <work> <topic>`.".dark_grey()
    );
    Ok(())
}

/// Plain-text rendition of the catalog, for tests and piping.
pub fn catalog_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for category in catalog::categories() {
        lines.push(format!("{} ({})", category.title, category.slug));
        if category.works.is_empty() {
            lines.push("  (no works yet)".to_string());
            continue;
        }
        for work in &category.works {
            lines.push(format!("  {} — {} ({})", work.title, work.author, work.slug));
            for topic in &work.topics {
                lines.push(format!("    {} ({})", topic.title, topic.slug));
            }
        }
    }
    lines
}
