mod catalog;
mod commands;
mod layout;
mod manifest;
mod outline;
mod parser;
mod scanner;
mod tui;
mod workspace;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "otln",
    about = "A terminal mind-map viewer for essay sample packs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the sample folder and regenerate index.json
    Sync {
        /// Sample folder (defaults to discovering essay-sample/ upward)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Diff the sample folder against index.json (read-only)
    Status {
        /// Sample folder (defaults to discovering essay-sample/ upward)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print the built-in catalog of categories, works and topics
    List,
    /// Parse a single markdown file and print its structure
    #[command(
        group(
            ArgGroup::new("inspect_parser")
                .args(["outline", "faq", "article"])
                .required(true)
                .multiple(false)
        )
    )]
    Inspect {
        /// Markdown file to parse
        file: PathBuf,
        /// Parse as a writing-strategy outline
        #[arg(long)]
        outline: bool,
        /// Parse as a Q/A FAQ document
        #[arg(long)]
        faq: bool,
        /// Split as a main-body article with references
        #[arg(long)]
        article: bool,
    },
    /// Open the interactive topic viewer
    View {
        /// Category slug (defaults to the first catalog topic)
        category: Option<String>,
        /// Work slug
        work: Option<String>,
        /// Topic slug
        topic: Option<String>,
        /// Sample folder (defaults to discovering essay-sample/ upward)
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Launch with a built-in sample pack (no folder required)
        #[arg(long)]
        demo: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Sync { dir } => commands::sync::run(dir),
        Command::Status { dir } => commands::status::run(dir),
        Command::List => commands::list::run(),
        Command::Inspect {
            file,
            outline,
            faq,
            article: _,
        } => {
            if outline {
                commands::inspect::run_outline(&file)
            } else if faq {
                commands::inspect::run_faq(&file)
            } else {
                commands::inspect::run_article(&file)
            }
        }
        Command::View {
            category,
            work,
            topic,
            dir,
            demo,
        } => {
            let slugs = match (&category, &work, &topic) {
                (Some(c), Some(w), Some(t)) => Some((c.as_str(), w.as_str(), t.as_str())),
                _ => None,
            };
            commands::view::run(slugs, dir, demo)
        }
    }
}
