//! `otln view` — open the interactive topic viewer.

use std::path::PathBuf;

use anyhow::Result;

use crate::tui::canvas;

pub fn run(slugs: Option<(&str, &str, &str)>, dir: Option<PathBuf>, demo: bool) -> Result<()> {
    canvas::run(slugs, dir, demo)
}
