use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::load_document;

pub fn execute(file: &Path, strict: bool) -> Result<()> {
    let doc = load_document(file, strict)?;

    let picked = doc.picked_count();
    let total = doc.component_count();
    let status = if picked == total {
        "complete".green().bold()
    } else {
        "in progress".yellow().bold()
    };

    println!(
        "{}: {} categories, {} components, {} picked ({})",
        file.display(),
        doc.len(),
        total,
        picked,
        status
    );
    Ok(())
}
