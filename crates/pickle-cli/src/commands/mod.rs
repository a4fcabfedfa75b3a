pub mod check;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use pickle::{Document, ParseOptions};

/// Parse a pick list file, attaching the path to any error.
pub fn load_document(path: &Path, strict: bool) -> Result<Document> {
    let options = if strict {
        ParseOptions::strict()
    } else {
        ParseOptions::default()
    };
    log::debug!("parsing {} with {:?}", path.display(), options);
    Document::from_file_with(path, options)
        .with_context(|| format!("Failed to parse pick list: {}", path.display()))
}
