use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};
use pickle::ChecklistFilter;

use super::load_document;
use crate::OutputFormat;

pub fn execute(
    file: &Path,
    format: OutputFormat,
    category: Option<String>,
    unpicked: bool,
    strict: bool,
) -> Result<()> {
    let doc = load_document(file, strict)?;

    if let Some(name) = &category {
        if doc.category(name).is_none() {
            bail!("No category named {name:?} in {}", file.display());
        }
    }

    let filter = ChecklistFilter {
        category,
        unpicked_only: unpicked,
    };

    let mut writer = io::stdout().lock();
    match format {
        OutputFormat::Text => doc.write_checklist(&mut writer, &filter)?,
        OutputFormat::Table => doc.write_table(&mut writer, &filter)?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&doc.filtered(&filter))?;
            writeln!(writer, "{json}")?;
        }
    }

    Ok(())
}
