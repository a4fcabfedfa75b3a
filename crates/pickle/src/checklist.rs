use std::io::{self, Write};

use crate::{Category, Component, Document};

/// Selects what [`Document::write_checklist`] prints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistFilter {
    /// Only this category (case-insensitive).
    pub category: Option<String>,
    /// Skip components that are already picked.
    pub unpicked_only: bool,
}

impl ChecklistFilter {
    pub fn includes_category(&self, category: &Category) -> bool {
        self.category
            .as_deref()
            .is_none_or(|name| category.matches_name(name))
    }

    pub fn includes_component(&self, component: &Component) -> bool {
        !(self.unpicked_only && component.picked())
    }
}

impl Document {
    /// Copy of the document holding only what `filter` selects.
    pub fn filtered(&self, filter: &ChecklistFilter) -> Document {
        self.iter()
            .filter(|c| filter.includes_category(c))
            .map(|category| {
                let components = category
                    .components()
                    .iter()
                    .filter(|c| filter.includes_component(c))
                    .cloned();
                Category::with_components(category.name(), components)
            })
            .filter(|category| !(category.is_empty() && filter.unpicked_only))
            .collect()
    }

    /// Write the document back out as a human-readable pick list.
    ///
    /// When picked components are hidden, categories left empty are skipped.
    pub fn write_checklist<W: Write>(
        &self,
        mut writer: W,
        filter: &ChecklistFilter,
    ) -> io::Result<()> {
        for (i, category) in self.filtered(filter).iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }

            writeln!(writer, "{}:", category.name())?;
            for component in category.components() {
                writeln!(writer, "    {}", component.descriptor())?;
                if component.quantity() > 0 {
                    let designators = component.reference_designators().join(" ");
                    writeln!(writer, "        {designators}")?;
                } else {
                    // Keeps the next descriptor from reading as a designator line.
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}
