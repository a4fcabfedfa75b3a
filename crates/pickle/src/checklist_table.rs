use std::io::{self, Write};

use comfy_table::{Cell, Color, Table};

use crate::{ChecklistFilter, Document};

impl Document {
    /// Write the document as a formatted table to the given writer
    ///
    /// # Arguments
    /// * `writer` - Output destination
    /// * `filter` - Categories and components to include
    pub fn write_table<W: Write>(
        &self,
        mut writer: W,
        filter: &ChecklistFilter,
    ) -> io::Result<()> {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
        table.set_content_arrangement(comfy_table::ContentArrangement::Dynamic);
        table.set_header(vec![
            "Category",
            "Picked",
            "Qty",
            "Name",
            "Value",
            "Description",
            "Package",
            "Designators",
        ]);

        for category in &self.filtered(filter) {
            for component in category.components() {
                // Picked rows are done, grey them out like DNP rows in a BOM
                let (picked_cell, fg) = if component.picked() {
                    (Cell::new("✓").fg(Color::Green), Color::DarkGrey)
                } else {
                    (Cell::new(""), Color::Reset)
                };

                table.add_row(vec![
                    Cell::new(category.name()).fg(Color::Cyan),
                    picked_cell,
                    Cell::new(component.quantity()).fg(fg),
                    Cell::new(component.name()).fg(fg),
                    Cell::new(component.value().unwrap_or_default()).fg(fg),
                    Cell::new(component.description().unwrap_or_default()).fg(fg),
                    Cell::new(component.package().unwrap_or_default()).fg(fg),
                    Cell::new(component.reference_designators().join(",")).fg(fg),
                ]);
            }
        }

        writeln!(writer, "{table}")?;
        writeln!(
            writer,
            "{} of {} component(s) picked",
            self.picked_count(),
            self.component_count()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_component() {
        let doc = Document::parse(
            "Resistors:\n[ ] 2 RC0603FR-0710KL (10k)\nR1 R2\n\nCapacitors:\n[X] 1 GRM188R71H104KA93D \"Decoupling cap\" [0603]\nC7\n",
        )
        .unwrap();
        let mut out = Vec::new();
        doc.write_table(&mut out, &ChecklistFilter::default()).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("RC0603FR-0710KL"));
        assert!(out.contains("R1,R2"));
        assert!(out.contains("Decoupling cap"));
        assert!(out.contains("1 of 2 component(s) picked"));
    }

    #[test]
    fn table_honours_filter() {
        let doc = Document::parse(
            "Resistors:\n[ ] 2 RC0603FR-0710KL (10k)\nR1 R2\n\nCapacitors:\n[X] 1 GRM188R71H104KA93D\nC7\n",
        )
        .unwrap();
        let filter = ChecklistFilter {
            unpicked_only: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        doc.write_table(&mut out, &filter).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("RC0603FR-0710KL"));
        assert!(!out.contains("GRM188R71H104KA93D"));
    }
}
