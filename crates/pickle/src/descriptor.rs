//! Component descriptor line grammar.
//!
//! A descriptor line looks like:
//!
//! ```text
//! [X] 2 RC0603FR-0710KL (10k) "Pull-up" [0603]
//! ```
//!
//! The bracketed glyph, the quantity hint and the part name are mandatory.
//! Value, description and package are optional but must keep that relative
//! order when present.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Glyph used when rendering a picked component.
pub const PICKED_GLYPH: char = 'X';

/// Glyph meaning "not picked yet".
pub const UNPICKED_GLYPH: char = ' ';

fn descriptor_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^\s*\[(?P<picked>.)\]",
            r"\s+(?P<quantity>\d+)",
            r"\s+(?P<name>\S+)",
            r"\s*(?:\((?P<value>[^)]+)\)\s*)?",
            r#"(?:"(?P<description>[^"]+)"\s*)?"#,
            r"(?:\[(?P<package>[^\]]+)\]\s*)?$",
        ))
        .expect("descriptor pattern is valid")
    })
}

/// Fields decomposed from a single descriptor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub picked: bool,
    /// Digits written after the glyph, kept verbatim. Not authoritative: the
    /// real quantity is the number of reference designators collected for
    /// the component.
    pub quantity_hint: String,
    pub name: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub package: Option<String>,
}

impl Descriptor {
    /// Returns `true` if the first non-whitespace character of `line` opens
    /// a descriptor bracket.
    pub fn is_descriptor_line(line: &str) -> bool {
        line.trim_start().starts_with('[')
    }

    /// Decompose a descriptor line, returning `None` when the line does not
    /// match the grammar.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = descriptor_regex().captures(line)?;

        let picked = &caps["picked"] != " ";
        let optional = |group: &str| caps.name(group).map(|m| m.as_str().to_string());

        Some(Self {
            picked,
            quantity_hint: caps["quantity"].to_string(),
            name: caps["name"].to_string(),
            value: optional("value"),
            description: optional("description"),
            package: optional("package"),
        })
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = if self.picked {
            PICKED_GLYPH
        } else {
            UNPICKED_GLYPH
        };
        write!(f, "[{glyph}] {} {}", self.quantity_hint, self.name)?;
        if let Some(value) = &self.value {
            write!(f, " ({value})")?;
        }
        if let Some(description) = &self.description {
            write!(f, " \"{description}\"")?;
        }
        if let Some(package) = &self.package {
            write!(f, " [{package}]")?;
        }
        Ok(())
    }
}
