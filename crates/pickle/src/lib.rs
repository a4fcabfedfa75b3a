//! Parser and document model for PickLE pick lists.
//!
//! A pick list groups electronic components by category. Each component is
//! a descriptor line followed by the reference designators it is placed at:
//!
//! ```text
//! Resistors:
//! [ ] 2 RC0603FR-0710KL (10k)
//! R1 R2
//!
//! Capacitors:
//! [X] 1 GRM188R71H104KA93D "Decoupling cap" [0603]
//! C7
//! ```
//!
//! [`Document::parse`] and [`Document::from_file`] are the entry points.
//! Parsing is all-or-nothing: the first malformed line aborts with a
//! [`PickleError`] carrying its 1-based line number.

mod category;
mod checklist;
#[cfg(feature = "table")]
mod checklist_table;
mod component;
pub mod descriptor;
mod document;
pub mod parse;

pub use category::Category;
pub use checklist::ChecklistFilter;
pub use component::Component;
pub use descriptor::Descriptor;
pub use document::Document;
pub use parse::{LineKind, ParseOptions, Parser, Unterminated};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickleError {
    #[error("line {line}: malformed component descriptor: {text:?}")]
    MalformedDescriptor { line: usize, text: String },

    #[error("line {line}: component defined before any category")]
    OrphanComponent { line: usize },

    #[error("line {line}: component has no reference designator line before end of input")]
    UnterminatedComponent { line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PickleError {
    /// 1-based line the error points at, if it came from the document itself.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedDescriptor { line, .. }
            | Self::OrphanComponent { line }
            | Self::UnterminatedComponent { line } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PickleError>;
