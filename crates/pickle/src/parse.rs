use log::{debug, trace, warn};

use crate::category::Category;
use crate::component::Component;
use crate::descriptor::Descriptor;
use crate::document::Document;
use crate::{PickleError, Result};

/// How to treat a component that is still waiting for its designator line
/// when the input ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unterminated {
    /// Close it with whatever designators it has (none) and keep it.
    #[default]
    Close,
    /// Fail with [`PickleError::UnterminatedComponent`].
    Reject,
}

/// Knobs for [`Document::parse_with`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub unterminated: Unterminated,
}

impl ParseOptions {
    /// Options that refuse to guess at end of input.
    pub fn strict() -> Self {
        Self {
            unterminated: Unterminated::Reject,
        }
    }
}

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Descriptor,
    CategoryHeader(&'a str),
    Blank,
    Other,
}

impl<'a> LineKind<'a> {
    /// Descriptor first, then header, then blank.
    pub fn classify(line: &'a str) -> Self {
        if Descriptor::is_descriptor_line(line) {
            LineKind::Descriptor
        } else if let Some(name) = Category::header_name(line) {
            LineKind::CategoryHeader(name)
        } else if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Other
        }
    }
}

/// Parser state. The open component lives inside the state that waits for
/// its designators, so there is never a component without a pending line.
#[derive(Debug)]
enum State {
    AwaitingEntity,
    AwaitingRefDes {
        component: Component,
        /// Line number of the descriptor that opened the component.
        opened_at: usize,
    },
}

/// Line-driven state machine that assembles a [`Document`].
///
/// Feed lines in order with [`Parser::feed_line`], then call
/// [`Parser::finish`]. The first error is terminal; the parser should be
/// dropped afterwards.
#[derive(Debug)]
pub struct Parser {
    options: ParseOptions,
    state: State,
    line_no: usize,
    category: Option<Category>,
    document: Document,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            state: State::AwaitingEntity,
            line_no: 0,
            category: None,
            document: Document::new(),
        }
    }

    pub fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;
        let kind = LineKind::classify(line);
        trace!("line {}: {:?}", self.line_no, kind);

        self.state = match std::mem::replace(&mut self.state, State::AwaitingEntity) {
            State::AwaitingEntity => self.on_entity(line, kind)?,
            State::AwaitingRefDes { mut component, .. } => {
                if kind != LineKind::Blank {
                    component.apply_continuation(line);
                }
                self.close_component(component);
                State::AwaitingEntity
            }
        };
        Ok(())
    }

    fn on_entity(&mut self, line: &str, kind: LineKind<'_>) -> Result<State> {
        match kind {
            LineKind::Descriptor => {
                if self.category.is_none() {
                    return Err(PickleError::OrphanComponent { line: self.line_no });
                }
                let descriptor =
                    Descriptor::parse(line).ok_or_else(|| PickleError::MalformedDescriptor {
                        line: self.line_no,
                        text: line.to_string(),
                    })?;
                Ok(State::AwaitingRefDes {
                    component: Component::from_descriptor(descriptor),
                    opened_at: self.line_no,
                })
            }
            LineKind::CategoryHeader(name) => {
                self.commit_category();
                self.category = Some(Category::new(name));
                Ok(State::AwaitingEntity)
            }
            LineKind::Blank | LineKind::Other => Ok(State::AwaitingEntity),
        }
    }

    fn close_component(&mut self, component: Component) {
        debug!(
            "component {} closed with {} designator(s)",
            component.name(),
            component.quantity()
        );
        // A component can only be opened while a category is open.
        if let Some(category) = self.category.as_mut() {
            category.push_component(component);
        }
    }

    fn commit_category(&mut self) {
        if let Some(category) = self.category.take() {
            debug!(
                "category {:?} committed with {} component(s)",
                category.name(),
                category.len()
            );
            self.document.push_category(category);
        }
    }

    /// Close anything still open and hand back the finished document.
    pub fn finish(mut self) -> Result<Document> {
        if let State::AwaitingRefDes {
            component,
            opened_at,
        } = std::mem::replace(&mut self.state, State::AwaitingEntity)
        {
            match self.options.unterminated {
                Unterminated::Reject => {
                    return Err(PickleError::UnterminatedComponent { line: opened_at });
                }
                Unterminated::Close => {
                    warn!(
                        "component {} on line {} has no designator line before end of input",
                        component.name(),
                        opened_at
                    );
                    self.close_component(component);
                }
            }
        }
        self.commit_category();
        Ok(self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Result<Document> {
        let mut parser = Parser::default();
        for line in lines {
            parser.feed_line(line)?;
        }
        parser.finish()
    }

    #[test]
    fn classify_priority() {
        assert_eq!(LineKind::classify("[ ] 1 FOO"), LineKind::Descriptor);
        // Starts with a bracket, so it is a (malformed) descriptor even
        // though it also ends with a colon.
        assert_eq!(LineKind::classify("[odd:"), LineKind::Descriptor);
        assert_eq!(
            LineKind::classify("Resistors:"),
            LineKind::CategoryHeader("Resistors")
        );
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify(" \t "), LineKind::Blank);
        assert_eq!(LineKind::classify("just a note"), LineKind::Other);
        assert_eq!(LineKind::classify(":"), LineKind::Other);
    }

    #[test]
    fn blank_line_closes_component_without_designators() {
        let doc = run(&["Misc:", "[ ] 1 FOO", "", "[ ] 1 BAR", "U1"]).unwrap();
        let components = doc.categories()[0].components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].quantity(), 0);
        assert_eq!(components[1].reference_designators(), ["U1"]);
    }

    #[test]
    fn any_non_blank_line_after_descriptor_is_continuation() {
        let doc = run(&["Misc:", "[ ] 1 FOO", "Other:", "[ ] 1 BAR", ""]).unwrap();
        assert_eq!(doc.len(), 1);
        let components = doc.categories()[0].components();
        assert_eq!(components[0].reference_designators(), ["Other:"]);
        assert_eq!(components[1].name(), "BAR");
    }

    #[test]
    fn header_commits_previous_category() {
        let doc = run(&["A:", "B:", "[ ] 1 FOO", "X1", "C:"]).unwrap();
        let names: Vec<_> = doc.iter().map(Category::name).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(doc.categories()[0].is_empty());
        assert_eq!(doc.categories()[1].len(), 1);
    }

    #[test]
    fn stray_lines_are_ignored() {
        let doc = run(&["some preamble", "Misc:", "notes here", "[ ] 1 FOO", "Q1"]).unwrap();
        assert_eq!(doc.component_count(), 1);
    }

    #[test]
    fn oversized_quantity_hint_still_parses() {
        let doc = run(&["Misc:", "[ ] 99999999999999999999 FOO", "U1"]).unwrap();
        let components = doc.categories()[0].components();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name(), "FOO");
        assert_eq!(components[0].reference_designators(), ["U1"]);
    }

    #[test]
    fn orphan_component() {
        let err = run(&["", "[ ] 1 FOO"]).unwrap_err();
        assert!(matches!(err, PickleError::OrphanComponent { line: 2 }));
    }

    #[test]
    fn malformed_descriptor() {
        let err = run(&["Misc:", "[ bad descriptor"]).unwrap_err();
        match err {
            PickleError::MalformedDescriptor { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "[ bad descriptor");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unterminated_component_closed_by_default() {
        let doc = run(&["Misc:", "[X] 2 FOO"]).unwrap();
        let component = &doc.categories()[0].components()[0];
        assert_eq!(component.name(), "FOO");
        assert!(component.picked());
        assert_eq!(component.quantity(), 0);
    }

    #[test]
    fn unterminated_component_rejected_when_strict() {
        let mut parser = Parser::new(ParseOptions::strict());
        for line in ["Misc:", "", "[ ] 1 FOO"] {
            parser.feed_line(line).unwrap();
        }
        let err = parser.finish().unwrap_err();
        assert!(matches!(err, PickleError::UnterminatedComponent { line: 3 }));
    }

    #[test]
    fn empty_input() {
        let doc = run(&[]).unwrap();
        assert!(doc.is_empty());
    }
}
