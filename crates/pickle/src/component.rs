use crate::descriptor::Descriptor;

/// A single line item of the pick list.
///
/// The quantity is never stored: it is the number of reference designators
/// attached to the component.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Component {
    picked: bool,
    name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    value: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    package: Option<String>,
    reference_designators: Vec<String>,
}

impl Component {
    /// Create an unpicked component with only a part name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            picked: false,
            name: name.into(),
            value: None,
            description: None,
            package: None,
            reference_designators: Vec::new(),
        }
    }

    /// Start a component from a parsed descriptor line. The quantity hint is
    /// dropped.
    pub fn from_descriptor(descriptor: Descriptor) -> Self {
        let Descriptor {
            picked,
            name,
            value,
            description,
            package,
            ..
        } = descriptor;

        Self {
            picked,
            name,
            value,
            description,
            package,
            reference_designators: Vec::new(),
        }
    }

    /// Merge a continuation line into this component.
    ///
    /// The line is split on runs of whitespace and every token becomes a
    /// reference designator, replacing any previously held ones.
    pub fn apply_continuation(&mut self, line: &str) {
        self.reference_designators = line.split_whitespace().map(str::to_string).collect();
    }

    /// Canonical descriptor for this component, with the quantity hint set to
    /// the actual quantity.
    pub fn descriptor(&self) -> Descriptor {
        Descriptor {
            picked: self.picked,
            quantity_hint: self.quantity().to_string(),
            name: self.name.clone(),
            value: self.value.clone(),
            description: self.description.clone(),
            package: self.package.clone(),
        }
    }

    pub fn quantity(&self) -> usize {
        self.reference_designators.len()
    }

    pub fn picked(&self) -> bool {
        self.picked
    }

    pub fn set_picked(&mut self, picked: bool) {
        self.picked = picked;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Package or case style, e.g. `0603` or `SOT-23`.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn set_package(&mut self, package: Option<String>) {
        self.package = package;
    }

    pub fn reference_designators(&self) -> &[String] {
        &self.reference_designators
    }

    pub fn set_reference_designators(&mut self, designators: Vec<String>) {
        self.reference_designators = designators;
    }

    pub fn push_reference_designator(&mut self, designator: impl Into<String>) {
        self.reference_designators.push(designator.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(line: &str) -> Component {
        Component::from_descriptor(Descriptor::parse(line).unwrap())
    }

    #[test]
    fn from_descriptor_copies_fields() {
        let c = component(r#"[X] 4 BSS138 (50V) "Level shifter" [SOT-23]"#);
        assert!(c.picked());
        assert_eq!(c.name(), "BSS138");
        assert_eq!(c.value(), Some("50V"));
        assert_eq!(c.description(), Some("Level shifter"));
        assert_eq!(c.package(), Some("SOT-23"));
        // The hint is not the quantity.
        assert_eq!(c.quantity(), 0);
    }

    #[test]
    fn continuation_splits_on_whitespace_runs() {
        let mut c = component("[ ] 3 RC0603FR-0710KL (10k)");
        c.apply_continuation("  R1   R2\tR15  ");
        assert_eq!(c.reference_designators(), ["R1", "R2", "R15"]);
        assert_eq!(c.quantity(), 3);
    }

    #[test]
    fn continuation_replaces_previous_designators() {
        let mut c = Component::new("FOO");
        c.push_reference_designator("U9");
        c.apply_continuation("U1 U2");
        assert_eq!(c.reference_designators(), ["U1", "U2"]);
    }

    #[test]
    fn quantity_tracks_designators() {
        let mut c = Component::new("FOO");
        assert_eq!(c.quantity(), 0);
        c.push_reference_designator("C1");
        assert_eq!(c.quantity(), c.reference_designators().len());
        c.set_reference_designators(vec!["C2".into(), "C3".into(), "C4".into()]);
        assert_eq!(c.quantity(), 3);
    }

    #[test]
    fn descriptor_uses_actual_quantity() {
        let mut c = component("[ ] 9 LM358 \"Op-amp\"");
        c.apply_continuation("U1 U2");
        assert_eq!(c.descriptor().to_string(), r#"[ ] 2 LM358 "Op-amp""#);
    }
}
