use crate::component::Component;

/// A named group of components, e.g. `Resistors:`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Category {
    name: String,
    components: Vec<Component>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    /// Create a category pre-populated with components.
    pub fn with_components(
        name: impl Into<String>,
        components: impl IntoIterator<Item = Component>,
    ) -> Self {
        Self {
            name: name.into(),
            components: components.into_iter().collect(),
        }
    }

    /// Extract the category name from a header line.
    ///
    /// A header is any line whose last non-whitespace character is `:`. The
    /// name is everything before that colon; a header with nothing before
    /// the colon is not a header.
    pub fn header_name(line: &str) -> Option<&str> {
        let name = line.trim_end().strip_suffix(':')?;
        (!name.trim().is_empty()).then_some(name)
    }

    /// Build an empty category from a header line.
    pub fn from_header(line: &str) -> Option<Self> {
        Self::header_name(line).map(Self::new)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Case-insensitive name comparison used for lookups.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    pub fn push_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of components already picked in this category.
    pub fn picked_count(&self) -> usize {
        self.components.iter().filter(|c| c.picked()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_recognition() {
        assert_eq!(Category::header_name("Resistors:"), Some("Resistors"));
        assert_eq!(Category::header_name("Integrated Circuits:  "), Some("Integrated Circuits"));
        assert_eq!(Category::header_name("Resistors"), None);
        assert_eq!(Category::header_name(""), None);
        assert_eq!(Category::header_name(":"), None);
        assert_eq!(Category::header_name("   :  "), None);
    }

    #[test]
    fn header_name_keeps_inner_text() {
        // Only the trailing delimiter is removed.
        assert_eq!(Category::header_name("  Caps :"), Some("  Caps "));
        assert_eq!(Category::header_name("Ratio 1:2:"), Some("Ratio 1:2"));
    }

    #[test]
    fn case_insensitive_match() {
        let category = Category::new("Resistors");
        assert!(category.matches_name("resistors"));
        assert!(category.matches_name("RESISTORS"));
        assert!(!category.matches_name("Resistor"));
    }

    #[test]
    fn accumulates_components_in_order() {
        let mut category = Category::from_header("Diodes:").unwrap();
        category.push_component(Component::new("1N4148"));
        category.push_component(Component::new("BAT54S"));

        let names: Vec<_> = category.components().iter().map(Component::name).collect();
        assert_eq!(names, ["1N4148", "BAT54S"]);
        assert_eq!(category.len(), 2);
        assert_eq!(category.picked_count(), 0);
    }
}
