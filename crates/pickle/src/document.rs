use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::category::Category;
use crate::component::Component;
use crate::parse::{ParseOptions, Parser};
use crate::Result;

/// A parsed pick list: categories in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    categories: Vec<Category>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a pick list held in memory.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: ParseOptions) -> Result<Self> {
        let mut parser = Parser::new(options);
        for line in text.lines() {
            parser.feed_line(line)?;
        }
        parser.finish()
    }

    /// Parse a pick list from any buffered reader, one line at a time.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, ParseOptions::default())
    }

    pub fn from_reader_with<R: BufRead>(reader: R, options: ParseOptions) -> Result<Self> {
        let mut parser = Parser::new(options);
        for line in reader.lines() {
            parser.feed_line(&line?)?;
        }
        parser.finish()
    }

    /// Parse a pick list file. The file is closed before returning, whether
    /// or not parsing succeeded.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, ParseOptions::default())
    }

    pub fn from_file_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader_with(BufReader::new(file), options)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut [Category] {
        &mut self.categories
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn push_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Find a category by name, ignoring case. The first match wins.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.matches_name(name))
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.matches_name(name))
    }

    /// Components of the category called `name`, ignoring case.
    pub fn components_by_category(&self, name: &str) -> Option<&[Component]> {
        self.category(name).map(Category::components)
    }

    /// Iterate every component in file order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.categories.iter().flat_map(|c| c.components().iter())
    }

    pub fn component_count(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    pub fn picked_count(&self) -> usize {
        self.categories.iter().map(Category::picked_count).sum()
    }
}

impl FromIterator<Category> for Document {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
