//! Category-keyed lists that remember first-seen order.

use std::collections::HashMap;

/// Map from category to an ordered list of entries.
///
/// Reads of an unknown category see an empty list; writes create it lazily.
/// Iteration follows the order in which categories were first written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap<T> {
    order: Vec<String>,
    entries: HashMap<String, Vec<T>>,
}

impl<T> Default for CategoryMap<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }
}

impl<T> CategoryMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str) -> &[T] {
        self.entries.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable access to an existing list; does not create one.
    pub fn get_mut(&mut self, category: &str) -> Option<&mut Vec<T>> {
        self.entries.get_mut(category)
    }

    /// Mutable access to a list, creating it on first use.
    pub fn entry(&mut self, category: &str) -> &mut Vec<T> {
        if !self.entries.contains_key(category) {
            self.order.push(category.to_string());
        }
        self.entries.entry(category.to_string()).or_default()
    }

    pub fn push(&mut self, category: &str, value: T) {
        self.entry(category).push(value);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Categories in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.order
            .iter()
            .map(move |category| (category.as_str(), self.get(category)))
    }
}
