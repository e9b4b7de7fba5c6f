//! Filter-as-you-type over named list items.

/// An item the search box can show or hide
pub trait Searchable {
    /// Value of the item's name attribute, if it has one
    fn name_attribute(&self) -> Option<&str>;

    /// Full text of the item, used when there is no name attribute
    fn text_content(&self) -> String;
}

impl Searchable for crate::backend::RepositorySummary {
    fn name_attribute(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn text_content(&self) -> String {
        format!("{} {}", self.name, self.tag_count)
    }
}

/// Case-insensitive substring filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
    needle: String,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        let mut filter = Self::default();
        filter.set_query(query);
        filter
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.needle = self.query.to_lowercase();
    }

    pub fn push(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query);
    }

    pub fn pop(&mut self) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query);
    }

    pub fn is_visible<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        match item.name_attribute().filter(|name| !name.is_empty()) {
            Some(name) => name.to_lowercase().contains(&self.needle),
            None => item.text_content().to_lowercase().contains(&self.needle),
        }
    }

    /// Indices of the visible items
    pub fn visible_indices<T: Searchable>(&self, items: &[T]) -> Vec<usize> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.is_visible(*item))
            .map(|(index, _)| index)
            .collect()
    }
}
