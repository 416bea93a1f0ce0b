//! Lookup structures over the catalog's books.

use crate::types::{Book, Category};
use std::collections::HashMap;
use std::sync::Arc;

/// Exact-title lookup. Last write wins on duplicate titles.
#[derive(Clone, Debug, Default)]
pub struct TitleIndex {
    books: HashMap<String, Arc<Book>>,
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a book, returning the entry it replaced (if any)
    pub fn insert(&mut self, book: Arc<Book>) -> Option<Arc<Book>> {
        self.books.insert(book.title().to_string(), book)
    }

    pub fn get(&self, title: &str) -> Option<&Arc<Book>> {
        self.books.get(title)
    }
}

/// Books grouped by category name.
///
/// Categories are kept in creation order; the map only stores positions.
#[derive(Clone, Debug, Default)]
pub struct CategoryIndex {
    categories: Vec<Category>,
    positions: HashMap<String, usize>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a book to `name`, creating the category on first use
    pub fn insert(&mut self, name: &str, book: Arc<Book>) {
        let idx = match self.positions.get(name) {
            Some(&idx) => idx,
            None => {
                tracing::debug!("Creating category '{}'", name);
                self.categories.push(Category::new(name));
                let idx = self.categories.len() - 1;
                self.positions.insert(name.to_string(), idx);
                idx
            }
        };
        self.categories[idx].add_book(book);
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.positions.get(name).map(|&idx| &self.categories[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }
}
