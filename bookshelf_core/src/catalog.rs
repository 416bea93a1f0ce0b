//! The book catalog.
//!
//! Owns the three indices and keeps them in step: every `add_book` writes to
//! the title index, the category index, and the popularity selector.

use crate::index::{CategoryIndex, TitleIndex};
use crate::popularity::PopularitySelector;
use crate::types::{Book, Category};
use std::sync::Arc;

/// All books known to the store
#[derive(Debug, Default)]
pub struct Catalog {
    titles: TitleIndex,
    categories: CategoryIndex,
    popular: PopularitySelector,
    total: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new book under `category`
    ///
    /// A book whose title is already indexed replaces the earlier one for
    /// lookups, but both stay in their categories and in the price ranking.
    /// Prices are not validated.
    pub fn add_book(&mut self, category: &str, title: &str, author: &str, price: f64) {
        let book = Arc::new(Book::new(title, author, price));

        if self.titles.insert(Arc::clone(&book)).is_some() {
            tracing::debug!("Title '{}' already indexed, replacing lookup entry", title);
        }
        self.categories.insert(category, Arc::clone(&book));
        self.popular.push(book);
        self.total += 1;

        tracing::debug!(
            "Added '{}' by {} to '{}' ({} books total)",
            title,
            author,
            category,
            self.total
        );
    }

    /// Exact-title lookup
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.titles.get(title).map(Arc::as_ref)
    }

    /// Every category, in the order they were first used
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Take the `count` cheapest books still in the price ranking
    ///
    /// **Destructive**: returned books leave the ranking for good, so a
    /// second call only sees what is left. They remain in their category and
    /// in title lookup. Equal prices come out in insertion order.
    pub fn popular_books(&mut self, count: usize) -> Vec<Arc<Book>> {
        let books = self.popular.take_cheapest(count);
        tracing::debug!(
            "Extracted {} of {} requested popular books, {} remain",
            books.len(),
            count,
            self.popular.len()
        );
        books
    }

    /// Books not yet returned by [`Catalog::popular_books`]
    pub fn remaining_popular(&self) -> usize {
        self.popular.len()
    }

    /// Total number of `add_book` calls
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
