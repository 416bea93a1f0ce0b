//! Cheapest-first selection over every book in the catalog.
//!
//! Backed by a min-heap keyed on `(price, insertion sequence)`. Prices compare
//! with `f64::total_cmp`, so ordering is total even for NaN, and equal prices
//! come out in the order they were inserted.

use crate::types::Book;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::Arc;

#[derive(Debug)]
struct Entry {
    seq: u64,
    book: Arc<Book>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.book
            .price()
            .total_cmp(&other.book.price())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-by-price priority structure
#[derive(Debug, Default)]
pub struct PopularitySelector {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl PopularitySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, book: Arc<Book>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { seq, book }));
    }

    /// Remove and return the cheapest remaining book
    pub fn pop(&mut self) -> Option<Arc<Book>> {
        self.heap.pop().map(|Reverse(entry)| entry.book)
    }

    /// Remove up to `count` of the cheapest books, cheapest first
    pub fn take_cheapest(&mut self, count: usize) -> Vec<Arc<Book>> {
        let mut books = Vec::with_capacity(count.min(self.heap.len()));
        while books.len() < count {
            match self.pop() {
                Some(book) => books.push(book),
                None => break,
            }
        }
        books
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
