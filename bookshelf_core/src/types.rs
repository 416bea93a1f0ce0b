//! Core domain types for the bookshelf.
//!
//! - [`Book`]: an immutable title/author/price record
//! - [`Category`]: a named, append-only sequence of books

use std::fmt;
use std::sync::Arc;

// ============================================================================
// Book
// ============================================================================

/// A book in the catalog. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    title: String,
    author: String,
    price: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Render as `<title> by <author> - <currency><price>`
    pub fn display_with_currency(&self, currency: &str) -> String {
        format!(
            "{} by {} - {}{}",
            self.title,
            self.author,
            currency,
            format_price(self.price)
        )
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with_currency("$"))
    }
}

/// Format a price the way the store has always printed it.
///
/// Magnitudes in `[1e-3, 1e7)` print as plain decimals with at least one
/// fractional digit (`15.0`, `9.99`). Anything outside that range switches
/// to `d.dddE<exp>` notation (`1.0E7`, `1.0E-4`). Non-finite values print as
/// `NaN`, `Infinity` and `-Infinity`.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".into();
    }
    if price.is_infinite() {
        let sign = if price.is_sign_negative() { "-" } else { "" };
        return format!("{}Infinity", sign);
    }

    let magnitude = price.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        with_fraction(price.to_string())
    } else {
        // `{:e}` yields the shortest round-trip digits, e.g. "1.5e-4"
        let scientific = format!("{:e}", price);
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}E{}", with_fraction(mantissa.to_string()), exponent)
            }
            None => scientific,
        }
    }
}

fn with_fraction(digits: String) -> String {
    if digits.contains('.') {
        digits
    } else {
        digits + ".0"
    }
}

// ============================================================================
// Category
// ============================================================================

/// A named group of books, in the order they were added
#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    books: Vec<Arc<Book>>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_book(&mut self, book: Arc<Book>) {
        self.books.push(book);
    }

    pub fn books(&self) -> &[Arc<Book>] {
        &self.books
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_display() {
        let book = Book::new("Dune", "Herbert", 15.0);
        assert_eq!(book.to_string(), "Dune by Herbert - $15.0");

        let book = Book::new("Dune", "Other", 9.99);
        assert_eq!(book.to_string(), "Dune by Other - $9.99");
    }

    #[test]
    fn test_display_with_currency() {
        let book = Book::new("Hobbit", "Tolkien", 10.5);
        assert_eq!(book.display_with_currency("€"), "Hobbit by Tolkien - €10.5");
    }

    #[test]
    fn test_format_price_plain_range() {
        assert_eq!(format_price(0.0), "0.0");
        assert_eq!(format_price(-0.0), "-0.0");
        assert_eq!(format_price(-3.0), "-3.0");
        assert_eq!(format_price(0.001), "0.001");
        assert_eq!(format_price(9999999.0), "9999999.0");
        assert_eq!(format_price(1234567.5), "1234567.5");
    }

    #[test]
    fn test_format_price_scientific_range() {
        assert_eq!(format_price(1e7), "1.0E7");
        assert_eq!(format_price(10000000.0), "1.0E7");
        assert_eq!(format_price(12345678.0), "1.2345678E7");
        assert_eq!(format_price(-2.5e9), "-2.5E9");
        assert_eq!(format_price(1e-4), "1.0E-4");
        assert_eq!(format_price(0.000999), "9.99E-4");
    }

    #[test]
    fn test_format_price_non_finite() {
        assert_eq!(format_price(f64::INFINITY), "Infinity");
        assert_eq!(format_price(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_price(f64::NAN), "NaN");
    }

    #[test]
    fn test_category_preserves_order() {
        let mut category = Category::new("Fiction");
        category.add_book(Arc::new(Book::new("A", "x", 1.0)));
        category.add_book(Arc::new(Book::new("B", "y", 2.0)));

        let titles: Vec<_> = category.books().iter().map(|b| b.title()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(category.name(), "Fiction");
        assert_eq!(category.books().len(), 2);
    }
}
