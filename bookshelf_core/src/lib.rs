#![forbid(unsafe_code)]

//! Core domain model and business logic for Bookshelf.
//!
//! This crate provides:
//! - Domain types (books, categories)
//! - Title and category indices
//! - Cheapest-first popularity selection
//! - The catalog tying them together
//! - The interactive menu driver

pub mod types;
pub mod error;
pub mod index;
pub mod popularity;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod menu;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{format_price, Book, Category};
pub use catalog::Catalog;
pub use config::{Config, ConfigSource};
pub use menu::{Command, Flow, Menu, MenuSettings};
