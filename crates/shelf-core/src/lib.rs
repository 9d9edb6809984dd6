//! # Shelf Core
//!
//! Core library for Shelf - a personal library catalog for the command line.
//!
//! This crate provides the data model, the durable book store, and the
//! read-only query engine, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **book**: The `Book` record, the `BookInput` boundary type, and field validation
//! - **store**: `LibraryStore`, the single source of truth backed by one JSON file
//! - **query**: Stateless search and statistics over a library snapshot
//! - **error**: The recoverable error taxonomy shared by all operations
//! - **fs**: Atomic-rename helper for the write path

pub mod book;
pub mod error;
pub mod fs;
pub mod query;
pub mod store;

pub use book::{Book, BookInput, Genre};
pub use error::{Result, ShelfError};
pub use query::{aggregate, search, SearchField, Statistics};
pub use store::LibraryStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
