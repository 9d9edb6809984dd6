//! Output formatting helpers for the CLI.
//!
//! This module renders books and statistics in the two supported shapes:
//! human-readable text tables and JSON.

mod json;
mod text;

// Re-export public API
pub use json::books_json;
pub use text::{print_book_table, print_stats};
