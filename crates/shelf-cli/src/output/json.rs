//! JSON output formatting for books.

use shelf_core::Book;

/// Convert a set of book references to a JSON array for output.
///
/// The records use the same layout as the persisted library file.
pub fn books_json(books: &[&Book]) -> anyhow::Result<serde_json::Value> {
    let values = books
        .iter()
        .map(|book| serde_json::to_value(book))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::Value::Array(values))
}
