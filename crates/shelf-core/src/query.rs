//! Stateless, read-only queries over a library snapshot.
//!
//! Nothing in this module mutates; every function takes the book slice the
//! store hands out and derives a result from it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::book::Book;
use crate::error::ShelfError;

/// Which book field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "author" => Ok(SearchField::Author),
            "genre" => Ok(SearchField::Genre),
            other => Err(ShelfError::Validation {
                field: "search field",
                reason: format!("\"{}\" is not one of title, author, genre", other),
            }),
        }
    }
}

/// Case-insensitive substring search against one field of every book.
///
/// Preserves the library's canonical order. An empty result is not an
/// error, and an empty `term` matches every book (the empty string is a
/// substring of everything).
pub fn search<'a>(books: &'a [Book], term: &str, field: SearchField) -> Vec<&'a Book> {
    let needle = term.to_lowercase();
    books
        .iter()
        .filter(|book| {
            let haystack = match field {
                SearchField::Title => book.title.as_str(),
                SearchField::Author => book.author.as_str(),
                SearchField::Genre => book.genre.as_str(),
            };
            haystack.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Aggregate figures derived from one library snapshot.
///
/// The breakdowns are vectors of pairs rather than maps so that their
/// ordering survives serialization: genre and author are ordered by
/// descending count (ties keep first-encounter order), while decades are
/// ordered by descending decade, most recent first. The decade ordering is
/// deliberately different from the other two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_books: usize,
    pub read_books: usize,
    /// Share of read books in percent; 0.0 for an empty library.
    pub percentage_read: f64,
    pub by_genre: Vec<(String, usize)>,
    pub by_author: Vec<(String, usize)>,
    pub by_decade: Vec<(i32, usize)>,
}

/// Compute counts and breakdowns for a library snapshot.
pub fn aggregate(books: &[Book]) -> Statistics {
    let total_books = books.len();
    let read_books = books.iter().filter(|book| book.read_status).count();
    let percentage_read = if total_books > 0 {
        read_books as f64 / total_books as f64 * 100.0
    } else {
        0.0
    };

    let mut by_genre: Vec<(String, usize)> = Vec::new();
    let mut by_author: Vec<(String, usize)> = Vec::new();
    let mut by_decade: Vec<(i32, usize)> = Vec::new();

    for book in books {
        bump_str(&mut by_genre, book.genre.as_str());
        bump_str(&mut by_author, &book.author);
        bump_decade(&mut by_decade, (book.publication_year / 10) * 10);
    }

    // Stable sorts: ties keep the first-encounter order built above.
    by_genre.sort_by(|a, b| b.1.cmp(&a.1));
    by_author.sort_by(|a, b| b.1.cmp(&a.1));
    by_decade.sort_by(|a, b| b.0.cmp(&a.0));

    Statistics {
        total_books,
        read_books,
        percentage_read,
        by_genre,
        by_author,
        by_decade,
    }
}

fn bump_str(counts: &mut Vec<(String, usize)>, key: &str) {
    match counts.iter_mut().find(|(existing, _)| existing == key) {
        Some(entry) => entry.1 += 1,
        None => counts.push((key.to_string(), 1)),
    }
}

fn bump_decade(counts: &mut Vec<(i32, usize)>, decade: i32) {
    match counts.iter_mut().find(|(existing, _)| *existing == decade) {
        Some(entry) => entry.1 += 1,
        None => counts.push((decade, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{BookInput, Genre};

    fn book(title: &str, author: &str, year: i32, genre: Genre, read: bool) -> Book {
        BookInput::new(title, author, year, genre, read, 300)
            .into_book("2024-01-01 12:00:00".to_string())
    }

    fn sample() -> Vec<Book> {
        vec![
            book("Dune", "Herbert", 1965, Genre::ScienceFiction, true),
            book("Emma", "Austen", 1815, Genre::Romance, false),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let books = sample();
        let hits = search(&books, "aus", SearchField::Author);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Emma");
    }

    #[test]
    fn test_search_no_match_is_empty_not_error() {
        let books = sample();
        assert!(search(&books, "tolkien", SearchField::Author).is_empty());
    }

    #[test]
    fn test_search_empty_term_matches_everything() {
        let books = sample();
        assert_eq!(search(&books, "", SearchField::Title).len(), 2);
    }

    #[test]
    fn test_search_genre_field() {
        let books = sample();
        let hits = search(&books, "science", SearchField::Genre);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dune");
    }

    #[test]
    fn test_search_preserves_library_order() {
        let mut books = sample();
        books.push(book("Dune Messiah", "Herbert", 1969, Genre::ScienceFiction, false));
        let hits = search(&books, "dune", SearchField::Title);
        assert_eq!(hits[0].title, "Dune");
        assert_eq!(hits[1].title, "Dune Messiah");
    }

    #[test]
    fn test_aggregate_empty_library() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total_books, 0);
        assert_eq!(stats.read_books, 0);
        assert_eq!(stats.percentage_read, 0.0);
        assert!(stats.by_genre.is_empty());
        assert!(stats.by_author.is_empty());
        assert!(stats.by_decade.is_empty());
    }

    #[test]
    fn test_aggregate_scenario() {
        let stats = aggregate(&sample());
        assert_eq!(stats.total_books, 2);
        assert_eq!(stats.read_books, 1);
        assert_eq!(stats.percentage_read, 50.0);
        // Decades are ordered most recent first, not by count.
        assert_eq!(stats.by_decade, vec![(1960, 1), (1810, 1)]);
    }

    #[test]
    fn test_genre_counts_sorted_descending_with_stable_ties() {
        let books = vec![
            book("A", "X", 1990, Genre::Romance, false),
            book("B", "Y", 1991, Genre::Fantasy, false),
            book("C", "Z", 1992, Genre::Fantasy, false),
            book("D", "W", 1993, Genre::Mystery, false),
        ];
        let stats = aggregate(&books);
        assert_eq!(stats.by_genre[0], ("Fantasy".to_string(), 2));
        // Romance was encountered before Mystery, so the tie keeps that order.
        assert_eq!(stats.by_genre[1], ("Romance".to_string(), 1));
        assert_eq!(stats.by_genre[2], ("Mystery".to_string(), 1));
    }

    #[test]
    fn test_decade_ordering_is_by_key_not_count() {
        let books = vec![
            book("A", "X", 1981, Genre::Fiction, false),
            book("B", "Y", 1985, Genre::Fiction, false),
            book("C", "Z", 2011, Genre::Fiction, false),
        ];
        let stats = aggregate(&books);
        // 2010s first despite having fewer books than the 1980s.
        assert_eq!(stats.by_decade, vec![(2010, 1), (1980, 2)]);
    }

    #[test]
    fn test_search_field_from_str() {
        assert_eq!("Title".parse::<SearchField>().unwrap(), SearchField::Title);
        assert_eq!("genre".parse::<SearchField>().unwrap(), SearchField::Genre);
        assert!("pages".parse::<SearchField>().is_err());
    }
}
