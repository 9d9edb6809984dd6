//! Core data types for the library catalog.
//!
//! `Book` is the persisted record; `BookInput` is the unvalidated boundary
//! type the presentation layer fills in before calling
//! [`LibraryStore::add`](crate::store::LibraryStore::add). Validation happens
//! at that boundary: a `Book` held by the store always satisfies its field
//! constraints.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// Maximum length (in characters) for title and author.
pub const MAX_TEXT_LEN: usize = 100;

/// Earliest accepted publication year.
pub const MIN_YEAR: i32 = 1000;

/// Maximum accepted page count.
pub const MAX_PAGES: u32 = 10_000;

/// Timestamp format for `date_added` (local time).
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The closed set of genres a book can carry.
///
/// Serialized as the display string (e.g. `"Science Fiction"`), which is
/// also the on-disk representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Fantasy,
    Mystery,
    Thriller,
    Romance,
    Biography,
    Autobiography,
    #[serde(rename = "Self-Help")]
    SelfHelp,
    #[serde(rename = "Historical Fiction")]
    HistoricalFiction,
    #[serde(rename = "Young Adult")]
    YoungAdult,
    #[serde(rename = "Children's")]
    Childrens,
    Poetry,
    #[serde(rename = "Graphic Novel")]
    GraphicNovel,
    Others,
}

impl Genre {
    /// All genres, in the order presented to the user.
    pub const ALL: [Genre; 16] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Thriller,
        Genre::Romance,
        Genre::Biography,
        Genre::Autobiography,
        Genre::SelfHelp,
        Genre::HistoricalFiction,
        Genre::YoungAdult,
        Genre::Childrens,
        Genre::Poetry,
        Genre::GraphicNovel,
        Genre::Others,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::Romance => "Romance",
            Genre::Biography => "Biography",
            Genre::Autobiography => "Autobiography",
            Genre::SelfHelp => "Self-Help",
            Genre::HistoricalFiction => "Historical Fiction",
            Genre::YoungAdult => "Young Adult",
            Genre::Childrens => "Children's",
            Genre::Poetry => "Poetry",
            Genre::GraphicNovel => "Graphic Novel",
            Genre::Others => "Others",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ShelfError;

    /// Matches the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim();
        Genre::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ShelfError::Validation {
                field: "genre",
                reason: format!("\"{}\" is not a recognized genre", s),
            })
    }
}

/// One catalog entry.
///
/// Field names match the persisted JSON layout exactly: a library file is a
/// flat JSON array of these records and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Year of publication
    pub publication_year: i32,

    /// Genre from the closed set
    pub genre: Genre,

    /// Whether the book has been read
    pub read_status: bool,

    /// Page count
    pub pages: u32,

    /// Creation timestamp (`YYYY-MM-DD HH:MM:SS`, local time).
    /// Assigned once by the store; immutable thereafter.
    pub date_added: String,
}

/// Builder for a book about to be added to the library.
///
/// Carries everything except `date_added`, which the store assigns at
/// insertion time.
#[derive(Debug, Clone)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: Genre,
    pub read_status: bool,
    pub pages: u32,
}

impl BookInput {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publication_year: i32,
        genre: Genre,
        read_status: bool,
        pages: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
            genre,
            read_status,
            pages,
        }
    }

    /// Check every field constraint, reporting the first offending field.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Validation` naming the field when:
    /// - title or author is empty or longer than [`MAX_TEXT_LEN`] characters
    /// - publication year is before [`MIN_YEAR`] or after the current year
    /// - page count is zero or greater than [`MAX_PAGES`]
    pub fn validate(&self) -> Result<()> {
        validate_text("title", &self.title)?;
        validate_text("author", &self.author)?;

        let current_year = Local::now().year();
        if self.publication_year < MIN_YEAR || self.publication_year > current_year {
            return Err(ShelfError::Validation {
                field: "publication_year",
                reason: format!("must be between {} and {}", MIN_YEAR, current_year),
            });
        }

        if self.pages == 0 || self.pages > MAX_PAGES {
            return Err(ShelfError::Validation {
                field: "pages",
                reason: format!("must be between 1 and {}", MAX_PAGES),
            });
        }

        Ok(())
    }

    /// Consume the input and stamp it into a stored `Book`.
    ///
    /// Callers must have run [`validate`](Self::validate) first; the store
    /// is the only intended caller.
    pub(crate) fn into_book(self, date_added: String) -> Book {
        Book {
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            genre: self.genre,
            read_status: self.read_status,
            pages: self.pages,
            date_added,
        }
    }
}

fn validate_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShelfError::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ShelfError::Validation {
            field,
            reason: format!("must be at most {} characters", MAX_TEXT_LEN),
        });
    }
    Ok(())
}

/// Current local time in the `date_added` format.
pub(crate) fn timestamp_now() -> String {
    Local::now().format(DATE_ADDED_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> BookInput {
        BookInput::new("Dune", "Herbert", 1965, Genre::ScienceFiction, true, 412)
    }

    #[test]
    fn test_valid_input_passes() {
        valid_input().validate().expect("input should be valid");
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut input = valid_input();
        input.title = "   ".to_string();
        let err = input.validate().unwrap_err();
        assert!(matches!(err, ShelfError::Validation { field: "title", .. }));
    }

    #[test]
    fn test_overlong_author_rejected() {
        let mut input = valid_input();
        input.author = "a".repeat(MAX_TEXT_LEN + 1);
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            ShelfError::Validation {
                field: "author",
                ..
            }
        ));
    }

    #[test]
    fn test_text_limit_counts_chars_not_bytes() {
        let mut input = valid_input();
        // 100 multi-byte characters is exactly at the limit
        input.title = "\u{00e9}".repeat(MAX_TEXT_LEN);
        input.validate().expect("100 chars should be accepted");
    }

    #[test]
    fn test_year_bounds() {
        let mut input = valid_input();
        input.publication_year = 999;
        assert!(input.validate().is_err());

        input.publication_year = MIN_YEAR;
        assert!(input.validate().is_ok());

        input.publication_year = Local::now().year() + 1;
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            ShelfError::Validation {
                field: "publication_year",
                ..
            }
        ));
    }

    #[test]
    fn test_pages_bounds() {
        let mut input = valid_input();
        input.pages = 0;
        assert!(input.validate().is_err());

        input.pages = MAX_PAGES;
        assert!(input.validate().is_ok());

        input.pages = MAX_PAGES + 1;
        let err = input.validate().unwrap_err();
        assert!(matches!(err, ShelfError::Validation { field: "pages", .. }));
    }

    #[test]
    fn test_genre_serializes_as_display_string() {
        let json = serde_json::to_string(&Genre::ScienceFiction).unwrap();
        assert_eq!(json, "\"Science Fiction\"");
        let back: Genre = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Genre::ScienceFiction);
    }

    #[test]
    fn test_genre_from_str_case_insensitive() {
        assert_eq!(
            Genre::from_str("science fiction").unwrap(),
            Genre::ScienceFiction
        );
        assert_eq!(Genre::from_str("children's").unwrap(), Genre::Childrens);
        assert!(Genre::from_str("Cookbook").is_err());
    }

    #[test]
    fn test_timestamp_format_is_well_formed() {
        let stamp = timestamp_now();
        chrono::NaiveDateTime::parse_from_str(&stamp, DATE_ADDED_FORMAT)
            .expect("timestamp should match the documented format");
    }
}
