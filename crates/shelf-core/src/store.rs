//! The library store: single source of truth for the book collection
//! and its durable representation.
//!
//! The store exclusively owns the ordered `Vec<Book>`. Insertion order is
//! the canonical display order; nothing re-sorts on mutation, and duplicate
//! titles or authors are permitted. Every mutating operation rewrites the
//! whole library file, which is O(total books) per mutation and fine at the
//! scale of a personal collection.
//!
//! Persistence is write-through with best-effort durability, not
//! transactional: a failed write leaves the in-memory sequence as the
//! (unsaved) working copy, and the previous on-disk content intact thanks
//! to the temp-file-plus-rename write path.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::book::{timestamp_now, Book, BookInput};
use crate::error::{Result, ShelfError};
use crate::fs::rename_with_fallback;

/// Owns the ordered book sequence and the path of its backing file.
///
/// Positions handed out by [`books`](Self::books) are ephemeral: any
/// mutation may shift them, so callers must re-derive positions after
/// every `add`, `remove`, or `toggle_read_status`.
#[derive(Debug)]
pub struct LibraryStore {
    path: PathBuf,
    books: Vec<Book>,
}

impl LibraryStore {
    /// Create an empty store backed by `path`, without touching disk.
    ///
    /// This is the fallback when [`load`](Self::load) reports a storage
    /// error and the caller chooses to degrade rather than abort.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            books: Vec::new(),
        }
    }

    /// Hydrate a store from the persisted file at `path`.
    ///
    /// Absence of the file is equivalent to an empty library, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the file exists but cannot be read
    /// or does not parse as a JSON array of books. The caller decides
    /// whether to surface this or fall back to [`empty`](Self::empty).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no library file at {}, starting empty", path.display());
                return Ok(Self::empty(path));
            }
            Err(err) => return Err(err.into()),
        };

        let books: Vec<Book> = serde_json::from_str(&contents)?;
        info!("loaded {} books from {}", books.len(), path.display());
        Ok(Self { path, books })
    }

    /// Read-only view of the current sequence, in canonical order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate `input`, stamp `date_added`, append, and persist.
    ///
    /// Returns a copy of the stored book.
    ///
    /// # Errors
    ///
    /// - `ShelfError::Validation` if any field constraint fails; the
    ///   sequence is untouched.
    /// - `ShelfError::Storage` if the persist fails; the book stays in
    ///   memory as unsaved state.
    pub fn add(&mut self, input: BookInput) -> Result<Book> {
        input.validate()?;
        let book = input.into_book(timestamp_now());
        self.books.push(book.clone());
        self.persist()?;
        info!("added \"{}\" (library now {} books)", book.title, self.books.len());
        Ok(book)
    }

    /// Remove and return the book at `index`, shifting later positions down.
    ///
    /// The bound is re-checked against the live sequence at call time;
    /// positions captured before a prior mutation are not trusted.
    ///
    /// # Errors
    ///
    /// - `ShelfError::IndexOutOfRange` if `index` is not a valid position.
    /// - `ShelfError::Storage` if the persist fails after removal.
    pub fn remove(&mut self, index: usize) -> Result<Book> {
        self.check_index(index)?;
        let book = self.books.remove(index);
        self.persist()?;
        info!("removed \"{}\" (library now {} books)", book.title, self.books.len());
        Ok(book)
    }

    /// Flip the read flag of the book at `index` and return the updated book.
    ///
    /// # Errors
    ///
    /// Same conditions as [`remove`](Self::remove).
    pub fn toggle_read_status(&mut self, index: usize) -> Result<Book> {
        self.check_index(index)?;
        self.books[index].read_status = !self.books[index].read_status;
        self.persist()?;
        Ok(self.books[index].clone())
    }

    /// Serialize the full sequence to the backing file, replacing any prior
    /// content.
    ///
    /// The write goes to a sibling temp file which is then renamed over the
    /// target, so a failed write never truncates previously valid data.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the write cannot complete. The
    /// in-memory library remains authoritative; there is no automatic
    /// retry.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.books)
            .map_err(|err| ShelfError::Storage(err.to_string()))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;
        rename_with_fallback(&temp_path, &self.path)?;
        debug!("persisted {} books to {}", self.books.len(), self.path.display());
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.books.len() {
            return Err(ShelfError::IndexOutOfRange {
                index,
                len: self.books.len(),
            });
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
