//! Application context for the Shelf CLI.
//!
//! Bundles CLI arguments with the resolved config so handlers do not
//! re-load configuration or re-resolve the library path themselves. The
//! store is an explicit value opened per command, never ambient state.

use std::path::PathBuf;

use log::warn;

use shelf_core::{LibraryStore, ShelfError};

use crate::cli::Cli;
use crate::config::{default_config_path, default_library_path, read_config, ShelfConfig};

/// Application context shared by all command handlers.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: ShelfConfig,
}

impl<'a> AppContext<'a> {
    /// Create a context from CLI arguments, loading the config file.
    ///
    /// A missing config file is fine; an unparseable one is an error the
    /// user has to fix.
    pub fn new(cli: &'a Cli) -> anyhow::Result<Self> {
        let config = read_config(&default_config_path()?)?;
        Ok(Self { cli, config })
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Whether the decorative flair line should be rendered.
    pub fn flair_enabled(&self, flag: bool) -> bool {
        flag || self.config.ui.flair
    }

    /// Resolve the library path: flag/env, then config file, then the
    /// XDG data default.
    pub fn library_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref path) = self.cli.library {
            return Ok(PathBuf::from(path));
        }
        if let Some(ref path) = self.config.library.path {
            return Ok(PathBuf::from(path));
        }
        default_library_path()
    }

    /// Open the store for a read-only command.
    ///
    /// An unreadable or malformed library file degrades to an empty
    /// in-memory library with a warning, rather than failing the command.
    pub fn open_store_or_empty(&self) -> anyhow::Result<LibraryStore> {
        let path = self.library_path()?;
        match LibraryStore::load(&path) {
            Ok(store) => Ok(store),
            Err(err @ ShelfError::Storage(_)) => {
                warn!("library load failed: {}", err);
                eprintln!(
                    "warning: could not load {} ({}); showing an empty library",
                    path.display(),
                    err
                );
                Ok(LibraryStore::empty(path))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Open the store for a mutating command.
    ///
    /// Here a load failure is fatal: persisting over a file we could not
    /// read would silently destroy whatever it holds.
    pub fn open_store_strict(&self) -> anyhow::Result<LibraryStore> {
        let path = self.library_path()?;
        LibraryStore::load(&path).map_err(|err| {
            anyhow::anyhow!(
                "could not load {}: {} (fix or move the file before modifying the library)",
                path.display(),
                err
            )
        })
    }
}
