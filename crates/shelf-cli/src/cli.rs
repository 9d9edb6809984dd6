use clap::{Args, Parser, Subcommand};

use shelf_core::VERSION;

/// Shelf - a personal library catalog for the command line
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the library file
    #[arg(short, long, global = true, env = "SHELF_LIBRARY")]
    pub library: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `list` command
#[derive(Args, Default)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    pub title: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Publication year
    #[arg(long)]
    pub year: Option<i32>,

    /// Genre from the fixed set (e.g. "Science Fiction", "Romance")
    #[arg(long)]
    pub genre: Option<String>,

    /// Mark the book as already read
    #[arg(long)]
    pub read: bool,

    /// Page count
    #[arg(long)]
    pub pages: Option<u32>,

    /// Disable interactive prompts (missing fields become errors)
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Position of the book as shown by `shelf list` (1-based)
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `toggle` command
#[derive(Args)]
pub struct ToggleArgs {
    /// Position of the book as shown by `shelf list` (1-based)
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search term (case-insensitive substring)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Field to match against (title, author, genre)
    #[arg(long, default_value = "title", value_name = "FIELD")]
    pub by: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fetch a decorative literary quote (silently skipped on failure)
    #[arg(long)]
    pub flair: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the whole library in display order
    List(ListArgs),

    /// Add a book to the library
    Add(AddArgs),

    /// Remove a book by its current list position
    Remove(RemoveArgs),

    /// Flip a book's read status by its current list position
    Toggle(ToggleArgs),

    /// Search books by title, author, or genre
    Search(SearchArgs),

    /// Show library statistics
    Stats(StatsArgs),
}
