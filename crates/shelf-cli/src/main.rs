//! Shelf CLI - a personal library catalog for the command line.
//!
//! This is the presentation layer over `shelf-core`. It turns commands
//! into store mutations and query calls, and renders the results; all
//! catalog semantics live in the core crate.

mod app;
mod cli;
mod commands;
mod config;
mod flair;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, ListArgs};
use crate::commands::{
    handle_add, handle_list, handle_remove, handle_search, handle_stats, handle_toggle,
};

fn main() -> anyhow::Result<()> {
    // Stderr logging, level from RUST_LOG. Init failure is not fatal; the
    // handle must outlive main or logging stops.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .ok()
        .and_then(|logger| logger.log_to_stderr().start().ok());

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli)?;

    match &cli.command {
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Add(args)) => handle_add(&ctx, args),
        Some(Commands::Remove(args)) => handle_remove(&ctx, args),
        Some(Commands::Toggle(args)) => handle_toggle(&ctx, args),
        Some(Commands::Search(args)) => handle_search(&ctx, args),
        Some(Commands::Stats(args)) => handle_stats(&ctx, args),
        // Bare `shelf` behaves like `shelf list`.
        None => handle_list(&ctx, &ListArgs::default()),
    }
}
