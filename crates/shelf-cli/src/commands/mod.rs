//! Command handlers for the Shelf CLI.

mod add;
mod list;
mod remove;
mod search;
mod stats;
mod toggle;

pub use add::handle_add;
pub use list::handle_list;
pub use remove::handle_remove;
pub use search::handle_search;
pub use stats::handle_stats;
pub use toggle::handle_toggle;
