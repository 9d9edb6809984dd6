use shelf_core::Book;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{books_json, print_book_table};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store_or_empty()?;
    let books = store.books();

    if args.json {
        let refs: Vec<&Book> = books.iter().collect();
        println!("{}", serde_json::to_string_pretty(&books_json(&refs)?)?);
        return Ok(());
    }

    if books.is_empty() {
        if !ctx.quiet() {
            println!("The library is empty. Add a book with `shelf add`.");
        }
        return Ok(());
    }

    if !ctx.quiet() {
        println!("Library: {} books ({})", books.len(), store.path().display());
        println!();
    }

    // Positions are derived from the live sequence on every invocation.
    let rows: Vec<(usize, &Book)> = books.iter().enumerate().collect();
    print_book_table(&rows, ctx.quiet());
    Ok(())
}
