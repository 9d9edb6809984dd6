use std::str::FromStr;

use shelf_core::{query, Book, SearchField};

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{books_json, print_book_table};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let field = SearchField::from_str(&args.by)?;
    let store = ctx.open_store_or_empty()?;
    let books = store.books();

    let hits = query::search(books, &args.term, field);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&books_json(&hits)?)?);
        return Ok(());
    }

    if hits.is_empty() {
        if !ctx.quiet() {
            println!("No books match \"{}\" by {}.", args.term, field);
        }
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{} of {} books match \"{}\" by {}", hits.len(), books.len(), args.term, field);
        println!();
    }

    // Show each hit with its current library position so the result can be
    // fed straight into `remove`/`toggle`. Matched by identity against the
    // snapshot the search ran over.
    let rows: Vec<(usize, &Book)> = books
        .iter()
        .enumerate()
        .filter(|(_, book)| hits.iter().any(|hit| std::ptr::eq(*hit, *book)))
        .collect();
    print_book_table(&rows, ctx.quiet());
    Ok(())
}
