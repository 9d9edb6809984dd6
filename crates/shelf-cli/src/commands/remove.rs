use std::io::IsTerminal;

use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::RemoveArgs;

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store_strict()?;

    // List positions are shown 1-based; the store works 0-based.
    let position = args
        .index
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Positions are 1-based; see `shelf list`"))?;

    if !args.yes && std::io::stdin().is_terminal() {
        // Re-read the title at the live position; the prompt must never
        // show a book other than the one about to be removed.
        if let Some(book) = store.books().get(position) {
            let proceed = Confirm::new()
                .with_prompt(format!("Remove \"{}\" by {}?", book.title, book.author))
                .default(false)
                .interact()?;
            if !proceed {
                if !ctx.quiet() {
                    println!("Aborted.");
                }
                return Ok(());
            }
        }
    }

    let removed = store.remove(position).map_err(|err| match err {
        // Report the position in the same 1-based form the user typed.
        shelf_core::ShelfError::IndexOutOfRange { len, .. } => {
            anyhow::anyhow!("Index {} is out of range (library has {} books)", args.index, len)
        }
        other => other.into(),
    })?;
    if !ctx.quiet() {
        println!(
            "Removed \"{}\" (library now {} books)",
            removed.title,
            store.len()
        );
    }
    Ok(())
}
