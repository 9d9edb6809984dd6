use crate::app::AppContext;
use crate::cli::ToggleArgs;

pub fn handle_toggle(ctx: &AppContext, args: &ToggleArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store_strict()?;

    let position = args
        .index
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Positions are 1-based; see `shelf list`"))?;

    let book = store.toggle_read_status(position).map_err(|err| match err {
        // Report the position in the same 1-based form the user typed.
        shelf_core::ShelfError::IndexOutOfRange { len, .. } => {
            anyhow::anyhow!("Index {} is out of range (library has {} books)", args.index, len)
        }
        other => other.into(),
    })?;
    if !ctx.quiet() {
        let state = if book.read_status { "read" } else { "unread" };
        println!("Marked \"{}\" as {}", book.title, state);
    }
    Ok(())
}
