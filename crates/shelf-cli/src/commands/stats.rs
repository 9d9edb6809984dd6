use shelf_core::query;

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::flair;
use crate::output::print_stats;

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let store = ctx.open_store_or_empty()?;
    let stats = query::aggregate(store.books());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    // Decorative only. Failure renders nothing and the stats are unaffected.
    if ctx.flair_enabled(args.flair) && !ctx.quiet() {
        if let Some(quote) = flair::fetch_quote() {
            println!("{}", quote);
            println!();
        }
    }

    print_stats(&stats, ctx.quiet());
    Ok(())
}
