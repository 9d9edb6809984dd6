//! Add command handler: collect a `BookInput` from flags or prompts and
//! hand it to the store for validation and insertion.

use std::io::IsTerminal;
use std::str::FromStr;

use chrono::Datelike;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use shelf_core::{BookInput, Genre};

use crate::app::AppContext;
use crate::cli::AddArgs;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store_strict()?;

    let interactive = std::io::stdin().is_terminal() && !args.no_input;
    let input = collect_input(args, interactive)?;

    let book = store.add(input)?;

    if !ctx.quiet() {
        println!(
            "Added \"{}\" by {} (library now {} books)",
            book.title,
            book.author,
            store.len()
        );
    }
    Ok(())
}

/// Fill in the book fields from flags, prompting for anything missing.
///
/// Non-interactive invocations (piped stdin or `--no-input`) turn missing
/// required flags into errors instead of hanging on a prompt.
fn collect_input(args: &AddArgs, interactive: bool) -> anyhow::Result<BookInput> {
    let theme = ColorfulTheme::default();

    let title = match (&args.title, interactive) {
        (Some(title), _) => title.clone(),
        (None, true) => Input::with_theme(&theme)
            .with_prompt("Title")
            .interact_text()?,
        (None, false) => return Err(missing("--title")),
    };

    let author = match (&args.author, interactive) {
        (Some(author), _) => author.clone(),
        (None, true) => Input::with_theme(&theme)
            .with_prompt("Author")
            .interact_text()?,
        (None, false) => return Err(missing("--author")),
    };

    let year = match (args.year, interactive) {
        (Some(year), _) => year,
        (None, true) => Input::with_theme(&theme)
            .with_prompt("Publication year")
            .default(chrono::Local::now().year())
            .interact_text()?,
        (None, false) => return Err(missing("--year")),
    };

    let genre = match (&args.genre, interactive) {
        (Some(raw), _) => Genre::from_str(raw)?,
        (None, true) => {
            let names: Vec<&str> = Genre::ALL.iter().map(|g| g.as_str()).collect();
            let selection = Select::with_theme(&theme)
                .with_prompt("Genre")
                .items(&names)
                .default(0)
                .interact()?;
            Genre::ALL[selection]
        }
        (None, false) => return Err(missing("--genre")),
    };

    let read_status = if args.read {
        true
    } else if interactive {
        Confirm::with_theme(&theme)
            .with_prompt("Have you read it?")
            .default(false)
            .interact()?
    } else {
        false
    };

    let pages = match (args.pages, interactive) {
        (Some(pages), _) => pages,
        (None, true) => Input::with_theme(&theme)
            .with_prompt("Pages")
            .default(100u32)
            .interact_text()?,
        (None, false) => return Err(missing("--pages")),
    };

    Ok(BookInput::new(title, author, year, genre, read_status, pages))
}

fn missing(flag: &str) -> anyhow::Error {
    anyhow::anyhow!("{} is required when prompts are disabled", flag)
}
