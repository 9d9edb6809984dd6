//! Text and table output formatting for books and statistics.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

use shelf_core::{Book, Statistics};

use crate::ui::{pad_left, pad_right, truncate};

const TITLE_WIDTH: usize = 30;
const AUTHOR_WIDTH: usize = 20;
const GENRE_WIDTH: usize = 18;
const BAR_WIDTH: usize = 24;
const TOP_AUTHORS: usize = 5;

fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn read_badge(read: bool, color: bool) -> String {
    match (read, color) {
        (true, true) => "read".green().to_string(),
        (true, false) => "read".to_string(),
        (false, true) => "unread".red().to_string(),
        (false, false) => "unread".to_string(),
    }
}

/// Print books as an aligned table.
///
/// Each row carries the book's current 0-based library position, shown
/// 1-based; those are the positions `remove` and `toggle` accept, valid
/// only until the next mutation.
pub fn print_book_table(rows: &[(usize, &Book)], quiet: bool) {
    let color = use_color();

    if !quiet {
        let header = format!(
            "{} {} {} {} {} {} {}",
            pad_left("#", 4),
            pad_right("TITLE", TITLE_WIDTH),
            pad_right("AUTHOR", AUTHOR_WIDTH),
            pad_left("YEAR", 4),
            pad_right("GENRE", GENRE_WIDTH),
            pad_left("PAGES", 5),
            "STATUS",
        );
        if color {
            println!("{}", header.dimmed());
        } else {
            println!("{}", header);
        }
    }

    for (position, book) in rows {
        println!(
            "{} {} {} {} {} {} {}",
            pad_left(&(position + 1).to_string(), 4),
            pad_right(&truncate(&book.title, TITLE_WIDTH), TITLE_WIDTH),
            pad_right(&truncate(&book.author, AUTHOR_WIDTH), AUTHOR_WIDTH),
            pad_left(&book.publication_year.to_string(), 4),
            pad_right(book.genre.as_str(), GENRE_WIDTH),
            pad_left(&book.pages.to_string(), 5),
            read_badge(book.read_status, color),
        );
    }
}

/// Print statistics with ASCII bar charts for the breakdowns.
///
/// A pure function of the aggregated `Statistics`; the chart layer never
/// looks at the library itself.
pub fn print_stats(stats: &Statistics, quiet: bool) {
    println!("Total books: {}", stats.total_books);
    println!(
        "Read: {} ({:.1}%)",
        stats.read_books, stats.percentage_read
    );

    if stats.total_books == 0 || quiet {
        return;
    }

    print_breakdown(
        "By genre",
        &labeled(&stats.by_genre, |genre| genre.clone()),
    );
    print_breakdown(
        "Top authors",
        &labeled(&stats.by_author[..stats.by_author.len().min(TOP_AUTHORS)], |a| {
            a.clone()
        }),
    );
    print_breakdown(
        "By decade",
        &labeled(&stats.by_decade, |decade| format!("{}s", decade)),
    );
}

fn labeled<K>(entries: &[(K, usize)], label: impl Fn(&K) -> String) -> Vec<(String, usize)> {
    entries
        .iter()
        .map(|(key, count)| (label(key), *count))
        .collect()
}

fn print_breakdown(title: &str, entries: &[(String, usize)]) {
    if entries.is_empty() {
        return;
    }
    let color = use_color();
    println!();
    if color {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_count = entries.iter().map(|(_, count)| *count).max().unwrap_or(1);

    for (label, count) in entries {
        let bar_len = (count * BAR_WIDTH).div_ceil(max_count);
        println!(
            "  {} {} {}",
            pad_right(label, label_width),
            "#".repeat(bar_len),
            count,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_formats_decades() {
        let rows = labeled(&[(1960, 1), (1810, 2)], |decade| format!("{}s", decade));
        assert_eq!(rows[0], ("1960s".to_string(), 1));
        assert_eq!(rows[1], ("1810s".to_string(), 2));
    }

    #[test]
    fn test_read_badge_plain() {
        assert_eq!(read_badge(true, false), "read");
        assert_eq!(read_badge(false, false), "unread");
    }
}
