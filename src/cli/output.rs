//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::pipeline::ListEntry;
use crate::portfolio::Summary;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print a filtered collection as a table
pub fn print_entry_table<T: ListEntry>(entries: &[&T]) {
    if entries.is_empty() {
        info("No entries match the current filters");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").fg(Color::Cyan),
            Cell::new("Category").fg(Color::Cyan),
            Cell::new("Date").fg(Color::Cyan),
        ]);

    for entry in entries {
        let date = entry
            .date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(entry.name()),
            Cell::new(entry.category().unwrap_or("-")),
            Cell::new(date),
        ]);
    }

    println!("{table}");
}

/// Print the selectable category chips for a collection
pub fn print_categories(categories: &[String]) {
    println!("  {} {}", "Categories:".bold(), categories.join(", "));
}

/// Print the normalized dashboard summary
pub fn print_summary(summary: &Summary) {
    println!("{}", "Portfolio Summary".bold().underline());
    println!();
    println!("  {} {}", "Projects:".bold(), summary.projects);
    println!("  {} {}", "Skills:".bold(), summary.skills);
    println!("  {} {}", "Certificates:".bold(), summary.certificates);
    println!("  {} {}", "Experiences:".bold(), summary.experiences);

    if let Some(visits) = summary.visits {
        println!("  {} {}", "Visits:".bold(), visits);
    }
}

/// Confirm an action with the user
pub fn confirm(message: &str) -> bool {
    use std::io::{self, Write};

    print!("{} [y/N] ", message);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
