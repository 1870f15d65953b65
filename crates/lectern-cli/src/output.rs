//! Rendering helpers for the lectern binary.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Render rows as a table or a JSON array.
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("Nothing to show."),
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(rows),
    }
}

/// Render any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("✗ Failed to render JSON: {e}"),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<20} {value}", format!("{key}:"));
}
