//! Console output helpers. Everything goes to stderr so stdout stays clean.

use colored::*;
use comfy_table::{Cell, CellAlignment, Table};
use std::fmt::Display;

/// Format a number with thousands separators
pub fn format_number<T: Display>(n: T) -> String {
    let s = n.to_string();

    let (is_negative, digits) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s.as_str())
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if is_negative {
        result.push('-');
    }

    result.chars().rev().collect()
}

/// Title block printed once at start-up
pub fn banner(title: &str) {
    let rule = "=".repeat(75);
    eprintln!("\n{}", rule.dimmed());
    eprintln!("   {}", title.bold());
    eprintln!("{}", rule.dimmed());
}

/// Numbered pipeline step, e.g. `Step 2/5: ...`
pub fn step(current: usize, total: usize, msg: &str) {
    eprintln!("{} {}", format!("Step {}/{}:", current, total).cyan().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow(), msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    eprintln!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg.green());
}

/// Create a standard table with consistent styling
pub fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// Create a header cell with center alignment
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .set_alignment(CellAlignment::Center)
        .add_attribute(comfy_table::Attribute::Bold)
}
