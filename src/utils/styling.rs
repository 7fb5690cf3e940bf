//! Terminal styling utilities for the probe output

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static PIN: Emoji<'_, '_> = Emoji("📌 ", "");

/// Print the probe banner line
pub fn print_banner(program: &str, version: &str) {
    println!();
    println!(
        "    {} {} {}",
        style("typarg").cyan().bold(),
        style(format!("v{}", version)).dim(),
        style(format!("probing '{}'", truncate_string(program, 40))).dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
}

/// Print a section header with styling
pub fn print_section_header(title: &str) {
    println!();
    println!("    {} {}", PIN, style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!("      {} {}", style(count).yellow().bold(), description);
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len.saturating_sub(3))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
