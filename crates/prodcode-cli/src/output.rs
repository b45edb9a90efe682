//! Output formatting utilities.

use prodcode_core::Classification;

/// Formats a classification as a simple table row.
pub fn format_table_row(report: &Classification) -> String {
    format!(
        "{:<24} {:<16} {}",
        truncate(&report.input, 24),
        truncate(&report.normalized, 16),
        report.code_type
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<24} {:<16} {}", "CODE", "NORMALIZED", "TYPE");
    println!("{}", "-".repeat(48));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
