//! Terminal styling utilities for consistent command output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print a command header, e.g. "◆ Importing corpus"
pub fn print_header(title: &str) {
    println!();
    println!(" {} {}", style("◆").cyan().bold(), style(title).white().bold());
}

/// Print an aligned, dimmed path line below a header
pub fn print_path(label: &str, path: &Path) {
    println!("   {:<8}{}", format!("{}:", label), style(path.display()).dim());
}

/// Print the command line that is (or would be) executed
pub fn print_command(command: &str) {
    println!("   {} {}", style("$").dim(), style(command).yellow());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}
