//! Price formatting helpers.
//!
//! The store API reports prices as decimal amounts; display always uses
//! exactly two decimal places regardless of what the wire carried.

/// Format a price amount with two decimal places (e.g. "15.50").
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format a price as US dollars (e.g. "$15.50").
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}
