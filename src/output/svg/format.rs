//! Text helpers for SVG and HTML output.

use crate::format::{format_number, plain_number};

/// Escape text for use in SVG/HTML content and attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Short axis label: `15.5K`, `2.5M`, `1.2B`. Magnitudes below 10,000 use grouping.
#[must_use]
pub fn compact_number(n: f64) -> String {
    let abs = n.abs();
    let (scaled, suffix) = if abs >= 1_000_000_000.0 {
        (n / 1_000_000_000.0, "B")
    } else if abs >= 1_000_000.0 {
        (n / 1_000_000.0, "M")
    } else if abs >= 10_000.0 {
        (n / 1_000.0, "K")
    } else {
        return format_number(n);
    };
    format!("{}{suffix}", plain_number((scaled * 10.0).round() / 10.0))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
