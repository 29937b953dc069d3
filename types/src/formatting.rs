//! Centralized number formatting utilities.
//!
//! All numeric display formatting goes through this module to ensure
//! consistency between panel-style output and logs, and to support
//! European-style number formatting (swapping `.` and `,`).

/// Apply European number format by swapping `.` and `,` in a formatted string.
fn europeanize(s: &str) -> String {
    // Our formatted strings are purely numeric (with optional K/M suffix),
    // so a global swap is safe.
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '.' => result.push(','),
            ',' => result.push('.'),
            _ => result.push(c),
        }
    }
    result
}

/// Apply European formatting conditionally.
#[inline]
fn maybe_eu(s: String, european: bool) -> String {
    if european { europeanize(&s) } else { s }
}

/// Group a digit string into thousands: `"12345"` -> `"12,345"`.
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format an integer with thousands separators.
///
/// # Examples
/// ```
/// use quiver_types::formatting::format_grouped;
/// assert_eq!(format_grouped(0, false), "0");
/// assert_eq!(format_grouped(500, false), "500");
/// assert_eq!(format_grouped(12_345, false), "12,345");
/// assert_eq!(format_grouped(-1_200, false), "-1,200");
/// assert_eq!(format_grouped(12_345, true), "12.345");
/// ```
pub fn format_grouped(n: i64, european: bool) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    let s = if n < 0 { format!("-{grouped}") } else { grouped };
    maybe_eu(s, european)
}

/// Format an average with thousands separators and two decimals.
///
/// Used for the experience-per-ammo readout.
///
/// # Examples
/// ```
/// use quiver_types::formatting::format_average;
/// assert_eq!(format_average(0.0, false), "0.00");
/// assert_eq!(format_average(10.0, false), "10.00");
/// assert_eq!(format_average(1234.5, false), "1,234.50");
/// assert_eq!(format_average(1234.5, true), "1.234,50");
/// ```
pub fn format_average(n: f64, european: bool) -> String {
    let formatted = format!("{:.2}", n.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let grouped = group_digits(int_part);
    let s = if n < 0.0 && formatted != "0.00" {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    };
    maybe_eu(s, european)
}

/// Format a large number with K/M suffix for compact display.
///
/// - Values >= 1,000,000 are formatted as `X.XXM`
/// - Values >= 1,000 are formatted as `X.XXK`
/// - Values below 1,000 are formatted as-is
///
/// # Examples
/// ```
/// use quiver_types::formatting::format_compact;
/// assert_eq!(format_compact(500, false), "500");
/// assert_eq!(format_compact(1_500, false), "1.50K");
/// assert_eq!(format_compact(1_500_000, false), "1.50M");
/// assert_eq!(format_compact(1_500, true), "1,50K");
/// ```
pub fn format_compact(n: i64, european: bool) -> String {
    let s = if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        format!("{n}")
    };
    maybe_eu(s, european)
}
