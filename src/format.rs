/// Value formatting - pure display conversions
///
/// This module turns raw feed values into display strings:
/// - Currency and grouped-digit numbers
/// - Phone numbers
/// - Joined address lines
/// - Listing dates
///
/// Every function degrades to a placeholder on missing or malformed input;
/// nothing here returns an error.

use chrono::Datelike;

use crate::types::Property;

/// Placeholder shown when a listing has no usable price
pub const PRICE_UNAVAILABLE: &str = "Price N/A";

/// Placeholder for missing numeric features (beds, baths, sqft)
pub const VALUE_UNAVAILABLE: &str = "--";

/// Placeholder for a missing or unparseable date
pub const DATE_UNAVAILABLE: &str = "N/A";

/// Format a price as whole-dollar currency: `$500,000`.
/// Zero and absent prices both render as "Price N/A".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => format!("${}", group_thousands(p.round() as i64)),
        _ => PRICE_UNAVAILABLE.to_string(),
    }
}

/// Format a phone number as `(XXX) XXX-XXXX` when exactly 10 digits
/// remain after stripping punctuation; anything else is returned verbatim.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// Join the non-empty address components with commas
pub fn format_address(property: &Property) -> String {
    let parts: Vec<&str> = [
        &property.address_line1,
        &property.city,
        &property.state,
        &property.zip_code,
    ]
    .into_iter()
    .filter_map(|field| field.as_deref())
    .filter(|s| !s.is_empty())
    .collect();

    if parts.is_empty() {
        "Address not available".to_string()
    } else {
        parts.join(", ")
    }
}

/// Format square footage with digit grouping, or `--` when absent
pub fn format_sqft(sqft: Option<f64>) -> String {
    match sqft {
        Some(s) if s > 0.0 => group_thousands(s.round() as i64),
        _ => VALUE_UNAVAILABLE.to_string(),
    }
}

/// Format a bed/bath count, or `--` when absent or zero
pub fn format_count(count: Option<u32>) -> String {
    match count {
        Some(n) if n > 0 => n.to_string(),
        _ => VALUE_UNAVAILABLE.to_string(),
    }
}

/// Format an ISO date string as `M/D/YYYY`, or `N/A` when absent
/// or unparseable
pub fn format_date(raw: Option<&str>) -> String {
    match raw.and_then(crate::types::parse_listing_date) {
        Some(ts) => format!("{}/{}/{}", ts.month(), ts.day(), ts.year()),
        None => DATE_UNAVAILABLE.to_string(),
    }
}

/// Insert thousands separators: 1234567 -> "1,234,567"
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 { format!("-{}", out) } else { out }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
