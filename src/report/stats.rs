//! Summary statistics over the filtered view.
//!
//! Count and average price are re-derived from scratch on every render;
//! nothing here caches or patches a previous result.

use crate::format::{VALUE_UNAVAILABLE, format_price};
use crate::types::Property;

/// Derived summary numbers for the current view
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ViewStats {
    pub count: usize,
    /// None when the view is empty; the average is undefined, not zero
    pub average_price: Option<f64>,
}

/// Calculate summary statistics for the filtered view.
/// Listings without a price contribute 0 to the sum, matching the
/// feed's own convention of treating an unpriced listing as $0.
pub fn summarize(view: &[&Property]) -> ViewStats {
    if view.is_empty() {
        return ViewStats { count: 0, average_price: None };
    }

    let total: f64 = view.iter().map(|p| p.price.unwrap_or(0.0)).sum();
    ViewStats {
        count: view.len(),
        average_price: Some(total / view.len() as f64),
    }
}

/// Display string for the average: currency, or `--` for an empty view
pub fn average_display(stats: &ViewStats) -> String {
    match stats.average_price {
        Some(avg) => format_price(Some(avg)),
        None => VALUE_UNAVAILABLE.to_string(),
    }
}
