//! Card and view rendering for the console.
//!
//! One listing becomes one bordered card with a fixed line structure:
//! price, address, features, optional contact block, then type and listing
//! date. The whole card area is rebuilt on every render; there is no
//! incremental update path.

use std::sync::OnceLock;

use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::format;
use crate::types::{Controls, Property};

use super::stats::{ViewStats, average_display};

/// Card width when the terminal width cannot be detected
const DEFAULT_CARD_WIDTH: usize = 72;

/// Narrowest card that still fits the feature line
const MIN_CARD_WIDTH: usize = 40;

static CONSOLE_WIDTH_OVERRIDE: OnceLock<usize> = OnceLock::new();

/// Override console width detection (for testing)
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH_OVERRIDE.set(width);
}

fn card_width() -> usize {
    let console = CONSOLE_WIDTH_OVERRIDE
        .get()
        .copied()
        .or_else(|| terminal_size().map(|(Width(w), _)| w as usize))
        .unwrap_or(DEFAULT_CARD_WIDTH);
    console.clamp(MIN_CARD_WIDTH, DEFAULT_CARD_WIDTH)
}

/// Unicode-aware display width
fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit text into exactly `width` columns: pad short text with spaces,
/// truncate long text with a trailing "..."
fn truncate_with_padding(text: &str, width: usize) -> String {
    let text_width = display_width(text);
    if text_width <= width {
        let mut out = String::from(text);
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }

    let budget = width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw > budget {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push_str("...");

    // A wide character may have stopped short of the budget
    let w = display_width(&out);
    if w < width {
        out.push_str(&" ".repeat(width - w));
    }
    out
}

/// Render one listing as a bordered card
pub fn format_card(property: &Property) -> String {
    let width = card_width();
    let inner = width - 4;

    let mut lines = Vec::new();
    lines.push(format::format_price(property.price));
    lines.push(format::format_address(property));
    lines.push(format!(
        "{} beds | {} baths | {} sqft",
        format::format_count(property.bedrooms),
        format::format_count(property.bathrooms),
        format::format_sqft(property.square_footage),
    ));
    lines.extend(contact_lines(property));
    lines.push(format!(
        "{} | Listed: {}",
        property.property_type,
        format::format_date(property.listed_date.as_deref()),
    ));

    let mut out = String::new();
    out.push_str(&format!("┌{:─<w$}┐\n", "", w = width - 2));
    for line in &lines {
        out.push_str(&format!("│ {} │\n", truncate_with_padding(line, inner)));
    }
    out.push_str(&format!("└{:─<w$}┘\n", "", w = width - 2));
    out
}

/// Agent/office contact lines. Empty when the listing carries no agent
/// name, agent email, or office name; a phone number is only shown next
/// to the agent's name.
fn contact_lines(property: &Property) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(agent) = &property.agent {
        if let Some(name) = non_empty(&agent.name) {
            match non_empty(&agent.phone) {
                Some(phone) => lines.push(format!("{} {}", name, format::format_phone(phone))),
                None => lines.push(name.to_string()),
            }
        }
        if let Some(email) = non_empty(&agent.email) {
            lines.push(email.to_string());
        }
    }

    if let Some(office) = &property.office {
        if let Some(name) = non_empty(&office.name) {
            lines.push(name.to_string());
        }
    }

    lines
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Header shown above the card area: stats, active controls, and the
/// feed's last-updated date when present
pub fn format_view_header(stats: &ViewStats, controls: &Controls, last_updated: Option<&str>) -> String {
    let mut header = format!("{} listings | avg price {}", stats.count, average_display(stats));
    if let Some(raw) = last_updated {
        header.push_str(&format!(" | updated {}", format::format_date(Some(raw))));
    }
    header.push('\n');
    header.push_str(&format!("view: {}\n", controls.describe()));
    header
}

/// Notice for a view with zero listings. Deliberately distinct from the
/// load-failure message: an empty view is an expected outcome.
pub fn format_no_results() -> String {
    "No properties match your filters.\nTry adjusting your search criteria.\n".to_string()
}

/// Render the complete view: header, then cards or the no-results notice
pub fn render_view(
    view: &[&Property],
    stats: &ViewStats,
    controls: &Controls,
    last_updated: Option<&str>,
) -> String {
    let mut out = format_view_header(stats, controls, last_updated);
    out.push('\n');

    if view.is_empty() {
        out.push_str(&format_no_results());
        return out;
    }

    for property in view {
        out.push_str(&format_card(property));
    }
    out
}

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;
