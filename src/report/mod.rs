//! View rendering module - everything printed for a derived view.
//!
//! This module handles:
//! - Rendering one listing as a bordered card
//! - Summary statistics (count, average price)
//! - The view header and the "no matches" notice
//! - Export of the derived view as JSON
//!
//! # Module Organization
//!
//! - `card` - Card and view rendering for the console
//! - `stats` - Summary statistics over the filtered view
//! - `export` - JSON export of the derived view

mod card;
mod export;
mod stats;

pub use card::{format_card, format_no_results, format_view_header, render_view, set_console_width};
pub use export::{export_json_report, write_json_report};
pub use stats::{ViewStats, average_display, summarize};
