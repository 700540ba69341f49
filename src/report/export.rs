//! JSON export of the derived view.
//!
//! Writes the same ViewState the console renders - controls, stats, and
//! the filtered listings - as pretty-printed JSON for storage or piping
//! into other tools.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::types::{Controls, Property};

use super::stats::ViewStats;

/// Write the derived view as JSON to any writer
pub fn write_json_report<W: Write>(
    writer: W,
    view: &[&Property],
    stats: &ViewStats,
    controls: &Controls,
    last_updated: Option<&str>,
) -> std::io::Result<()> {
    use serde_json::json;

    let report = json!({
        "lastUpdated": last_updated,
        "controls": {
            "maxPrice": controls.max_price,
            "minBeds": controls.min_beds,
            "sort": controls.sort.as_str(),
        },
        "stats": stats,
        "properties": view,
    });

    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

/// Export the derived view as JSON to a file
pub fn export_json_report(
    output_path: &Path,
    view: &[&Property],
    stats: &ViewStats,
    controls: &Controls,
    last_updated: Option<&str>,
) -> std::io::Result<()> {
    let file = File::create(output_path)?;
    write_json_report(file, view, stats, controls, last_updated)
}
