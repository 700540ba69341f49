/// Interactive control session
///
/// The console analog of a page with filter controls: named control-change
/// events arrive on stdin, and every accepted change re-runs the full
/// pipeline -> stats -> render cycle against the immutable catalog. There
/// is exactly one action (recompute and render); events only change which
/// control values feed it.

use std::io::{self, BufRead};

use log::debug;

use crate::pipeline;
use crate::report;
use crate::types::{Controls, Feed, SortKey};
use crate::ui;

/// A named control-change event
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    MaxPrice(Option<u64>),
    MinBeds(Option<u32>),
    Sort(SortKey),
    Reset,
    Help,
    Quit,
}

impl ControlEvent {
    /// Parse one input line into an event. Rejected input never reaches
    /// the controls.
    pub fn parse(line: &str) -> Result<ControlEvent, String> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let arg = words.next();

        match command {
            "max-price" => match arg {
                None | Some("off") => Ok(ControlEvent::MaxPrice(None)),
                Some(raw) => match raw.parse::<u64>() {
                    Ok(0) => Err("max-price must be a positive dollar amount".to_string()),
                    Ok(n) => Ok(ControlEvent::MaxPrice(Some(n))),
                    Err(_) => Err(format!("not a dollar amount: {}", raw)),
                },
            },
            "min-beds" => match arg {
                None | Some("off") => Ok(ControlEvent::MinBeds(None)),
                Some(raw) => raw
                    .parse::<u32>()
                    .map(|n| ControlEvent::MinBeds(Some(n)))
                    .map_err(|_| format!("not a bedroom count: {}", raw)),
            },
            // Unrecognized sort keys fall back to date-desc, same as the
            // one-shot --sort flag
            "sort" => Ok(ControlEvent::Sort(SortKey::parse(arg.unwrap_or("")))),
            "reset" => Ok(ControlEvent::Reset),
            "help" | "?" => Ok(ControlEvent::Help),
            "quit" | "exit" | "q" => Ok(ControlEvent::Quit),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

/// One loaded catalog plus the current control values.
/// The catalog is never mutated; every render re-derives the view.
pub struct Session {
    feed: Feed,
    controls: Controls,
}

impl Session {
    pub fn new(feed: Feed, controls: Controls) -> Self {
        Session { feed, controls }
    }

    /// Apply one event to the controls. Returns true when the view
    /// needs re-rendering.
    pub fn handle(&mut self, event: ControlEvent) -> bool {
        debug!("control event: {:?}", event);
        match event {
            ControlEvent::MaxPrice(value) => {
                self.controls.max_price = value;
                true
            }
            ControlEvent::MinBeds(value) => {
                self.controls.min_beds = value;
                true
            }
            ControlEvent::Sort(key) => {
                self.controls.sort = key;
                true
            }
            ControlEvent::Reset => {
                self.controls = Controls::default();
                true
            }
            ControlEvent::Help | ControlEvent::Quit => false,
        }
    }

    /// Derive and render the current view from scratch
    pub fn render(&self) -> String {
        let view = pipeline::apply(&self.feed.properties, &self.controls);
        let stats = report::summarize(&view);
        report::render_view(&view, &stats, &self.controls, self.feed.last_updated.as_deref())
    }

    /// Write the current view as JSON
    pub fn export_json<W: io::Write>(&self, writer: W) -> io::Result<()> {
        let view = pipeline::apply(&self.feed.properties, &self.controls);
        let stats = report::summarize(&view);
        report::write_json_report(writer, &view, &stats, &self.controls, self.feed.last_updated.as_deref())
    }

    /// Save the current view as JSON to a file
    pub fn export_json_file(&self, path: &std::path::Path) -> io::Result<()> {
        let view = pipeline::apply(&self.feed.properties, &self.controls);
        let stats = report::summarize(&view);
        report::export_json_report(path, &view, &stats, &self.controls, self.feed.last_updated.as_deref())
    }

    /// Read control events until quit or EOF, re-rendering the full view
    /// after every accepted control change. Recomputation is synchronous;
    /// the next event is not read until the render completes.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        print_help();
        ui::prompt();

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                ui::prompt();
                continue;
            }

            match ControlEvent::parse(trimmed) {
                Ok(ControlEvent::Quit) => break,
                Ok(ControlEvent::Help) => print_help(),
                Ok(event) => {
                    if self.handle(event) {
                        print!("{}", self.render());
                    }
                }
                Err(msg) => ui::status(&msg),
            }

            ui::prompt();
        }

        Ok(())
    }
}

fn print_help() {
    println!("commands:");
    println!("  max-price <dollars|off>   cap the listing price");
    println!("  min-beds <count|off>      require at least this many bedrooms");
    println!("  sort <key>                price-asc, price-desc, date-asc, date-desc");
    println!("  reset                     clear all filters and sorting");
    println!("  help                      show this list");
    println!("  quit                      exit");
}
