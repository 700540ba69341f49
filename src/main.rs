mod cli;
mod fetch;
mod format;
mod pipeline;
mod report;
mod session;
mod types;
mod ui;

use std::io;

use session::Session;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        report::set_console_width(width);
    }

    // Load the catalog once. A failure here is terminal: fixed message
    // naming the expected source, no retry, no partial data.
    let feed = match fetch::load_feed(&args.data) {
        Ok(feed) => feed,
        Err(e) => {
            log::error!("feed load failed: {}", e);
            ui::print_error(&format!(
                "Unable to load properties. Make sure the data file exists at {}",
                args.data
            ));
            std::process::exit(1);
        }
    };

    let mut session = Session::new(feed, args.controls());

    // JSON mode replaces the card view entirely
    if args.json {
        if let Err(e) = session.export_json(io::stdout().lock()) {
            ui::print_error(&format!("Failed to write JSON view: {}", e));
            std::process::exit(1);
        }
        return;
    }

    // Initial render for the controls given on the command line
    print!("{}", session.render());

    if let Some(path) = &args.output_json {
        match session.export_json_file(path) {
            Ok(_) => ui::status(&format!("JSON view saved to: {}", path.display())),
            Err(e) => eprintln!("Warning: Failed to save JSON view: {}", e),
        }
    }

    // Interactive mode: keep re-rendering as control changes arrive
    if args.interactive {
        if let Err(e) = session.run(io::stdin().lock()) {
            ui::print_error(&format!("Input error: {}", e));
            std::process::exit(1);
        }
    }
}
