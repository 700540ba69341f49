/// Status and error output
///
/// Colored terminal text for the few messages that sit outside the card
/// area: load progress, the terminal load-failure message, and interactive
/// prompts. Rendering of the view itself lives in the report module.

use std::io::Write;

/// Print colored bold text to the terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stdout() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
        }

        true
    }
}

/// Print a status message with a "homescout: " prefix
pub fn status(s: &str) {
    print!("homescout: ");
    println!("{}", s);
}

/// Print an error message with a colored "error" prefix.
/// Used for the terminal load-failure path; there is no retry.
pub fn print_error(msg: &str) {
    println!();
    print_color("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
    println!();
}

/// Print the interactive-mode prompt without a trailing newline
pub fn prompt() {
    print_color("> ", term::color::BRIGHT_CYAN);
    let _ = std::io::stdout().flush();
}
