//! Terminal helpers used by generated dispatcher bodies.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream};

/// Hide the terminal cursor while a handler runs.
pub fn hide_cursor() {
    print!("\x1b[?25l");
    let _ = io::stdout().flush();
}

/// Restore the terminal cursor.
pub fn show_cursor() {
    print!("\x1b[?25h");
    let _ = io::stdout().flush();
}

/// Translate a handler error into the user-facing failure message.
/// The prefix is colored only when stderr is a terminal.
pub fn fail_message(err: &dyn std::fmt::Display) -> String {
    format!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |text| {
            text.style(owo_colors::Style::new().red().bold())
        }),
        err
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_message_carries_the_error() {
        let message = fail_message(&"runtime not found");
        assert!(message.contains("error:"));
        assert!(message.contains("runtime not found"));
    }
}
