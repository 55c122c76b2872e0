// cleantext/src/ui/output_format.rs
//! Colored status messages for stderr.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Truth that stderr is attached to a terminal.
pub fn stderr_supports_color() -> bool {
    io::stderr().is_terminal()
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(writer, "{}", message.green())
    } else {
        writeln!(writer, "{message}")
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), message)
    } else {
        writeln!(writer, "Warning: {message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut out = Vec::new();
        print_success_message(&mut out, "done", false).unwrap();
        print_warn_message(&mut out, "careful", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "done\nWarning: careful\n");
    }

    #[test]
    fn colored_output_wraps_message() {
        let mut out = Vec::new();
        print_success_message(&mut out, "done", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("done"));
        assert!(text.contains('\u{1b}'));
    }
}
