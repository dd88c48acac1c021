use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use quizboard_core::{ParsingResult, Severity};

pub(crate) mod check;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod remove;

/// Print a parse report with one line per message, colored by severity.
pub(crate) fn print_report(result: &ParsingResult) {
    for (severity, message) in result.messages() {
        match severity {
            Severity::Error => println!(
                "  {} {message}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red())
            ),
            Severity::Warning => println!(
                "  {} {message}",
                "!".if_supports_color(Stdout, |t| t.yellow())
            ),
            Severity::Info => println!(
                "  {}",
                message.to_string().if_supports_color(Stdout, |t| t.dimmed())
            ),
        }
    }
}
