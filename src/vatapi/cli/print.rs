use super::render::{Line, Span, Tone};
use colored::{ColoredString, Colorize};
use vatapi::api::CmdMessage;
use vatapi::error::VatApiError;

const SUCCESS_MARK: &str = "✓";
const FAILURE_MARK: &str = "✗";

fn paint(span: &Span) -> ColoredString {
    let text = span.text.as_str();
    match span.tone {
        Tone::Plain => text.normal(),
        Tone::Heading => text.cyan().bold(),
        Tone::Title => text.bold(),
        Tone::Accent => text.cyan(),
        Tone::Good => text.green(),
        Tone::Bad => text.red(),
        Tone::Warn => text.yellow(),
        Tone::Muted => text.dimmed(),
    }
}

pub(super) fn print_lines(lines: &[Line]) {
    for line in lines {
        let rendered: String = line.iter().map(|span| paint(span).to_string()).collect();
        println!("{}", rendered);
    }
}

pub(super) fn print_success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message);
}

pub(super) fn print_error(message: &str) {
    eprintln!("{} {}", FAILURE_MARK.red(), message);
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_success(&message.content);
    }
}

/// Prints a failed command's error: one failure line, plus setup instructions
/// when no API key is stored.
pub fn report_error(err: &VatApiError) {
    print_error(&err.to_string());
    if matches!(err, VatApiError::NotConfigured) {
        println!("\nRun the following to configure:");
        println!("{}", "  vatapi config set --api-key <key>".cyan());
    }
}
