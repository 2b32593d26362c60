use owo_colors::{OwoColorize, Stream};

use scriptck::errors::{Diagnostic, Level};

fn format_level(level: Level) -> String {
    match level {
        Level::Fatal => format!(
            "{}",
            "FATAL".if_supports_color(Stream::Stderr, |text| text.red())
        ),

        Level::Error => format!(
            "{}",
            "ERROR".if_supports_color(Stream::Stderr, |text| text.bright_red())
        ),

        Level::Warn => format!(
            "{}",
            "WARN ".if_supports_color(Stream::Stderr, |text| text.yellow())
        ),

        Level::Info => format!(
            "{}",
            "INFO ".if_supports_color(Stream::Stderr, |text| text.bright_cyan())
        ),
    }
}

pub fn print_diagnostic(diagnostic: &Diagnostic) {
    let level = format_level(diagnostic.level);

    match &diagnostic.source {
        // typing errors already mention the line
        Some(source) if source.to_string() == diagnostic.message.message => {
            eprintln!("{} {}", level, diagnostic.message)
        }

        Some(source) => eprintln!("{} {}: {}", level, diagnostic.message, source),
        None => eprintln!("{} {}", level, diagnostic.message),
    }
}
