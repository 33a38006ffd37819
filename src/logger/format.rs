//! Log formatting and output with ANSI colors
//!
//! Handles:
//! - Colorized console output with tag and level formatting
//! - Broken pipe handling for piped output

use std::io::{stdout, ErrorKind, Write};

use chrono::Local;
use colored::*;

use super::tags::LogTag;

/// Log format widths for alignment
const TAG_WIDTH: usize = 8;
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, log_type: &str, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();

    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_log_type(log_type),
        message
    );

    print_stdout_safe(&line);
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.as_str(), width = TAG_WIDTH);
    match tag {
        LogTag::Engine => padded.cyan(),
        LogTag::Merge => padded.blue(),
        LogTag::Toggle => padded.magenta(),
        LogTag::Apply => padded.green(),
        LogTag::Search => padded.yellow(),
        LogTag::Stream => padded.bright_blue(),
    }
}

fn format_log_type(log_type: &str) -> ColoredString {
    let padded = format!("{:<width$}", log_type, width = LEVEL_WIDTH);
    match log_type {
        "ERROR" => padded.red().bold(),
        "WARNING" => padded.yellow(),
        "INFO" => padded.normal(),
        "DEBUG" => padded.dimmed(),
        _ => padded.dimmed(),
    }
}

/// Write to stdout, swallowing broken pipes so piped consumers can exit early
fn print_stdout_safe(line: &str) {
    let mut out = stdout();
    if let Err(err) = writeln!(out, "{}", line) {
        if err.kind() != ErrorKind::BrokenPipe {
            eprintln!("{}", line);
        }
    }
}
