//! Formatting of human-readable messages and reports on the terminal.
//!
//! Colors are only emitted when the caller says the target supports them, so
//! redirected output and test captures stay plain.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use fsdelete_core::DeletionReport;

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "warning: {}", msg)
    }
}

/// Prints `error[<kind>]: <message>`.
pub fn print_error_message<W: Write>(writer: &mut W, kind: &str, msg: &str, supports_color: bool) -> io::Result<()> {
    let label = format!("error[{}]:", kind);
    if supports_color {
        writeln!(writer, "{} {}", label.red().bold(), msg)
    } else {
        writeln!(writer, "{} {}", label, msg)
    }
}

/// Prints the outcome of a run, one deleted entry per line.
pub fn print_report<W: Write>(writer: &mut W, report: &DeletionReport, supports_color: bool) -> io::Result<()> {
    for name in &report.deleted {
        if supports_color {
            writeln!(writer, "  {} {}", "deleted".red(), name)?;
        } else {
            writeln!(writer, "  deleted {}", name)?;
        }
    }
    print_success_message(
        writer,
        &format!("Scanned {} entries, deleted {}.", report.entries_scanned, report.entries_deleted),
        supports_color,
    )
}
