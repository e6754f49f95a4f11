use std::io::{self, Write};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use migscript_common::Diagnostic;

/// Print a diagnostic to stderr, with a source excerpt when it has a span.
pub fn print_diagnostic(diag: &Diagnostic, source: &str, file_name: &str) -> io::Result<()> {
    write_diagnostic(diag, source, file_name, true, io::stderr())
}

/// Render a diagnostic into `out`.
pub fn write_diagnostic(
    diag: &Diagnostic,
    source: &str,
    file_name: &str,
    color: bool,
    mut out: impl Write,
) -> io::Result<()> {
    let kind = if diag.is_error() {
        ReportKind::Error
    } else {
        ReportKind::Warning
    };

    let Some(ref span) = diag.span else {
        writeln!(out, "{}", diag)?;
        if let Some(ref suggestion) = diag.suggestion {
            writeln!(out, "   = help: {}", suggestion)?;
        }
        return writeln!(out);
    };

    // ariadne counts chars, spans count bytes.
    let start = char_index(source, span.start.offset as usize);
    let end = char_index(source, span.end.offset as usize).max(start + 1);

    let label_color = if diag.is_error() {
        Color::Red
    } else {
        Color::Yellow
    };

    let mut report = Report::build(kind, file_name, start)
        .with_config(Config::default().with_color(color))
        .with_message(&diag.message)
        .with_label(
            Label::new((file_name, start..end))
                .with_message(&diag.message)
                .with_color(label_color),
        );

    if let Some(ref suggestion) = diag.suggestion {
        report = report.with_help(suggestion);
    }

    report
        .finish()
        .write((file_name, Source::from(source)), &mut out)
}

fn char_index(source: &str, byte_offset: usize) -> usize {
    let byte_offset = byte_offset.min(source.len());
    source
        .char_indices()
        .take_while(|(i, _)| *i < byte_offset)
        .count()
}
