//! Labeled parse-error reports for the `monkey run` command.
//!
//! Parse errors carry byte spans, which lets the CLI render them as
//! `ariadne` reports pointing into the offending source line. If report
//! rendering itself fails, a plain `line:column: message` fallback goes to
//! stderr so the error is never silently lost.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use monkey::parser::ParseError;

/// Renders every parse error as a labeled report on stderr.
pub(crate) fn report_parse_errors(filename: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        if let Err(report_err) = print_range_report(filename, source, error) {
            eprintln!("Error: {}", error);
            eprintln!("(Failed to display detailed error report: {})", report_err);
        }
    }
}

fn print_range_report(
    filename: &str,
    source: &str,
    error: &ParseError,
) -> std::io::Result<()> {
    let span_range = clamped_range(source, error.span.start, error.span.end);

    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message("syntax error")
        .with_label(
            Label::new((filename, span_range))
                .with_message(&error.message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Keeps a span inside the source and at least one byte wide, so that
/// errors at end of input (whose token span is empty) still get a visible
/// label.
fn clamped_range(source: &str, start: usize, end: usize) -> Range<usize> {
    if source.is_empty() {
        return 0..0;
    }
    let start = start.min(source.len().saturating_sub(1));
    let end = end.clamp(start + 1, source.len());
    start..end
}
