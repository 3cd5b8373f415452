//! Diagnostic rendering.
//!
//! Errors from any stage are rendered with `ariadne` as a labelled source
//! snippet. Spans are byte offsets; ariadne counts characters, so offsets
//! are converted before building the report.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use desrever_eval::Error;
use desrever_ir::Span;

/// Render `error` against `source` as a human-readable diagnostic.
pub fn render_error(path: &str, source: &str, error: &Error, color: bool) -> String {
    let message = error.to_string();
    let Some(span) = error.span() else {
        return format!("error: {message}\n  --> {path}\n");
    };

    let range = char_range(source, span);
    let report = Report::build(ReportKind::Error, path, range.start)
        .with_config(Config::default().with_color(color))
        .with_message(error.title())
        .with_label(
            Label::new((path, range))
                .with_message(&message)
                .with_color(Color::Red),
        )
        .finish();

    let mut buf = Vec::new();
    match report.write((path, Source::from(source.to_string())), &mut buf) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("error: {message}\n  --> {path}:{span}\n"),
    }
}

/// Convert a byte span into a character range, clamped to the source.
///
/// Empty spans (the end-of-file marker) are widened to one character so
/// the label has something to point at.
fn char_range(source: &str, span: Span) -> Range<usize> {
    let total = source.chars().count();
    let to_chars = |byte: u32| {
        let byte = (byte as usize).min(source.len());
        source
            .get(..byte)
            .map_or(total, |prefix| prefix.chars().count())
    };
    let (start, end) = (to_chars(span.start), to_chars(span.end));
    match (start == end, start < total) {
        (false, _) => start..end,
        (true, true) => start..start + 1,
        (true, false) => start.saturating_sub(1)..start,
    }
}
