//! Source-snippet rendering for diagnostics.
//!
//! Renders a [`Diagnostic`] against the expression text it was produced
//! from, with the offending characters underlined:
//!
//! ```text
//! [E1003] Error: unclosed delimiter `(`
//!    ╭─[<unknown>:1:1]
//!    │
//!  1 │ (Grubsong
//!    │ ┬        │
//!    │ ╰──────────── unclosed delimiter opened here
//!    │          │
//!    │          ╰── expected `)`
//! ───╯
//! ```
//!
//! Spans are character offsets, which is also how the renderer indexes
//! the source. Output is uncolored so it can be logged or compared.

use std::ops::Range;

use ariadne::{Config, Label as SnippetLabel, Report, ReportBuilder, ReportKind, Source};
use rc_ir::Span;

use crate::{Diagnostic, Severity};

/// Render `diagnostic` with a snippet of `source`.
///
/// Spans past the end of `source` are clamped to it, so a diagnostic
/// pointing at end of input still renders.
pub fn render(diagnostic: &Diagnostic, source: &str) -> String {
    let char_len = source.chars().count();
    let offset = diagnostic
        .primary_span()
        .map_or(0, |span| clamp(span, char_len).start);

    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note => ReportKind::Advice,
    };

    let mut builder: ReportBuilder<'_, Range<usize>> = Report::build(kind, (), offset)
        .with_config(Config::default().with_color(false))
        .with_code(diagnostic.code)
        .with_message(&diagnostic.message);

    for label in &diagnostic.labels {
        builder = builder.with_label(
            SnippetLabel::new(clamp(label.span, char_len)).with_message(&label.message),
        );
    }
    if !diagnostic.notes.is_empty() {
        builder = builder.with_note(diagnostic.notes.join("\n"));
    }
    if !diagnostic.suggestions.is_empty() {
        builder = builder.with_help(diagnostic.suggestions.join("\n"));
    }

    let mut out = Vec::new();
    match builder.finish().write(Source::from(source), &mut out) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        // Writing into a Vec cannot fail; keep the plain form as a fallback.
        Err(_) => diagnostic.to_string(),
    }
}

fn clamp(span: Span, char_len: usize) -> Range<usize> {
    let range = span.to_range();
    let start = range.start.min(char_len);
    start..range.end.clamp(start, char_len)
}
