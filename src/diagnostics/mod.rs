//! Error reporting for the CLI.
//!
//! Every diagnostic always gets the plain, spec-mandated line on stderr
//! (`[line L] Error: ...` for lex/parse errors, `<message>\n[line L]` for
//! runtime errors) so scripted and piped consumers get a stable format
//! regardless of terminal support. When `LOXO_RICH_ERRORS` is set, an
//! additional [`ariadne`]-rendered snippet is printed alongside it for a
//! human at a terminal.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::interpreter::RuntimeError;
use crate::lexer::LexError;
use crate::parser::ParseError;

fn rich_errors_enabled() -> bool {
    std::env::var_os("LOXO_RICH_ERRORS").is_some()
}

fn print_range_report(filename: &str, source: &str, span_range: Range<usize>, message: &str) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn maybe_print_rich(filename: &str, source: &str, span_range: Range<usize>, message: &str) {
    if !rich_errors_enabled() {
        return;
    }
    if let Err(report_err) = print_range_report(filename, source, span_range, message) {
        eprintln!("(failed to display detailed error report: {})", report_err);
    }
}

/// Reports a lexical error: always the plain `[line L] Error: ...` form,
/// plus an optional rich rendering.
pub fn report_lex_error(filename: &str, source: &str, error: &LexError) {
    eprintln!("{}", error);
    maybe_print_rich(filename, source, error.span.start..error.span.end, &error.message);
}

/// Reports a parse error: always the plain `[line L] Error: ...` form,
/// plus an optional rich rendering.
pub fn report_parse_error(filename: &str, source: &str, error: &ParseError) {
    eprintln!("{}", error);
    maybe_print_rich(filename, source, error.span.start..error.span.end, &error.message);
}

/// Reports a runtime error: always the plain `<message>\n[line L]` form,
/// plus an optional rich rendering.
pub fn report_runtime_error(filename: &str, source: &str, error: &RuntimeError, line_byte_range: Option<Range<usize>>) {
    eprintln!("{}", error);
    if let Some(range) = line_byte_range {
        maybe_print_rich(filename, source, range, &error.message);
    }
}
