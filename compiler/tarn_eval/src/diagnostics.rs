//! Rendering errors for the host.

use std::fmt::Write;

use crate::errors::EvalError;

/// Render an error as the host prints it:
///
/// ```text
/// error[fatal]: `list` takes 1 or 2 arguments, got 3
///  --> main.tn:4:9
///   = note: ...
/// ```
pub fn render(err: &EvalError, file: &str) -> String {
    let mut out = format!("error[{}]: {}", err.severity(), err.message);
    if let Some(span) = err.span.filter(|span| !span.is_dummy()) {
        let _ = write!(out, "\n --> {file}:{span}");
    }
    for note in &err.notes {
        let _ = write!(out, "\n  = note: {}", note.message);
    }
    out
}
