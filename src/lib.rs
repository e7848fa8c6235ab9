//! tac0de-cascade: turn a structured prompt document into a reasoning trace scaffold.
//!
//! The input names a prompt plus optional claims, assumptions, and open
//! questions. The crate classifies the subject as `devops` or `general` by
//! marker substrings and fills a fixed-shape trace with the matching canned
//! commentary. No side effects beyond reading the input file.

pub mod app;
pub mod domain;

use std::path::Path;

use serde_json::Value;

pub use domain::{
    AppError, ContentSet, DEVOPS_MARKERS, Domain, Trace, TraceInput, classify, normalize_field,
};

/// Build a trace from an already-parsed input document.
///
/// Fails only when the top level is not a JSON object.
pub fn generate_trace(input: &Value) -> Result<Trace, AppError> {
    app::commands::trace::generate(input)
}

/// Read, parse, and trace the JSON document at `path`.
pub fn trace_file(path: &Path) -> Result<Trace, AppError> {
    app::commands::trace::execute(path)
}

/// Render a trace as 2-space indented JSON with a trailing newline.
pub fn render_trace(trace: &Trace) -> Result<String, AppError> {
    trace.to_pretty_json()
}
