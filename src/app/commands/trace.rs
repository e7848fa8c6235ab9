use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::domain::{AppError, Trace, TraceInput, classify};

/// Read and parse the input document at `path`.
///
/// The file is fully read and closed before parsing starts.
pub fn load_input(path: &Path) -> Result<Value, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|source| AppError::ReadInput { path: path.to_path_buf(), source })?;
    serde_json::from_str(&content)
        .map_err(|source| AppError::ParseInput { path: path.to_path_buf(), source })
}

/// Normalize, classify, and assemble a trace from a parsed document.
pub fn generate(value: &Value) -> Result<Trace, AppError> {
    let input = TraceInput::from_value(value)?;
    let domain = classify(&input);
    debug!(
        %domain,
        claims = input.claims.len(),
        assumptions = input.assumptions.len(),
        open_questions = input.open_questions.len(),
        "classified input"
    );
    Ok(Trace::from_input(input, domain))
}

/// Execute the trace command against an input file.
pub fn execute(path: &Path) -> Result<Trace, AppError> {
    debug!(path = %path.display(), "loading input");
    let value = load_input(path)?;
    generate(&value)
}

/// Render `trace` and write it to `out` in one piece.
pub fn write_trace<W: Write>(trace: &Trace, out: &mut W) -> Result<(), AppError> {
    let rendered = trace.to_pretty_json()?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;
    use tempfile::TempDir;

    #[test]
    fn load_input_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_input(&path).unwrap_err();
        assert!(matches!(err, AppError::ReadInput { .. }));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn load_input_reports_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"prompt\": ").unwrap();
        assert!(matches!(load_input(&path), Err(AppError::ParseInput { .. })));
    }

    #[test]
    fn generate_rejects_arrays() {
        let err = generate(&json!(["deploy"])).unwrap_err();
        assert!(matches!(err, AppError::InputNotObject));
    }

    #[test]
    fn execute_reads_and_builds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.json");
        fs::write(&path, r#"{"prompt": "merge queue", "claims": [null, "fast"]}"#).unwrap();

        let trace = execute(&path).unwrap();
        assert_eq!(trace.claims, vec!["fast"]);
        assert_eq!(trace.harm_projection.risks.len(), 3);
    }

    #[test]
    fn write_trace_emits_full_document() {
        let trace = generate(&json!({"prompt": "hello"})).unwrap();
        let mut buffer = Vec::new();
        write_trace(&trace, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
        let parsed: Trace = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, trace);
    }
}
