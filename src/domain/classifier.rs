use std::fmt;

use super::TraceInput;

/// Lowercase substrings that mark an input as CI/deployment related.
///
/// Matching is plain containment, so short markers such as `ci` also hit
/// inside unrelated words ("ancient", "decision").
pub const DEVOPS_MARKERS: [&str; 13] = [
    "github",
    "pages",
    "workflow",
    "actions",
    "ci",
    "deploy",
    "deployment",
    "branch protection",
    "cancelled",
    "concurrency",
    "check run",
    "merge",
    "required checks",
];

/// Subject domain of an input document; selects the content set for the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// CI, deployment, and repository automation topics.
    Devops,
    /// Everything else.
    General,
}

impl Domain {
    /// All domains in declaration order.
    pub const ALL: [Domain; 2] = [Domain::Devops, Domain::General];

    /// Stable label for this domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Devops => "devops",
            Domain::General => "general",
        }
    }

    /// Classify already-concatenated text.
    pub fn classify_text(text: &str) -> Domain {
        let text = text.to_lowercase();
        if DEVOPS_MARKERS.iter().any(|marker| text.contains(marker)) {
            Domain::Devops
        } else {
            Domain::General
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an input by scanning prompt, claims, assumptions, and open questions.
pub fn classify(input: &TraceInput) -> Domain {
    Domain::classify_text(&classification_text(input))
}

/// Every field joined by single spaces, prompt first.
fn classification_text(input: &TraceInput) -> String {
    std::iter::once(input.prompt.as_str())
        .chain(input.claims.iter().map(String::as_str))
        .chain(input.assumptions.iter().map(String::as_str))
        .chain(input.open_questions.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
