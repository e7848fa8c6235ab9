//! Trace document model and assembly.

use serde::{Deserialize, Serialize};

use super::{AppError, ContentSet, Domain, TraceInput};

/// Fixed-shape reasoning trace. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub claims: Vec<String>,
    pub assumptions: Vec<String>,
    pub contradiction_scan: ContradictionScan,
    pub bias_check: BiasCheck,
    pub dignity_check: DignityCheck,
    pub harm_projection: HarmProjection,
    pub counterfactual: Counterfactual,
    pub synthesis: Synthesis,
    pub open_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContradictionScan {
    pub findings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasCheck {
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DignityCheck {
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmProjection {
    pub risks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterfactual {
    pub opposite_position: String,
    pub strongest_argument: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synthesis {
    pub minimize_harm: String,
    pub preserve_dignity: String,
    pub tradeoffs: Vec<String>,
}

impl Trace {
    /// Combine pass-through lists with the content set for `domain`.
    pub fn assemble(
        claims: Vec<String>,
        assumptions: Vec<String>,
        open_questions: Vec<String>,
        domain: Domain,
    ) -> Self {
        let content = ContentSet::for_domain(domain);
        Self {
            claims,
            assumptions,
            contradiction_scan: ContradictionScan {
                findings: owned(content.contradiction_findings),
            },
            bias_check: BiasCheck { notes: owned(content.bias_notes) },
            dignity_check: DignityCheck { notes: owned(content.dignity_notes) },
            harm_projection: HarmProjection { risks: owned(content.harm_risks) },
            counterfactual: Counterfactual {
                opposite_position: content.opposite_position.to_string(),
                strongest_argument: content.strongest_argument.to_string(),
            },
            synthesis: Synthesis {
                minimize_harm: content.minimize_harm.to_string(),
                preserve_dignity: content.preserve_dignity.to_string(),
                tradeoffs: owned(content.tradeoffs),
            },
            open_questions,
        }
    }

    /// Assemble from a normalized input, consuming its lists.
    pub fn from_input(input: TraceInput, domain: Domain) -> Self {
        Self::assemble(input.claims, input.assumptions, input.open_questions, domain)
    }

    /// Pretty JSON with 2-space indentation and a trailing newline.
    ///
    /// Non-ASCII characters are written as-is.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        let mut rendered = serde_json::to_string_pretty(self).map_err(AppError::Render)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
