//! Canned commentary for each domain.

use super::Domain;

/// Fixed commentary blocks that populate a trace for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSet {
    pub contradiction_findings: &'static [&'static str],
    pub bias_notes: &'static [&'static str],
    pub dignity_notes: &'static [&'static str],
    pub harm_risks: &'static [&'static str],
    pub opposite_position: &'static str,
    pub strongest_argument: &'static str,
    pub minimize_harm: &'static str,
    pub preserve_dignity: &'static str,
    pub tradeoffs: &'static [&'static str],
}

impl ContentSet {
    pub fn for_domain(domain: Domain) -> &'static ContentSet {
        match domain {
            Domain::Devops => &DEVOPS,
            Domain::General => &GENERAL,
        }
    }
}

static DEVOPS: ContentSet = ContentSet {
    contradiction_findings: &[
        "If cancellations are common, using a cancelled check as a merge gate contradicts the goal of avoiding blocks on non-failures.",
        "A cancelled Pages run is weak evidence: treat the latest successful deploy (or environment URL) as the source of truth, especially during outages.",
    ],
    bias_notes: &[
        "Automation bias: assuming the CI system is 'right' can downplay contributor confusion; treat clarity as a first-class requirement.",
        "Availability bias: a recent success can hide intermittent failures; ensure cancellations do not mask real build regressions.",
    ],
    dignity_notes: &[
        "Assume contributors act in good faith; wording should explain cancellations as expected concurrency behavior, not blame.",
        "Provide concrete next steps (where to find the latest successful run/deploy URL) instead of vague 'check Actions' instructions.",
    ],
    harm_risks: &[
        "A cancelled run may be misread as a failure, wasting maintainer time and reducing contributor trust.",
        "Cancellations can hide flaky failures unless the 'latest successful deploy' signal is obvious and easy to locate.",
        "Disabling cancellation may increase queue time and CI spend without meaningful reliability gains.",
    ],
    opposite_position: "Treat any cancellation as a deployment integrity risk; disable cancellation and require every Pages build to complete.",
    strongest_argument: "Cancellations can reduce observability and mask flaky failures; forcing completion improves auditability and simplifies debugging.",
    minimize_harm: concat!(
        "Keep cancellation behavior, but prevent it from blocking merges: do not require a cancelled check as a gate. ",
        "Add a short README/CONTRIBUTING note: cancellations can occur when a newer Pages request is queued. ",
        "Point to the latest successful run/deploy URL as the source of truth."
    ),
    preserve_dignity: "Normalize the cancelled outcome in documentation and status messaging; focus on guidance and remediation, not fault.",
    tradeoffs: &[
        "Clarity vs. minimalism in docs",
        "Observability vs. CI cost/latency",
        "Strict gating vs. developer velocity",
    ],
};

static GENERAL: ContentSet = ContentSet {
    contradiction_findings: &[
        "Possible contradiction: goals, constraints, and values may be interleaved; separate them explicitly before selecting actions.",
    ],
    bias_notes: &[
        "Bias check: restate the prompt in neutral terms; watch for framing that privileges a default viewpoint.",
    ],
    dignity_notes: &[
        "Dignity check: describe stakeholders with agency and respect; avoid coercive framing.",
    ],
    harm_risks: &[
        "Harm projection: list plausible downstream harms (direct and indirect) if the chosen action is taken.",
    ],
    opposite_position: "Avoid synthesis and keep competing positions separate until constraints are clarified.",
    strongest_argument: "Premature synthesis can hide tradeoffs and increase the risk of avoidable harm.",
    minimize_harm: "Minimize harm by validating constraints early, documenting uncertainties, and choosing the least irreversible steps.",
    preserve_dignity: "Preserve dignity by using respectful language and incorporating affected parties' perspectives.",
    tradeoffs: &["Speed vs. thoroughness", "Strict validation vs. flexibility"],
};
