//! Per-step outcomes of a chain evaluation.

use serde::Serialize;

/// Status of a single step in an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pass,
    Fail,
    Skip,
}

impl StepStatus {
    /// Fixed-width label used in text reports.
    pub fn label(self) -> &'static str {
        match self {
            StepStatus::Pass => "PASS",
            StepStatus::Fail => "FAIL",
            StepStatus::Skip => "SKIP",
        }
    }
}

/// What one step decided about the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub name: String,
    pub status: StepStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StepOutcome {
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Pass,
            message: None,
        }
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Fail,
            message: Some(message.into()),
        }
    }

    pub fn skip(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Skip,
            message: Some(message.into()),
        }
    }
}

/// Result of running a candidate through a whole chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    /// Whether every step accepted.
    pub accepted: bool,
    /// One outcome per step, in chain order.
    pub steps: Vec<StepOutcome>,
}

impl ChainReport {
    pub(super) fn new(steps: Vec<StepOutcome>) -> Self {
        let accepted = steps.iter().all(|s| s.status == StepStatus::Pass);
        Self { accepted, steps }
    }

    pub fn is_success(&self) -> bool {
        self.accepted
    }

    /// The step that rejected the candidate, if any.
    pub fn first_failure(&self) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| s.status == StepStatus::Fail)
    }

    /// One-line description of why the candidate was rejected.
    ///
    /// Empty when the candidate was accepted.
    pub fn rejection_summary(&self) -> String {
        match self.first_failure() {
            Some(outcome) => match &outcome.message {
                Some(message) => format!("failed at {} ({})", outcome.name, message),
                None => format!("failed at {}", outcome.name),
            },
            None => String::new(),
        }
    }

    /// Format the report as one line per step.
    ///
    /// ```text
    /// PASS  not_empty
    /// FAIL  length_in_range: requires length in [10, 12)
    /// SKIP  contains_character: not evaluated (an earlier step rejected)
    /// ```
    pub fn format_text(&self) -> String {
        let mut out = String::new();

        for outcome in &self.steps {
            out.push_str(outcome.status.label());
            out.push_str("  ");
            out.push_str(&outcome.name);
            if let Some(message) = &outcome.message {
                out.push_str(": ");
                out.push_str(message);
            }
            out.push('\n');
        }

        out.push_str(if self.accepted { "accepted\n" } else { "rejected\n" });
        out
    }
}
