//! The frozen chain and its evaluation.

use super::report::{ChainReport, StepOutcome};
use super::step::ValidatorStep;
use std::fmt;
use tracing::{debug, trace};

/// An immutable, non-empty sequence of validator steps.
///
/// Built by [`ChainBuilder`](super::ChainBuilder). Each step's successor is
/// the next element; the last step has none.
#[derive(Debug)]
pub struct Chain {
    steps: Vec<Box<dyn ValidatorStep>>,
}

impl Chain {
    pub(super) fn from_steps(steps: Vec<Box<dyn ValidatorStep>>) -> Self {
        Self { steps }
    }

    /// Run `candidate` through the chain.
    ///
    /// Returns `true` only if every step accepts. Evaluation stops at the first
    /// step that rejects; its successors are never consulted.
    pub fn validate(&self, candidate: &str) -> bool {
        for step in &self.steps {
            if !step.accepts(candidate) {
                debug!(
                    step = step.name(),
                    requirement = %step.requirement(),
                    "step rejected candidate"
                );
                return false;
            }
            trace!(step = step.name(), "step accepted candidate");
        }
        true
    }

    /// Run `candidate` through the chain and record what each step decided.
    ///
    /// Makes the same decision as [`validate`](Chain::validate). Steps after the
    /// first rejection are reported as skipped and their predicates are not
    /// evaluated.
    pub fn evaluate(&self, candidate: &str) -> ChainReport {
        let mut outcomes = Vec::with_capacity(self.steps.len());
        let mut rejected = false;

        for step in &self.steps {
            if rejected {
                outcomes.push(StepOutcome::skip(
                    step.name(),
                    "not evaluated (an earlier step rejected)",
                ));
                continue;
            }

            if step.accepts(candidate) {
                trace!(step = step.name(), "step accepted candidate");
                outcomes.push(StepOutcome::pass(step.name()));
            } else {
                let requirement = step.requirement();
                debug!(step = step.name(), requirement = %requirement, "step rejected candidate");
                outcomes.push(StepOutcome::fail(
                    step.name(),
                    format!("requires {}", requirement),
                ));
                rejected = true;
            }
        }

        ChainReport::new(outcomes)
    }

    /// Number of steps in the chain.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a chain has at least its head step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in evaluation order, head first.
    pub fn steps(&self) -> impl Iterator<Item = &dyn ValidatorStep> {
        self.steps
            .iter()
            .map(|step| -> &dyn ValidatorStep { step.as_ref() })
    }

    /// Step names in evaluation order.
    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.name())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.step_names().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}
