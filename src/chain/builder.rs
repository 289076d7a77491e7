//! Fluent assembly of validation chains.

use super::step::ValidatorStep;
use super::validation::Chain;

/// Assembles a [`Chain`] one step at a time.
///
/// Each [`append`](ChainBuilder::append) links the new step as the successor of
/// the current tail and moves the tail to it, so
/// `ChainBuilder::new(a).append(b).append(c)` yields `a -> b -> c`. Links are
/// set exactly once; [`build`](ChainBuilder::build) freezes the result.
#[derive(Debug)]
pub struct ChainBuilder {
    steps: Vec<Box<dyn ValidatorStep>>,
}

impl ChainBuilder {
    /// Start a chain with `head` as its first step.
    pub fn new(head: impl ValidatorStep + 'static) -> Self {
        Self::from_boxed(Box::new(head))
    }

    /// Start a chain from an already boxed head step.
    pub fn from_boxed(head: Box<dyn ValidatorStep>) -> Self {
        Self { steps: vec![head] }
    }

    /// Link `next` after the current tail and make it the new tail.
    #[must_use]
    pub fn append(self, next: impl ValidatorStep + 'static) -> Self {
        self.append_boxed(Box::new(next))
    }

    /// Link an already boxed step after the current tail.
    #[must_use]
    pub fn append_boxed(mut self, next: Box<dyn ValidatorStep>) -> Self {
        self.steps.push(next);
        self
    }

    /// Number of steps linked so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a builder starts with a head step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze the chain. No step can be added or relinked afterwards.
    pub fn build(self) -> Chain {
        Chain::from_steps(self.steps)
    }
}
