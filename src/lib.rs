//! Passchain: password validation as a chain of responsibility.
//!
//! A [`Chain`](chain::Chain) hands a candidate password to each of its
//! [`ValidatorStep`](chain::ValidatorStep)s in turn and accepts it only if
//! every step does. The first rejection ends the evaluation.
//!
//! The [`steps`] module provides the built-in rules, [`config`] assembles a
//! chain from `passchain.yaml`, and [`cli`]/[`commands`] back the `passchain`
//! binary.

pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod steps;
