//! Declarative request validation.
//!
//! A [`RuleSet`] is an ordered list of field rules attached to a route.
//! Every check runs and every failure is collected; the validation
//! middleware turns a non-empty result into a single 400 response.

pub mod rule_sets;
pub mod rules;

pub use rules::{Check, FieldRule, Rule, RuleSet};
