//! Field rules and the checks they run.

use std::collections::HashMap;

use serde_json::Value;

use catalog_core::types::{FieldError, FieldLocation};

/// A single predicate over an optional JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Present, not `null`, and not an empty string or array.
    NotEmpty,
    /// A JSON number or a decimal string such as `"12.5"` that parses to a
    /// finite value.
    Numeric,
    /// Numeric value strictly greater than zero.
    GreaterThanZero,
    /// `true`/`false`, `"true"`/`"false"`, or `0`/`1` in either form.
    Boolean,
    /// A string of ASCII digits with an optional sign.
    Integer,
}

impl Check {
    /// Whether `value` satisfies this check.
    pub fn passes(self, value: Option<&Value>) -> bool {
        match self {
            Self::NotEmpty => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(Value::Array(items)) => !items.is_empty(),
                Some(_) => true,
            },
            Self::Numeric => numeric_value(value).is_some(),
            Self::GreaterThanZero => numeric_value(value).is_some_and(|n| n > 0.0),
            Self::Boolean => as_flag(value).is_some(),
            Self::Integer => match value {
                Some(Value::String(s)) => is_integer(s),
                Some(Value::Number(n)) => n.is_i64() || n.is_u64(),
                _ => false,
            },
        }
    }
}

/// A check paired with the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Predicate to run.
    pub check: Check,
    /// Message for the resulting [`FieldError`].
    pub message: &'static str,
}

/// Every check declared for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field (or path parameter) name.
    pub field: &'static str,
    /// Where the field is read from.
    pub location: FieldLocation,
    /// Checks, run in order; all of them run even after a failure.
    pub rules: &'static [Rule],
}

impl FieldRule {
    /// Run every check against the request and append one error per failure.
    pub fn evaluate(
        &self,
        params: &HashMap<String, String>,
        body: &Value,
        errors: &mut Vec<FieldError>,
    ) {
        let value = match self.location {
            FieldLocation::Params => params.get(self.field).cloned().map(Value::String),
            FieldLocation::Body => body.get(self.field).cloned(),
        };

        for rule in self.rules {
            if !rule.check.passes(value.as_ref()) {
                errors.push(FieldError::new(
                    self.field,
                    self.location,
                    value.clone(),
                    rule.message,
                ));
            }
        }
    }
}

/// An ordered list of field rules attached to one route.
#[derive(Debug)]
pub struct RuleSet {
    /// Route label used in logs.
    pub name: &'static str,
    /// Field rules in evaluation order.
    pub fields: &'static [FieldRule],
}

impl RuleSet {
    /// Whether any rule reads a path parameter.
    pub fn reads_params(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.location == FieldLocation::Params)
    }

    /// Whether any rule reads the request body.
    pub fn reads_body(&self) -> bool {
        self.fields.iter().any(|f| f.location == FieldLocation::Body)
    }

    /// Evaluate every rule and collect all failures, in declaration order.
    pub fn evaluate(&self, params: &HashMap<String, String>, body: &Value) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in self.fields {
            field.evaluate(params, body, &mut errors);
        }
        errors
    }
}

/// Numeric value of a JSON number or decimal string; `None` unless finite.
pub fn numeric_value(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_decimal(s) => s.parse().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Boolean value of a JSON bool, `"true"`/`"false"`, or `0`/`1`.
pub fn as_flag(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_u64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// `[+-]?([0-9]*.)?[0-9]+`
fn is_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => ("", unsigned),
    };
    !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
        && whole.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]?[0-9]+`
fn is_integer(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit())
}
