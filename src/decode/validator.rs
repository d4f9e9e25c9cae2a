//! Coercion of untyped JSON values into typed action fields.
//!
//! Pure checks return a `Validation` so that every problem in a record is
//! collected. [`ReportingValidator`] turns failed checks into reports and a
//! fallback value, which is what decoding uses.

use super::error::{kind_name, DecodeError};
use crate::core::EffectKind;
use crate::diagnostics::Reporter;
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single field check.
pub type Checked<T> = Validation<T, NonEmptyVec<DecodeError>>;

/// Closed-set values that have a textual tag.
pub trait Tag: Copy {
    fn tag(self) -> &'static str;
}

impl Tag for EffectKind {
    fn tag(self) -> &'static str {
        self.as_str()
    }
}

/// Validate-and-coerce-or-fall-back contract used by decoding.
pub trait Validator {
    /// Coerce `value` to a member of `allowed`, or return `fallback`.
    fn coerce_enum<T: Tag>(
        &mut self,
        value: Option<&Value>,
        allowed: &[T],
        fallback: T,
        context: &str,
    ) -> T;

    /// Coerce `value` to a string; absent or `null` becomes `""`.
    fn coerce_string(&mut self, value: Option<&Value>, context: &str) -> String;

    /// Note a problem that has no field-level fallback.
    fn reject(&mut self, error: DecodeError);
}

/// Check that `value` names a member of `allowed`.
pub fn check_enum<T: Tag>(value: Option<&Value>, allowed: &[T], context: &str) -> Checked<T> {
    match value {
        None | Some(Value::Null) => Validation::fail(DecodeError::MissingField {
            context: context.to_string(),
        }),
        Some(Value::String(s)) => match allowed.iter().copied().find(|t| t.tag() == s) {
            Some(found) => Validation::success(found),
            None => Validation::fail(DecodeError::NotInSet {
                context: context.to_string(),
                value: s.clone(),
                allowed: allowed
                    .iter()
                    .map(|t| t.tag())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        },
        Some(other) => Validation::fail(DecodeError::WrongType {
            context: context.to_string(),
            expected: "string",
            found: kind_name(other),
        }),
    }
}

/// Check that `value` is a string, treating absence as `""`.
pub fn check_string(value: Option<&Value>, context: &str) -> Checked<String> {
    match value {
        None | Some(Value::Null) => Validation::success(String::new()),
        Some(Value::String(s)) => Validation::success(s.clone()),
        Some(other) => Validation::fail(DecodeError::WrongType {
            context: context.to_string(),
            expected: "string",
            found: kind_name(other),
        }),
    }
}

/// Check a whole `{act, region, param}` record without falling back.
///
/// Collects every problem instead of stopping at the first one.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stagehand::decode::validate_record;
///
/// assert!(validate_record(&json!({ "act": "hand_move", "region": "hand" }), "action").is_success());
///
/// let bad = validate_record(&json!({ "act": "explode", "param": 3 }), "action");
/// assert!(bad.is_failure());
/// ```
pub fn validate_record(record: &Value, context: &str) -> Checked<()> {
    let Value::Object(fields) = record else {
        return Validation::fail(DecodeError::NotAnObject {
            context: context.to_string(),
            found: kind_name(record),
        });
    };

    let checks = vec![
        check_enum(fields.get("act"), &EffectKind::ALL, &format!("{context}.act")).map(|_| ()),
        check_string(fields.get("region"), &format!("{context}.region")).map(|_| ()),
        check_string(fields.get("param"), &format!("{context}.param")).map(|_| ()),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Validator that reports every rejected value and substitutes a fallback.
pub struct ReportingValidator<'a> {
    reporter: &'a mut dyn Reporter,
    rejected: usize,
}

impl<'a> ReportingValidator<'a> {
    pub fn new(reporter: &'a mut dyn Reporter) -> Self {
        Self {
            reporter,
            rejected: 0,
        }
    }

    /// Number of problems reported so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn unwrap_or_report<T>(&mut self, checked: Checked<T>, fallback: impl FnOnce() -> T) -> T {
        match checked {
            Validation::Success(value) => value,
            Validation::Failure(errors) => {
                for error in errors.iter() {
                    self.reject(error.clone());
                }
                fallback()
            }
        }
    }
}

impl Validator for ReportingValidator<'_> {
    fn coerce_enum<T: Tag>(
        &mut self,
        value: Option<&Value>,
        allowed: &[T],
        fallback: T,
        context: &str,
    ) -> T {
        let checked = check_enum(value, allowed, context);
        self.unwrap_or_report(checked, || fallback)
    }

    fn coerce_string(&mut self, value: Option<&Value>, context: &str) -> String {
        let checked = check_string(value, context);
        self.unwrap_or_report(checked, String::new)
    }

    fn reject(&mut self, error: DecodeError) {
        self.rejected += 1;
        self.reporter.report(&error.to_string());
    }
}
