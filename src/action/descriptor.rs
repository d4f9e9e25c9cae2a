//! Declared actions and their decoding.

use crate::core::{EffectKind, Region, RegionHandle};
use crate::decode::{DecodeError, Validator};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Weak;

/// An effect declared against a named region.
///
/// The declared triple (`effect`, `target_name`, `parameter`) never changes
/// after construction. The bound region starts empty and is filled in by
/// [`bind_region`](ActionDescriptor::bind_region) once every region exists.
/// The reference is weak: the registry owns regions, actions only point at
/// them.
///
/// # Example
///
/// ```rust
/// use stagehand::action::ActionDescriptor;
/// use stagehand::core::{BasicRegion, EffectKind};
///
/// let action: ActionDescriptor<BasicRegion> =
///     ActionDescriptor::new(EffectKind::SetImage)
///         .with_target("balloon")
///         .with_parameter("./images/red.png");
///
/// assert_eq!(action.target_name(), "balloon");
/// assert!(!action.is_bound());
/// ```
#[derive(Debug)]
pub struct ActionDescriptor<R: Region> {
    pub(super) effect: EffectKind,
    pub(super) target_name: String,
    pub(super) parameter: String,
    pub(super) bound_region: Option<Weak<RefCell<R>>>,
}

impl<R: Region> Clone for ActionDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            effect: self.effect,
            target_name: self.target_name.clone(),
            parameter: self.parameter.clone(),
            bound_region: self.bound_region.clone(),
        }
    }
}

impl<R: Region> ActionDescriptor<R> {
    /// Action with an empty target and parameter.
    pub fn new(effect: EffectKind) -> Self {
        Self::with(effect, "", "")
    }

    pub fn with(
        effect: EffectKind,
        target_name: impl Into<String>,
        parameter: impl Into<String>,
    ) -> Self {
        Self {
            effect,
            target_name: target_name.into(),
            parameter: parameter.into(),
            bound_region: None,
        }
    }

    pub fn with_target(mut self, target_name: impl Into<String>) -> Self {
        self.target_name = target_name.into();
        self
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = parameter.into();
        self
    }

    /// Decode an untyped `{act, region, param}` record.
    ///
    /// Never fails. An unknown or missing `act` becomes
    /// [`EffectKind::None`]; missing `region`/`param` become `""`. Rejected
    /// values go through the validator.
    pub fn decode<V: Validator>(record: &Value, validator: &mut V) -> Self {
        Self::decode_in(record, "action", validator)
    }

    /// Like [`decode`](Self::decode), naming the record `context` in
    /// reported problems.
    pub fn decode_in<V: Validator>(record: &Value, context: &str, validator: &mut V) -> Self {
        let Value::Object(fields) = record else {
            validator.reject(DecodeError::NotAnObject {
                context: context.to_string(),
                found: crate::decode::kind_name(record),
            });
            return Self::new(EffectKind::None);
        };

        let effect = validator.coerce_enum(
            fields.get("act"),
            &EffectKind::ALL,
            EffectKind::None,
            &format!("{context}.act"),
        );
        let target_name = validator.coerce_string(fields.get("region"), &format!("{context}.region"));
        let parameter = validator.coerce_string(fields.get("param"), &format!("{context}.param"));

        Self::with(effect, target_name, parameter)
    }

    pub fn effect(&self) -> EffectKind {
        self.effect
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// The bound region, if binding succeeded and the region is still alive.
    pub fn bound_region(&self) -> Option<RegionHandle<R>> {
        self.bound_region.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_bound(&self) -> bool {
        self.bound_region().is_some()
    }

    /// Serializable form of the declaration.
    pub fn to_record(&self) -> ActionRecord {
        ActionRecord {
            act: self.effect,
            region: self.target_name.clone(),
            param: self.parameter.clone(),
        }
    }
}

/// Persisted form of an action: `{act, region, param}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub act: EffectKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param: String,
}

impl<R: Region> From<ActionRecord> for ActionDescriptor<R> {
    fn from(record: ActionRecord) -> Self {
        Self::with(record.act, record.region, record.param)
    }
}
