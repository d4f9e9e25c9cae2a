//! The ordered actions owned by one transition.

use super::binding::BindOutcome;
use super::descriptor::{ActionDescriptor, ActionRecord};
use super::execute::{ExecutionContext, FiringEvent};
use crate::core::{Region, RegionHandle};
use crate::decode::{kind_name, validate_record, Checked, DecodeError, Validator};
use crate::diagnostics::{OutputSink, Reporter};
use serde_json::Value;
use stillwater::validation::Validation;

/// Actions declared on a transition, run in declaration order.
///
/// # Example
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use serde_json::json;
/// use stagehand::action::{ActionSet, ExecutionContext, FiringEvent};
/// use stagehand::config::EffectConfig;
/// use stagehand::core::{BasicRegion, Geometry, Region, RegionRegistry};
/// use stagehand::decode::ReportingValidator;
/// use stagehand::diagnostics::CapturedDiagnostics;
///
/// let mut registry = RegionRegistry::new();
/// let balloon = registry.insert(BasicRegion::new("balloon", Geometry::new(3.0, 4.0, 70.0, 70.0)));
///
/// let mut diag = CapturedDiagnostics::new();
/// let description = json!([
///     { "act": "balloon_rest", "region": "balloon" },
///     { "act": "set_image", "region": "balloon", "param": "./images/red.png" },
/// ]);
/// let mut actions = ActionSet::decode(&description, &mut ReportingValidator::new(&mut diag));
/// assert_eq!(actions.bind_all(registry.handles(), &mut diag), 0);
///
/// let config = EffectConfig::default();
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut ctx = ExecutionContext::new(&mut diag, &mut rng, &config);
/// actions.fire(&FiringEvent::new("click"), &mut ctx);
///
/// assert_eq!(balloon.borrow().geometry(), Geometry::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(balloon.borrow().image_loc(), "./images/red.png");
/// ```
#[derive(Debug)]
pub struct ActionSet<R: Region> {
    actions: Vec<ActionDescriptor<R>>,
}

impl<R: Region> Default for ActionSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Region> Clone for ActionSet<R> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<R: Region> ActionSet<R> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Decode a JSON array of `{act, region, param}` records.
    ///
    /// Each entry decodes independently; bad entries become `none` actions.
    /// Anything other than an array is reported and yields an empty set.
    pub fn decode<V: Validator>(description: &Value, validator: &mut V) -> Self {
        let Value::Array(entries) = description else {
            validator.reject(DecodeError::NotAnArray {
                context: "actions".to_string(),
                found: kind_name(description),
            });
            return Self::new();
        };

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                ActionDescriptor::decode_in(entry, &format!("actions[{i}]"), &mut *validator)
            })
            .collect()
    }

    /// Check every entry of a description without decoding it.
    pub fn validate(description: &Value) -> Checked<()> {
        let Value::Array(entries) = description else {
            return Validation::fail(DecodeError::NotAnArray {
                context: "actions".to_string(),
                found: kind_name(description),
            });
        };

        let checks = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| validate_record(entry, &format!("actions[{i}]")))
            .collect::<Vec<_>>();

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn push(&mut self, action: ActionDescriptor<R>) {
        self.actions.push(action);
    }

    /// Bind every action; returns how many stayed unresolved.
    pub fn bind_all<P>(&mut self, regions: &[RegionHandle<R>], reporter: &mut P) -> usize
    where
        P: Reporter + ?Sized,
    {
        self.actions
            .iter_mut()
            .map(|action| action.bind_region(regions, &mut *reporter))
            .filter(|outcome| *outcome == BindOutcome::Unresolved)
            .count()
    }

    /// Execute every action once, in order.
    pub fn fire(&self, event: &FiringEvent<'_, R>, ctx: &mut ExecutionContext<'_>) {
        for action in &self.actions {
            action.execute(event, ctx);
        }
    }

    pub fn dump<O: OutputSink + ?Sized>(&self, output: &mut O) {
        for action in &self.actions {
            action.dump(&mut *output);
        }
    }

    pub fn to_records(&self) -> Vec<ActionRecord> {
        self.actions.iter().map(ActionDescriptor::to_record).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActionDescriptor<R>> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<R: Region> FromIterator<ActionDescriptor<R>> for ActionSet<R> {
    fn from_iter<I: IntoIterator<Item = ActionDescriptor<R>>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<'a, R: Region> IntoIterator for &'a ActionSet<R> {
    type Item = &'a ActionDescriptor<R>;
    type IntoIter = std::slice::Iter<'a, ActionDescriptor<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
