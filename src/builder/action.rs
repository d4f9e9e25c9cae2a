//! Builder for constructing actions.

use crate::action::ActionDescriptor;
use crate::builder::error::BuildError;
use crate::core::{EffectKind, Region};

/// Builder for constructing actions with a fluent API.
///
/// # Example
///
/// ```rust
/// use stagehand::builder::ActionBuilder;
/// use stagehand::core::{BasicRegion, EffectKind};
///
/// let action = ActionBuilder::new()
///     .effect(EffectKind::SetImage)
///     .target("balloon")
///     .parameter("./images/red.png")
///     .build::<BasicRegion>()
///     .unwrap();
///
/// assert_eq!(action.tag(), "set_image balloon \"./images/red.png\"");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ActionBuilder {
    effect: Option<EffectKind>,
    target: String,
    parameter: String,
}

impl ActionBuilder {
    /// Create a new action builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the effect (required).
    pub fn effect(mut self, effect: EffectKind) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Set the target region name (optional, defaults to `""`).
    pub fn target(mut self, name: impl Into<String>) -> Self {
        self.target = name.into();
        self
    }

    /// Set the parameter (optional, defaults to `""`).
    pub fn parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = parameter.into();
        self
    }

    /// Shorthand for `.effect(EffectKind::Print).parameter(text)`.
    pub fn prints(self, text: impl Into<String>) -> Self {
        self.effect(EffectKind::Print).parameter(text)
    }

    /// Build the action.
    pub fn build<R: Region>(self) -> Result<ActionDescriptor<R>, BuildError> {
        let effect = self.effect.ok_or(BuildError::MissingEffect)?;
        Ok(ActionDescriptor::with(effect, self.target, self.parameter))
    }
}
