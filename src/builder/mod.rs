//! Builder API for ergonomic action construction.

pub mod action;
pub mod error;

pub use action::ActionBuilder;
pub use error::BuildError;

use crate::action::ActionDescriptor;
use crate::core::{EffectKind, Region};

/// Create an action that prints a fixed message.
///
/// # Example
///
/// ```
/// use stagehand::builder::print_action;
/// use stagehand::core::{BasicRegion, EffectKind};
///
/// let action = print_action::<BasicRegion>("hello");
/// assert_eq!(action.effect(), EffectKind::Print);
/// ```
pub fn print_action<R: Region>(text: impl Into<String>) -> ActionDescriptor<R> {
    ActionDescriptor::with(EffectKind::Print, "", text)
}

/// Create an action that sets `region`'s image.
pub fn image_action<R: Region>(
    region: impl Into<String>,
    image: impl Into<String>,
) -> ActionDescriptor<R> {
    ActionDescriptor::with(EffectKind::SetImage, region, image)
}
