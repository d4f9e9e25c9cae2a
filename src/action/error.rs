//! Errors raised by actions.

use crate::core::EffectKind;
use thiserror::Error;

/// Errors that can occur while parsing or binding actions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ActionError {
    #[error("Unknown effect '{value}'")]
    UnknownEffect { value: String },

    #[error("Action '{effect}' targets region '{target}', but no region has that name")]
    UnresolvedRegion { effect: EffectKind, target: String },
}
