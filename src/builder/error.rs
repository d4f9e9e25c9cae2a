//! Build errors for action builders.

use thiserror::Error;

/// Errors that can occur when building actions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Action effect not specified. Call .effect(kind) before .build()")]
    MissingEffect,
}
