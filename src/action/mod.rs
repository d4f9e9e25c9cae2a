//! Actions: declared effects bound to regions and run on transition firings.
//!
//! # Lifecycle
//!
//! 1. **Declare**: build an [`ActionDescriptor`] directly or decode it from
//!    an untyped record. Decoding never fails; bad data degrades to `none`.
//! 2. **Bind**: once every region exists, [`ActionDescriptor::bind_region`]
//!    resolves the target name to a weak region reference.
//! 3. **Execute**: each time the owning transition fires,
//!    [`ActionDescriptor::execute`] applies the effect.
//!
//! [`ActionSet`] runs the same lifecycle over every action of a transition.

mod binding;
mod debug;
mod descriptor;
mod error;
mod execute;
mod set;

pub use binding::BindOutcome;
pub use descriptor::{ActionDescriptor, ActionRecord};
pub use error::ActionError;
pub use execute::{ExecutionContext, FiringEvent, UNDEFINED_REGION};
pub use set::ActionSet;
