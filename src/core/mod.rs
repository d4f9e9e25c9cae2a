//! Core vocabulary shared by every action.
//!
//! - The closed set of effects via [`EffectKind`]
//! - The region collaborator via the [`Region`] trait
//! - Region storage via [`RegionRegistry`] and [`RegionHandle`]

mod effect;
mod region;

pub use effect::EffectKind;
pub use region::{BasicRegion, Geometry, Region, RegionHandle, RegionRegistry};
