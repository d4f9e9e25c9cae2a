//! Stagehand: region actions for FSM-driven UI and animation engines
//!
//! When a state machine transition fires, its actions apply small effects to
//! named visual regions: swapping images, nudging or resetting geometry, or
//! printing diagnostics. Action declarations come from untrusted description
//! data, so decoding degrades bad input to inert actions instead of failing.
//!
//! # Core Concepts
//!
//! - **Effects**: The closed vocabulary in [`core::EffectKind`](crate::core::EffectKind)
//! - **Regions**: Anything implementing [`core::Region`](crate::core::Region)
//! - **Actions**: Declared with [`action::ActionDescriptor`](crate::action::ActionDescriptor), bound once, executed per firing
//! - **Diagnostics**: Injectable reporting and output channels
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use serde_json::json;
//! use stagehand::action::{ActionDescriptor, ExecutionContext, FiringEvent};
//! use stagehand::config::EffectConfig;
//! use stagehand::core::{BasicRegion, Geometry, Region, RegionRegistry};
//! use stagehand::decode::ReportingValidator;
//! use stagehand::diagnostics::CapturedDiagnostics;
//!
//! let mut diag = CapturedDiagnostics::new();
//! let record = json!({ "act": "set_image", "region": "balloon", "param": "./images/red.png" });
//! let mut action = ActionDescriptor::decode(&record, &mut ReportingValidator::new(&mut diag));
//!
//! let mut regions = RegionRegistry::new();
//! let balloon = regions.insert(BasicRegion::new("balloon", Geometry::new(0.0, 0.0, 50.0, 50.0)));
//! action.bind_region(regions.handles(), &mut diag);
//!
//! let config = EffectConfig::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut ctx = ExecutionContext::new(&mut diag, &mut rng, &config);
//! action.execute(&FiringEvent::new("click"), &mut ctx);
//!
//! assert_eq!(balloon.borrow().image_loc(), "./images/red.png");
//! ```

pub mod action;
pub mod builder;
pub mod config;
pub mod core;
pub mod decode;
pub mod diagnostics;

// Re-export commonly used types
pub use crate::action::{ActionDescriptor, ActionSet, BindOutcome, ExecutionContext, FiringEvent};
pub use crate::config::EffectConfig;
pub use crate::core::{EffectKind, Region, RegionHandle, RegionRegistry};
