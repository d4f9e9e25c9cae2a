//! Resolution of target names to live regions.

use super::descriptor::ActionDescriptor;
use super::error::ActionError;
use crate::core::{Region, RegionHandle};
use crate::diagnostics::Reporter;
use std::rc::Rc;

/// What a call to [`ActionDescriptor::bind_region`] ended with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindOutcome {
    /// A region with the target name was found.
    Bound,
    /// No match, and the effect never needed one.
    NotRequired,
    /// No match for an effect that needs a region. Reported.
    Unresolved,
}

impl<R: Region> ActionDescriptor<R> {
    /// Resolve the target name against the live regions.
    ///
    /// The first region (in iteration order) whose name equals the target
    /// wins. When nothing matches, region-free effects stay unbound
    /// silently; every other effect reports one structural problem and
    /// stays unbound, which makes it inert when executed.
    ///
    /// Meant to run once, after every region exists. Calling it again
    /// re-resolves against the given collection.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stagehand::action::{ActionDescriptor, BindOutcome};
    /// use stagehand::core::{BasicRegion, EffectKind, Geometry, RegionRegistry};
    /// use stagehand::diagnostics::CapturedDiagnostics;
    ///
    /// let mut registry = RegionRegistry::new();
    /// registry.insert(BasicRegion::new("hand", Geometry::new(15.0, 190.0, 20.0, 20.0)));
    ///
    /// let mut diag = CapturedDiagnostics::new();
    /// let mut action = ActionDescriptor::with(EffectKind::HandMove, "hand", "");
    ///
    /// assert_eq!(action.bind_region(registry.handles(), &mut diag), BindOutcome::Bound);
    /// assert!(diag.reports().is_empty());
    /// ```
    pub fn bind_region<P>(&mut self, regions: &[RegionHandle<R>], reporter: &mut P) -> BindOutcome
    where
        P: Reporter + ?Sized,
    {
        let found = regions
            .iter()
            .find(|region| region.borrow().name() == self.target_name);

        if let Some(region) = found {
            self.bound_region = Some(Rc::downgrade(region));
            log::debug!(target: "stagehand", "bound {} to region '{}'", self.effect, self.target_name);
            return BindOutcome::Bound;
        }

        self.bound_region = None;
        if !self.effect.requires_region() {
            return BindOutcome::NotRequired;
        }

        let error = ActionError::UnresolvedRegion {
            effect: self.effect,
            target: self.target_name.clone(),
        };
        reporter.report(&error.to_string());
        BindOutcome::Unresolved
    }
}
