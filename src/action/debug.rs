//! Textual renderings of actions.

use super::descriptor::ActionDescriptor;
use crate::core::Region;
use crate::diagnostics::OutputSink;
use std::fmt;

impl<R: Region> ActionDescriptor<R> {
    /// Compact form: `effect target "parameter"`.
    pub fn tag(&self) -> String {
        self.to_string()
    }

    /// Indented multi-line form.
    ///
    /// Ends with an `(unbound)` line when the effect needs a region and
    /// none is bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stagehand::action::ActionDescriptor;
    /// use stagehand::core::{BasicRegion, EffectKind};
    ///
    /// let action: ActionDescriptor<BasicRegion> =
    ///     ActionDescriptor::with(EffectKind::SetImage, "balloon", "./images/red.png");
    ///
    /// assert!(action.describe().ends_with("(unbound)"));
    /// ```
    pub fn describe(&self) -> String {
        let mut text = format!(
            "Action {}\n    region: {}\n    param: \"{}\"",
            self.effect, self.target_name, self.parameter
        );
        if self.effect.requires_region() && !self.is_bound() {
            text.push_str("\n    (unbound)");
        }
        text
    }

    /// Write [`describe`](Self::describe) to the output channel.
    pub fn dump<O: OutputSink + ?Sized>(&self, output: &mut O) {
        output.emit(&[self.describe().as_str()]);
    }
}

impl<R: Region> fmt::Display for ActionDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\"",
            self.effect, self.target_name, self.parameter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasicRegion, EffectKind, Geometry, RegionRegistry};
    use crate::diagnostics::CapturedDiagnostics;

    type Action = ActionDescriptor<BasicRegion>;

    #[test]
    fn tag_is_compact() {
        let action = Action::with(EffectKind::SetImage, "balloon", "./images/red.png");
        assert_eq!(action.tag(), "set_image balloon \"./images/red.png\"");
    }

    #[test]
    fn describe_marks_unbound_region_effects() {
        let action = Action::with(EffectKind::HandMove, "hand", "");
        assert_eq!(
            action.describe(),
            "Action hand_move\n    region: hand\n    param: \"\"\n    (unbound)"
        );
    }

    #[test]
    fn describe_skips_marker_for_region_free_effects() {
        let action = Action::with(EffectKind::Print, "", "hi");
        assert!(!action.describe().contains("unbound"));
    }

    #[test]
    fn describe_skips_marker_once_bound() {
        let mut registry = RegionRegistry::new();
        registry.insert(BasicRegion::new("hand", Geometry::default()));
        let mut diag = CapturedDiagnostics::new();

        let mut action = Action::with(EffectKind::HandRest, "hand", "");
        action.bind_region(registry.handles(), &mut diag);

        assert!(!action.describe().contains("unbound"));
    }

    #[test]
    fn dump_writes_long_form() {
        let action = Action::with(EffectKind::LineRest, "line", "");
        let mut diag = CapturedDiagnostics::new();

        action.dump(&mut diag);

        assert_eq!(diag.lines(), vec![action.describe().as_str()]);
    }
}
