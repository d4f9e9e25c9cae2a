//! The effect table.

use super::descriptor::ActionDescriptor;
use crate::config::{EffectConfig, GrowthStep};
use crate::core::{EffectKind, Region, RegionHandle};
use crate::diagnostics::OutputSink;
use rand::{Rng, RngCore};

/// Rendering of a missing event region in `print_event` output.
pub const UNDEFINED_REGION: &str = "undefined";

/// Metadata of the transition firing that triggered an action.
pub struct FiringEvent<'a, R: Region> {
    pub event_type: &'a str,
    pub region: Option<&'a RegionHandle<R>>,
}

impl<'a, R: Region> FiringEvent<'a, R> {
    /// Event with no originating region.
    pub fn new(event_type: &'a str) -> Self {
        Self {
            event_type,
            region: None,
        }
    }

    pub fn from_region(event_type: &'a str, region: &'a RegionHandle<R>) -> Self {
        Self {
            event_type,
            region: Some(region),
        }
    }
}

/// What an action needs from its surroundings while executing.
pub struct ExecutionContext<'a> {
    pub(crate) output: &'a mut dyn OutputSink,
    pub(crate) rng: &'a mut dyn RngCore,
    pub(crate) config: &'a EffectConfig,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(
        output: &'a mut dyn OutputSink,
        rng: &'a mut dyn RngCore,
        config: &'a EffectConfig,
    ) -> Self {
        Self {
            output,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &EffectConfig {
        self.config
    }
}

impl<R: Region> ActionDescriptor<R> {
    /// Apply the effect once.
    ///
    /// Region effects are no-ops while the action is unbound (or its region
    /// has been dropped).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use stagehand::action::{ActionDescriptor, ExecutionContext, FiringEvent};
    /// use stagehand::config::EffectConfig;
    /// use stagehand::core::{BasicRegion, EffectKind, Geometry, Region, RegionRegistry};
    /// use stagehand::diagnostics::CapturedDiagnostics;
    ///
    /// let mut registry = RegionRegistry::new();
    /// let hand = registry.insert(BasicRegion::new("hand", Geometry::new(15.0, 190.0, 20.0, 20.0)));
    ///
    /// let mut diag = CapturedDiagnostics::new();
    /// let mut action = ActionDescriptor::with(EffectKind::HandMove, "hand", "");
    /// action.bind_region(registry.handles(), &mut diag);
    ///
    /// let config = EffectConfig::default();
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let mut ctx = ExecutionContext::new(&mut diag, &mut rng, &config);
    /// action.execute(&FiringEvent::new("click"), &mut ctx);
    ///
    /// assert_eq!(hand.borrow().geometry().y, 180.0);
    /// ```
    pub fn execute(&self, event: &FiringEvent<'_, R>, ctx: &mut ExecutionContext<'_>) {
        log::trace!(target: "stagehand", "execute {} on '{}'", self.effect, event.event_type);

        let config = ctx.config;
        match self.effect {
            EffectKind::None => {}
            EffectKind::Print => ctx.output.emit(&[self.parameter.as_str()]),
            EffectKind::PrintEvent => {
                let region = event
                    .region
                    .map(|r| r.borrow().debug_string())
                    .unwrap_or_else(|| UNDEFINED_REGION.to_string());
                ctx.output
                    .emit(&[self.parameter.as_str(), event.event_type, region.as_str()]);
            }
            EffectKind::SetImage => self.with_region(|r| r.set_image_loc(&self.parameter)),
            EffectKind::ClearImage => self.with_region(|r| r.set_image_loc("")),
            EffectKind::BalloonBigger => self.with_region(|r| {
                inflate(r, &self.parameter, config, &mut *ctx.rng);
            }),
            EffectKind::HandMove => self.with_region(|r| r.geometry_mut().y -= config.hand_step),
            EffectKind::LineShorter => {
                self.with_region(|r| r.geometry_mut().height -= config.line_step)
            }
            EffectKind::BalloonRest => {
                self.with_region(|r| *r.geometry_mut() = config.balloon_rest)
            }
            EffectKind::HandRest => self.with_region(|r| *r.geometry_mut() = config.hand_rest),
            EffectKind::LineRest => self.with_region(|r| *r.geometry_mut() = config.line_rest),
        }
    }

    fn with_region(&self, apply: impl FnOnce(&mut R)) {
        match self.bound_region() {
            Some(region) => {
                let mut region = region.borrow_mut();
                apply(&mut *region);
            }
            None => log::trace!(
                target: "stagehand",
                "{} skipped: region '{}' unbound",
                self.effect,
                self.target_name
            ),
        }
    }
}

/// One `balloon_bigger` step.
///
/// A popped balloon (image equal to the configured boom image) stays as is.
/// Otherwise it grows around its center and pops once its width exceeds a
/// threshold drawn afresh on every call.
fn inflate<R: Region>(
    region: &mut R,
    boom_image: &str,
    config: &EffectConfig,
    rng: &mut dyn RngCore,
) {
    if region.image_loc() == config.boom_image {
        return;
    }

    let GrowthStep { dx, dy, grow } = config.balloon_step;
    let geometry = region.geometry_mut();
    geometry.x -= dx;
    geometry.y -= dy;
    geometry.width += grow;
    geometry.height += grow;
    let width = geometry.width;

    let Some(range) = config.drawable_threshold_range() else {
        log::warn!(
            target: "stagehand",
            "'{}' cannot pop: boom threshold range {:?} is not drawable",
            region.name(),
            config.boom_threshold_range()
        );
        return;
    };
    let threshold: f64 = rng.gen_range(range);
    if width > threshold {
        log::debug!(target: "stagehand", "'{}' popped at width {width}", region.name());
        if boom_image != config.boom_image {
            log::warn!(
                target: "stagehand",
                "'{}' popped into '{boom_image}', not the boom image '{}'; it will keep growing",
                region.name(),
                config.boom_image
            );
        }
        region.set_image_loc(boom_image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasicRegion, Geometry, RegionRegistry};
    use crate::diagnostics::CapturedDiagnostics;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type Action = ActionDescriptor<BasicRegion>;

    struct Stage {
        registry: RegionRegistry<BasicRegion>,
        diag: CapturedDiagnostics,
        rng: StdRng,
        config: EffectConfig,
    }

    impl Stage {
        fn new(region: BasicRegion) -> Self {
            let mut registry = RegionRegistry::new();
            registry.insert(region);
            Self {
                registry,
                diag: CapturedDiagnostics::new(),
                rng: StdRng::seed_from_u64(7),
                config: EffectConfig::default(),
            }
        }

        fn bound(&mut self, effect: EffectKind, target: &str, param: &str) -> Action {
            let mut action = Action::with(effect, target, param);
            action.bind_region(self.registry.handles(), &mut self.diag);
            action
        }

        fn run(&mut self, action: &Action, event: &FiringEvent<'_, BasicRegion>) {
            let mut ctx = ExecutionContext::new(&mut self.diag, &mut self.rng, &self.config);
            action.execute(event, &mut ctx);
        }

        fn fire(&mut self, action: &Action) {
            self.run(action, &FiringEvent::new("tick"));
        }

        fn region(&self) -> BasicRegion {
            self.registry.handles()[0].borrow().clone()
        }
    }

    fn balloon() -> BasicRegion {
        BasicRegion::new("balloon", Geometry::new(0.0, 0.0, 50.0, 50.0))
    }

    #[test]
    fn set_image_scenario() {
        let mut stage = Stage::new(balloon());
        let action = stage.bound(EffectKind::SetImage, "balloon", "./images/red.png");

        stage.fire(&action);

        assert_eq!(stage.region().image_loc(), "./images/red.png");
    }

    #[test]
    fn clear_image_always_empties() {
        let mut stage = Stage::new(balloon().with_image("./images/blue.png"));
        let action = stage.bound(EffectKind::ClearImage, "balloon", "ignored");

        stage.fire(&action);
        assert_eq!(stage.region().image_loc(), "");

        stage.fire(&action);
        assert_eq!(stage.region().image_loc(), "");
    }

    #[test]
    fn set_image_with_empty_parameter_matches_clear_image() {
        let mut set_stage = Stage::new(balloon().with_image("./images/blue.png"));
        let set = set_stage.bound(EffectKind::SetImage, "balloon", "");
        set_stage.fire(&set);

        let mut clear_stage = Stage::new(balloon().with_image("./images/blue.png"));
        let clear = clear_stage.bound(EffectKind::ClearImage, "balloon", "");
        clear_stage.fire(&clear);

        assert_eq!(set_stage.region(), clear_stage.region());
    }

    #[test]
    fn hand_move_scenario() {
        let mut stage = Stage::new(BasicRegion::new(
            "hand",
            Geometry::new(15.0, 190.0, 20.0, 20.0),
        ));
        let action = stage.bound(EffectKind::HandMove, "hand", "");

        stage.fire(&action);

        assert_eq!(stage.region().geometry(), Geometry::new(15.0, 180.0, 20.0, 20.0));
    }

    #[test]
    fn line_shorter_reduces_height() {
        let mut stage = Stage::new(BasicRegion::new(
            "line",
            Geometry::new(0.0, 0.0, 100.0, 100.0),
        ));
        let action = stage.bound(EffectKind::LineShorter, "line", "");

        stage.fire(&action);
        stage.fire(&action);

        assert_eq!(stage.region().geometry(), Geometry::new(0.0, 0.0, 100.0, 80.0));
    }

    #[test]
    fn rest_effects_restore_literals() {
        let cases = [
            (EffectKind::BalloonRest, Geometry::new(0.0, 0.0, 50.0, 50.0)),
            (EffectKind::HandRest, Geometry::new(15.0, 190.0, 20.0, 20.0)),
            (EffectKind::LineRest, Geometry::new(0.0, 0.0, 100.0, 100.0)),
        ];
        for (effect, expected) in cases {
            let mut stage = Stage::new(BasicRegion::new(
                "thing",
                Geometry::new(-33.0, 412.5, 7.0, 900.0),
            ));
            let action = stage.bound(effect, "thing", "");
            stage.fire(&action);
            assert_eq!(stage.region().geometry(), expected, "{effect}");
        }
    }

    #[test]
    fn balloon_bigger_grows_then_pops() {
        let mut stage = Stage::new(balloon());
        let boom = stage.config.boom_image.clone();
        let action = stage.bound(EffectKind::BalloonBigger, "balloon", &boom);

        let mut previous = stage.region().geometry();
        let mut popped = false;
        for _ in 0..200 {
            stage.fire(&action);
            let region = stage.region();
            let current = region.geometry();
            assert_eq!(current.x, previous.x - 5.0);
            assert_eq!(current.y, previous.y - 10.0);
            assert_eq!(current.width, previous.width + 10.0);
            assert_eq!(current.height, previous.height + 10.0);
            previous = current;
            if region.image_loc() == boom {
                popped = true;
                break;
            }
        }
        // width passes the top of the threshold range well within 200 steps
        assert!(popped);

        stage.fire(&action);
        stage.fire(&action);
        assert_eq!(stage.region().geometry(), previous);
    }

    #[test]
    fn balloon_bigger_is_inert_once_popped() {
        let mut stage = Stage::new(balloon().with_image("./images/boom.png"));
        let action = stage.bound(EffectKind::BalloonBigger, "balloon", "./images/boom.png");

        stage.fire(&action);

        assert_eq!(stage.region().geometry(), Geometry::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(stage.region().image_loc(), "./images/boom.png");
    }

    #[test]
    fn balloon_bigger_below_threshold_never_pops() {
        let mut stage = Stage::new(balloon());
        let action = stage.bound(EffectKind::BalloonBigger, "balloon", "./images/boom.png");

        // widths 60..=90 all sit below the minimum threshold of 100
        for _ in 0..4 {
            stage.fire(&action);
        }
        assert_eq!(stage.region().geometry().width, 90.0);
        assert_eq!(stage.region().image_loc(), "");
    }

    #[test]
    fn balloon_bigger_with_overflowing_range_grows_without_popping() {
        let mut stage = Stage::new(balloon());
        stage.config.boom_threshold_min = -1.7e308;
        stage.config.boom_threshold_max = 1.7e308;
        let action = stage.bound(EffectKind::BalloonBigger, "balloon", "./images/boom.png");

        stage.fire(&action);
        stage.fire(&action);

        assert_eq!(stage.region().geometry(), Geometry::new(-10.0, -20.0, 70.0, 70.0));
        assert_eq!(stage.region().image_loc(), "");
    }

    #[test]
    fn balloon_popped_into_other_image_keeps_growing() {
        let mut stage = Stage::new(balloon());
        let action = stage.bound(EffectKind::BalloonBigger, "balloon", "./images/pop.png");

        // width 1110 exceeds every threshold in [100, 1100)
        for _ in 0..110 {
            stage.fire(&action);
        }

        assert_eq!(stage.region().image_loc(), "./images/pop.png");
        assert_eq!(stage.region().geometry().width, 1150.0);
    }

    #[test]
    fn dropped_region_makes_actions_inert() {
        let mut stage = Stage::new(BasicRegion::new(
            "line",
            Geometry::new(3.0, 3.0, 3.0, 3.0),
        ));
        let action = stage.bound(EffectKind::LineRest, "line", "");
        assert!(action.is_bound());

        stage.registry = RegionRegistry::new();
        assert!(!action.is_bound());
        stage.fire(&action);

        assert!(action.bound_region().is_none());
        assert!(stage.diag.records().is_empty());
    }

    #[test]
    fn print_emits_parameter() {
        let mut stage = Stage::new(balloon());
        let action = stage.bound(EffectKind::Print, "", "hello there");

        stage.fire(&action);

        assert_eq!(stage.diag.lines(), vec!["hello there"]);
    }

    #[test]
    fn print_event_without_region_says_undefined() {
        let mut stage = Stage::new(balloon());
        let action = stage.bound(EffectKind::PrintEvent, "", "got");

        stage.run(&action, &FiringEvent::new("mouse_down"));

        assert_eq!(stage.diag.lines(), vec!["got mouse_down undefined"]);
    }

    #[test]
    fn print_event_renders_event_region() {
        let mut stage = Stage::new(balloon());
        let action = stage.bound(EffectKind::PrintEvent, "", "got");
        let origin = std::rc::Rc::clone(&stage.registry.handles()[0]);
        let expected = format!("got click {}", origin.borrow().debug_string());

        stage.run(&action, &FiringEvent::from_region("click", &origin));

        assert_eq!(stage.diag.lines(), vec![expected.as_str()]);
    }

    #[test]
    fn unbound_region_effects_are_no_ops() {
        let mut stage = Stage::new(balloon());
        let action = stage.bound(EffectKind::LineRest, "missing", "");
        let before = stage.region();

        stage.fire(&action);

        assert_eq!(stage.region(), before);
        assert_eq!(stage.diag.reports().len(), 1);
    }

    #[test]
    fn none_does_nothing() {
        let mut stage = Stage::new(balloon().with_image("a.png"));
        let action = stage.bound(EffectKind::None, "balloon", "b.png");
        let before = stage.region();

        stage.fire(&action);

        assert_eq!(stage.region(), before);
        assert!(stage.diag.records().is_empty());
    }
}
