//! The closed vocabulary of effects an action can apply.
//!
//! Effects are a plain sum type. Textual names (as found in description
//! files) map one-to-one onto variants; anything else is rejected by strict
//! parsing and degraded to [`EffectKind::None`] by decoding.

use crate::action::ActionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Effect applied when an action fires.
///
/// # Example
///
/// ```rust
/// use stagehand::core::EffectKind;
///
/// let effect: EffectKind = "balloon_bigger".parse().unwrap();
/// assert_eq!(effect, EffectKind::BalloonBigger);
/// assert!(effect.requires_region());
///
/// assert!(!EffectKind::Print.requires_region());
/// assert!("explode".parse::<EffectKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Does nothing. Fallback for malformed description data.
    #[default]
    None,
    /// Emits the parameter to the diagnostic output.
    Print,
    /// Emits the parameter together with the firing event.
    PrintEvent,
    /// Replaces the region's image with the parameter.
    SetImage,
    /// Clears the region's image.
    ClearImage,
    /// Inflates the region one step, possibly popping it.
    BalloonBigger,
    /// Restores balloon rest geometry.
    BalloonRest,
    /// Moves the region up one step.
    HandMove,
    /// Shortens the region one step.
    LineShorter,
    /// Restores hand rest geometry.
    HandRest,
    /// Restores line rest geometry.
    LineRest,
}

impl EffectKind {
    /// Every effect, in declaration order.
    pub const ALL: [EffectKind; 11] = [
        EffectKind::None,
        EffectKind::Print,
        EffectKind::PrintEvent,
        EffectKind::SetImage,
        EffectKind::ClearImage,
        EffectKind::BalloonBigger,
        EffectKind::BalloonRest,
        EffectKind::HandMove,
        EffectKind::LineShorter,
        EffectKind::HandRest,
        EffectKind::LineRest,
    ];

    /// Name used in description files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Print => "print",
            Self::PrintEvent => "print_event",
            Self::SetImage => "set_image",
            Self::ClearImage => "clear_image",
            Self::BalloonBigger => "balloon_bigger",
            Self::BalloonRest => "balloon_rest",
            Self::HandMove => "hand_move",
            Self::LineShorter => "line_shorter",
            Self::HandRest => "hand_rest",
            Self::LineRest => "line_rest",
        }
    }

    /// Whether the effect needs a bound region to do anything.
    ///
    /// `none`, `print` and `print_event` never touch a region, so an
    /// unresolved target is expected for them rather than an error.
    pub fn requires_region(self) -> bool {
        !matches!(self, Self::None | Self::Print | Self::PrintEvent)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|effect| effect.as_str() == s)
            .ok_or_else(|| ActionError::UnknownEffect {
                value: s.to_string(),
            })
    }
}
