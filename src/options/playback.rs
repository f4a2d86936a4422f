use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::timeline::{EndBehavior, ProgressClock};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Autoplay pacing and end-of-sequence behavior.
pub struct PlaybackOptions {
    /// Progress advanced per second while playing.
    #[schemars(title = "Rate", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub rate: f32,
    /// Whether the sequence loops forever or stops at the end.
    #[schemars(title = "At End")]
    pub end_behavior: EndBehavior,
    /// Start playing as soon as the session begins.
    #[schemars(title = "Autoplay")]
    pub autoplay: bool,
    /// Progress moved by one keyboard scrub step.
    #[schemars(skip)]
    pub scrub_step: f32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            rate: ProgressClock::DEFAULT_RATE,
            end_behavior: EndBehavior::Loop,
            autoplay: true,
            scrub_step: 0.01,
        }
    }
}

impl PlaybackOptions {
    /// Clock configured from these options.
    #[must_use]
    pub fn clock(&self) -> ProgressClock {
        ProgressClock::new(self.rate, self.end_behavior)
    }
}
