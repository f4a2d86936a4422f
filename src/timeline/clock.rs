use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::state::TimelineState;

/// What autoplay does when progress reaches the end of the sequence.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EndBehavior {
    /// Wrap to exactly 0.0 and keep playing forever.
    #[default]
    Loop,
    /// Stop at 1.0 and mark the session finished until restarted.
    Hold,
}

/// Notable outcome of a single clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickEvent {
    /// Nothing beyond ordinary advancement (or the clock is paused).
    None,
    /// Progress crossed into a new phase.
    PhaseChanged {
        /// Phase before the tick.
        from: Phase,
        /// Phase after the tick.
        to: Phase,
    },
    /// Progress reached the end and wrapped to the start.
    Looped,
    /// Progress reached the end and playback stopped.
    Finished,
}

/// Advances the playhead once per frame while playing.
///
/// The clock is the timeline's only per-frame writer; scrubs arrive through
/// [`TimelineState::set_progress`] between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressClock {
    /// Progress units advanced per second of frame time.
    pub rate: f32,
    /// Behavior at the end of the sequence.
    pub end_behavior: EndBehavior,
}

impl Default for ProgressClock {
    fn default() -> Self {
        Self::new(ProgressClock::DEFAULT_RATE, EndBehavior::Loop)
    }
}

impl ProgressClock {
    /// Default autoplay rate: the full sequence takes 125 seconds.
    pub const DEFAULT_RATE: f32 = 0.008;

    /// Clock with the given rate and end behavior. Negative or non-finite
    /// rates are treated as zero.
    #[must_use]
    pub fn new(rate: f32, end_behavior: EndBehavior) -> Self {
        let rate = if rate.is_finite() { rate.max(0.0) } else { 0.0 };
        Self { rate, end_behavior }
    }

    /// Seconds of autoplay needed to traverse the whole sequence.
    #[must_use]
    pub fn sequence_duration(&self) -> Option<f32> {
        (self.rate > 0.0).then(|| 1.0 / self.rate)
    }

    /// Advance `state` by `dt` seconds if it is playing.
    ///
    /// Non-positive or non-finite `dt` leaves the state untouched.
    pub fn tick(&self, state: &mut TimelineState, dt: f32) -> TickEvent {
        if !state.is_playing() || !dt.is_finite() || dt <= 0.0 {
            return TickEvent::None;
        }

        let before = state.phase();
        let next = state.progress() + dt * self.rate;

        if next >= 1.0 {
            return match self.end_behavior {
                EndBehavior::Loop => {
                    state.store(0.0);
                    log::info!("sequence looped");
                    TickEvent::Looped
                }
                EndBehavior::Hold => {
                    state.finish();
                    log::info!("sequence finished");
                    TickEvent::Finished
                }
            };
        }

        state.store(next);
        let after = state.phase();
        if after == before {
            TickEvent::None
        } else {
            log::info!("phase {before} -> {after} at {next:.3}");
            TickEvent::PhaseChanged {
                from: before,
                to: after,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_rate_times_dt() {
        let clock = ProgressClock::new(0.1, EndBehavior::Loop);
        let mut state = TimelineState::new();
        let event = clock.tick(&mut state, 0.5);
        assert_eq!(event, TickEvent::None);
        assert!((state.progress() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn paused_state_does_not_advance() {
        let clock = ProgressClock::default();
        let mut state = TimelineState::new();
        state.set_progress(0.3);
        state.toggle_play();
        let _ = clock.tick(&mut state, 10.0);
        assert_eq!(state.progress(), 0.3);
    }

    #[test]
    fn wraps_to_exact_zero_in_loop_mode() {
        let clock = ProgressClock::new(1.0, EndBehavior::Loop);
        let mut state = TimelineState::new();
        state.set_progress(0.999);
        let event = clock.tick(&mut state, 0.01);
        assert_eq!(event, TickEvent::Looped);
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.phase(), Phase::Ancestral);
        assert!(state.is_playing());
        assert!(!state.has_finished());
    }

    #[test]
    fn holds_and_finishes_in_hold_mode() {
        let clock = ProgressClock::new(1.0, EndBehavior::Hold);
        let mut state = TimelineState::new();
        state.set_progress(0.999);
        let event = clock.tick(&mut state, 0.01);
        assert_eq!(event, TickEvent::Finished);
        assert_eq!(state.progress(), 1.0);
        assert_eq!(state.phase(), Phase::Genesis);
        assert!(!state.is_playing());
        assert!(state.has_finished());

        // A finished session stays put until something re-arms it.
        assert_eq!(clock.tick(&mut state, 1.0), TickEvent::None);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn reports_phase_changes() {
        let clock = ProgressClock::new(1.0, EndBehavior::Loop);
        let mut state = TimelineState::new();
        state.set_progress(0.19);
        let event = clock.tick(&mut state, 0.02);
        assert_eq!(
            event,
            TickEvent::PhaseChanged {
                from: Phase::Ancestral,
                to: Phase::Collapse,
            }
        );
    }

    #[test]
    fn ignores_degenerate_dt() {
        let clock = ProgressClock::default();
        let mut state = TimelineState::new();
        state.set_progress(0.5);
        assert_eq!(clock.tick(&mut state, -1.0), TickEvent::None);
        assert_eq!(clock.tick(&mut state, f32::NAN), TickEvent::None);
        assert_eq!(state.progress(), 0.5);
    }

    #[test]
    fn default_rate_takes_125_seconds() {
        let clock = ProgressClock::default();
        let duration = clock.sequence_duration().unwrap_or_default();
        assert!((duration - 125.0).abs() < 1e-3);
        assert!(ProgressClock::new(-1.0, EndBehavior::Loop)
            .sequence_duration()
            .is_none());
    }
}
