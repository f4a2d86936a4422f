use super::phase::Phase;

/// Coarse playback status, used for button labels and the HUD status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Autoplay is advancing progress.
    Playing,
    /// Progress is frozen; the user is scrubbing or has paused.
    Paused,
    /// The sequence ran to its end and awaits a restart.
    Finished,
}

impl PlaybackStatus {
    /// HUD status line for this state.
    #[must_use]
    pub fn status_line(self) -> &'static str {
        match self {
            Self::Playing => "AUTOMATIC SEQUENCE ENGAGED",
            Self::Paused => "MANUAL OVERRIDE ACTIVE",
            Self::Finished => "SIMULATION COMPLETE. AWAITING INPUT.",
        }
    }

    /// Label of the primary playback button.
    #[must_use]
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Playing => "PAUSE",
            Self::Paused => "PLAY",
            Self::Finished => "RESTART",
        }
    }
}

/// The session's playhead: the single source of truth for where in the
/// sequence we are.
///
/// `progress` is always within `[0, 1]` and `phase` is always the
/// classification of the stored `progress`; both are only written together.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineState {
    progress: f32,
    phase: Phase,
    is_playing: bool,
    has_finished: bool,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineState {
    /// Fresh session: progress 0, ancestral phase, playing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            phase: Phase::Ancestral,
            is_playing: true,
            has_finished: false,
        }
    }

    /// Fresh session that starts paused when `autoplay` is false.
    #[must_use]
    pub fn with_autoplay(autoplay: bool) -> Self {
        Self {
            is_playing: autoplay,
            ..Self::new()
        }
    }

    /// Current playhead in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Phase of the current playhead.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether autoplay is advancing progress.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the sequence ran to its end (hold mode only).
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.has_finished
    }

    /// Playback status derived from the flags.
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        if self.has_finished {
            PlaybackStatus::Finished
        } else if self.is_playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Paused
        }
    }

    /// Scrub to `value`.
    ///
    /// The value is clamped to `[0, 1]` (non-finite input maps to 0). A
    /// finished session is re-armed before the scrub is applied.
    pub fn set_progress(&mut self, value: f32) {
        if self.has_finished {
            self.has_finished = false;
            self.is_playing = true;
        }
        self.store(value);
    }

    /// Flip between playing and paused. Progress is untouched.
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Set the playing flag directly.
    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// Back to the beginning, playing, not finished.
    pub fn restart(&mut self) {
        self.store(0.0);
        self.is_playing = true;
        self.has_finished = false;
    }

    /// Write progress from the clock without re-arming a finished session.
    pub(crate) fn store(&mut self, value: f32) {
        self.progress = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.phase = Phase::of(self.progress);
    }

    /// Mark the sequence as run to completion and stop playback.
    pub(crate) fn finish(&mut self) {
        self.store(1.0);
        self.is_playing = false;
        self.has_finished = true;
    }
}
