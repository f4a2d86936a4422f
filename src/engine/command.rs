//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a UI
//! button, or a programmatic call, is represented as a `GenesisCommand`.
//! Consumers construct commands and pass them to
//! [`GenesisEngine::execute`](super::GenesisEngine::execute).

use serde::{Deserialize, Serialize};

/// A discrete or parameterized operation on the timeline.
///
/// ```ignore
/// engine.execute(GenesisCommand::TogglePlay);
/// engine.execute(GenesisCommand::SetProgress { value: 0.5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "command")]
pub enum GenesisCommand {
    /// Scrub to an absolute progress (clamped to `[0, 1]`).
    SetProgress {
        /// Target progress.
        value: f32,
    },

    /// Scrub relative to the current progress.
    ScrubBy {
        /// Signed progress offset.
        delta: f32,
    },

    /// Flip between playing and paused.
    TogglePlay,

    /// Set the playing flag directly.
    SetPlaying {
        /// Whether autoplay should run.
        playing: bool,
    },

    /// Back to the beginning, playing.
    Restart,

    /// The single on-screen button: restart once the sequence has
    /// finished, otherwise toggle play.
    PrimaryAction,
}
