//! Playback controls and command dispatch for [`GenesisEngine`].

use super::command::GenesisCommand;
use super::GenesisEngine;

// ── Commands ──

impl GenesisEngine {
    /// Apply one command to the timeline.
    pub fn execute(&mut self, command: GenesisCommand) {
        match command {
            GenesisCommand::SetProgress { value } => self.set_progress(value),
            GenesisCommand::ScrubBy { delta } => {
                self.set_progress(self.timeline.progress() + delta);
            }
            GenesisCommand::TogglePlay => self.toggle_play(),
            GenesisCommand::SetPlaying { playing } => {
                self.timeline.set_playing(playing);
                log::debug!("playing = {playing}");
            }
            GenesisCommand::Restart => self.restart(),
            GenesisCommand::PrimaryAction => {
                if self.timeline.has_finished() {
                    self.restart();
                } else {
                    self.toggle_play();
                }
            }
        }
    }

    /// Resolve a physical key string through the keybindings and execute
    /// the bound command. Returns the command, or `None` if the key is
    /// unbound.
    pub fn key_pressed(&mut self, key: &str) -> Option<GenesisCommand> {
        let action = self.options.keybindings.lookup(key)?;
        let command = action.to_command(self.options.playback.scrub_step);
        self.execute(command);
        Some(command)
    }
}

// ── Playback ──

impl GenesisEngine {
    /// Scrub to `value`, clamped to `[0, 1]`.
    ///
    /// Playing state is preserved, except that a finished session is
    /// re-armed. The camera is not snapped; it glides to the new target.
    pub fn set_progress(&mut self, value: f32) {
        self.timeline.set_progress(value);
        log::debug!(
            "scrub to {:.3} ({})",
            self.timeline.progress(),
            self.timeline.phase()
        );
    }

    /// Flip between playing and paused.
    pub fn toggle_play(&mut self) {
        self.timeline.toggle_play();
        log::debug!("playing = {}", self.timeline.is_playing());
    }

    /// Back to progress 0, playing.
    pub fn restart(&mut self) {
        self.timeline.restart();
        log::debug!("restart");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::timeline::{EndBehavior, Phase};

    fn small_options() -> Options {
        let mut options = Options::default();
        options.geometry.particle_count = 64;
        options.geometry.galaxy_count = 64;
        options.geometry.spark_count = 16;
        options.geometry.background_count = 16;
        options
    }

    #[test]
    fn scrub_by_is_relative_and_clamped() {
        let mut engine = GenesisEngine::new(small_options());
        engine.execute(GenesisCommand::SetProgress { value: 0.5 });
        engine.execute(GenesisCommand::ScrubBy { delta: 0.1 });
        assert!((engine.progress() - 0.6).abs() < 1e-6);
        engine.execute(GenesisCommand::ScrubBy { delta: -2.0 });
        assert_eq!(engine.progress(), 0.0);
    }

    #[test]
    fn primary_action_toggles_then_restarts_when_finished() {
        let mut options = small_options();
        options.playback.end_behavior = EndBehavior::Hold;
        options.playback.rate = 1.0;
        let mut engine = GenesisEngine::new(options);

        engine.execute(GenesisCommand::PrimaryAction);
        assert!(!engine.is_playing());
        engine.execute(GenesisCommand::PrimaryAction);
        assert!(engine.is_playing());

        let _ = engine.frame(2.0);
        assert!(engine.has_finished());
        engine.execute(GenesisCommand::PrimaryAction);
        assert!(!engine.has_finished());
        assert!(engine.is_playing());
        assert_eq!(engine.progress(), 0.0);
    }

    #[test]
    fn keys_resolve_through_bindings() {
        let mut engine = GenesisEngine::new(small_options());
        assert_eq!(
            engine.key_pressed("Space"),
            Some(GenesisCommand::PrimaryAction)
        );
        assert!(!engine.is_playing());

        let _ = engine.key_pressed("End");
        assert_eq!(engine.phase(), Phase::Genesis);
        let _ = engine.key_pressed("ArrowLeft");
        assert!((engine.progress() - 0.99).abs() < 1e-6);
        let _ = engine.key_pressed("Home");
        assert_eq!(engine.progress(), 0.0);

        assert_eq!(engine.key_pressed("KeyZ"), None);
    }

    #[test]
    fn set_playing_is_idempotent() {
        let mut engine = GenesisEngine::new(small_options());
        engine.execute(GenesisCommand::SetPlaying { playing: true });
        engine.execute(GenesisCommand::SetPlaying { playing: true });
        assert!(engine.is_playing());
        engine.execute(GenesisCommand::SetPlaying { playing: false });
        assert!(!engine.is_playing());
    }
}
