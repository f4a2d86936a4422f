use serde::{Deserialize, Serialize};

use crate::engine::command::GenesisCommand;

/// Session-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_play = "Space"
/// scrub_forward = "ArrowRight"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// The primary button: play/pause, or restart once finished.
    TogglePlay,
    /// Rewind to the start and play.
    Restart,
    /// Step the playhead back by one scrub step.
    ScrubBackward,
    /// Step the playhead forward by one scrub step.
    ScrubForward,
    /// Jump to progress 0.
    JumpToStart,
    /// Jump to progress 1.
    JumpToEnd,
}

impl KeyAction {
    /// Every bindable action.
    pub const ALL: [Self; 6] = [
        Self::TogglePlay,
        Self::Restart,
        Self::ScrubBackward,
        Self::ScrubForward,
        Self::JumpToStart,
        Self::JumpToEnd,
    ];

    /// Command issued by this action. `scrub_step` sizes the scrub actions.
    #[must_use]
    pub fn to_command(self, scrub_step: f32) -> GenesisCommand {
        match self {
            Self::TogglePlay => GenesisCommand::PrimaryAction,
            Self::Restart => GenesisCommand::Restart,
            Self::ScrubBackward => GenesisCommand::ScrubBy {
                delta: -scrub_step,
            },
            Self::ScrubForward => GenesisCommand::ScrubBy { delta: scrub_step },
            Self::JumpToStart => GenesisCommand::SetProgress { value: 0.0 },
            Self::JumpToEnd => GenesisCommand::SetProgress { value: 1.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_actions_carry_signed_step() {
        assert_eq!(
            KeyAction::ScrubBackward.to_command(0.05),
            GenesisCommand::ScrubBy { delta: -0.05 }
        );
        assert_eq!(
            KeyAction::ScrubForward.to_command(0.05),
            GenesisCommand::ScrubBy { delta: 0.05 }
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&KeyAction::JumpToEnd).unwrap();
        assert_eq!(json, "\"jump_to_end\"");
    }
}
