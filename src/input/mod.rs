//! Keyboard input: bindable actions and their translation into engine
//! commands.
//!
//! Key strings use the `winit::keyboard::KeyCode` debug format (`"Space"`,
//! `"KeyR"`, `"ArrowLeft"`), so a windowed host can forward its key events
//! verbatim to
//! [`GenesisEngine::key_pressed`](crate::engine::GenesisEngine::key_pressed).

/// Bindable actions.
pub mod keyboard;

pub use keyboard::KeyAction;
