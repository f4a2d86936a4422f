//! Centralized session options with TOML preset support.
//!
//! Playback pacing, camera rig tuning, point-cloud geometry, and keybindings
//! are consolidated here. Options serialize to/from TOML so presets can be
//! stored alongside the binary and loaded with `--preset`.

mod camera;
mod geometry;
mod keybindings;
mod playback;

use std::path::Path;

pub use camera::CameraOptions;
pub use geometry::GeometryOptions;
pub use keybindings::KeybindingOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GenesisError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Timeline pacing and end behavior.
    pub playback: PlaybackOptions,
    /// Camera projection, follow, and shake parameters.
    pub camera: CameraOptions,
    /// Procedural point-cloud sizes and seed.
    pub geometry: GeometryOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GenesisError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| GenesisError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GenesisError> {
        let content =
            std::fs::read_to_string(path).map_err(GenesisError::Io)?;
        let opts = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GenesisError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GenesisError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GenesisError::Io)?;
        }
        std::fs::write(path, content).map_err(GenesisError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
