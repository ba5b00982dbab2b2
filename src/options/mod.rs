//! Viewer options with TOML preset support.
//!
//! Every scene constant (camera start pose, orbit target, speeds, lights,
//! key bindings) lives here. Options serialize to/from TOML so a viewer
//! preset can override any subset of them.

mod camera;
mod keybindings;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::PlantViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera pose, projection and control parameters.
    pub camera: CameraOptions,
    /// Lights and frame pacing.
    pub scene: SceneOptions,
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
    ///
    /// # Errors
    ///
    /// Returns [`PlantViewError::OptionsParse`] for malformed TOML or a
    /// preset that binds two actions to the same key.
    pub fn from_toml_str(content: &str) -> Result<Self, PlantViewError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| PlantViewError::OptionsParse(e.to_string()))?;
        opts.keybindings.resolve()?;
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PlantViewError::Io`] if the file cannot be read, or
    /// [`PlantViewError::OptionsParse`] if its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, PlantViewError> {
        let content =
            std::fs::read_to_string(path).map_err(PlantViewError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PlantViewError::OptionsParse`] if serialization fails, or
    /// [`PlantViewError::Io`] if the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), PlantViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlantViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PlantViewError::Io)?;
        }
        std::fs::write(path, content).map_err(PlantViewError::Io)
    }
}
