use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PlantViewError;
use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ToggleCameraMode` → `"KeyL"`).
    /// A preset only lists the actions it rebinds; [`resolve`](Self::resolve)
    /// fills in the rest.
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::OrbitUp, "ArrowUp".into()),
            (KeyAction::OrbitDown, "ArrowDown".into()),
            (KeyAction::OrbitLeft, "ArrowLeft".into()),
            (KeyAction::OrbitRight, "ArrowRight".into()),
            (KeyAction::ZoomIn, "KeyR".into()),
            (KeyAction::ZoomOut, "KeyF".into()),
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::ToggleCameraMode, "KeyL".into()),
            (KeyAction::ToggleInvert, "KeyT".into()),
            (KeyAction::PlaceLight, "Space".into()),
            (KeyAction::Exit, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Complete a freshly parsed preset: every action it left out gets its
    /// default key unless the preset gave that key to another action, then
    /// the reverse map is rebuilt.
    ///
    /// # Errors
    ///
    /// Returns [`PlantViewError::OptionsParse`] if the preset binds two
    /// actions to the same key.
    pub fn resolve(&mut self) -> Result<(), PlantViewError> {
        let mut seen: HashMap<&str, KeyAction> = HashMap::new();
        for (action, key) in &self.bindings {
            if let Some(other) = seen.insert(key.as_str(), *action) {
                return Err(PlantViewError::OptionsParse(format!(
                    "key {key} bound to both {other:?} and {action:?}"
                )));
            }
        }

        for (action, key) in Self::default().bindings {
            let taken = self.bindings.values().any(|bound| *bound == key);
            if !taken {
                let _ = self.bindings.entry(action).or_insert(key);
            }
        }
        self.rebuild_reverse_map();
        Ok(())
    }

    /// Rebind an action to a new key string. Any other action bound to
    /// the same key loses its binding.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings
            .retain(|bound, bound_key| *bound == action || *bound_key != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
