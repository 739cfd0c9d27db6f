//! Accessibility toggles and the style overrides they imply.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::keys;
use crate::persist;
use crate::storage::{Storage, StorageError};

/// Stored fields are merged over the defaults, so older saves missing a
/// flag still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilitySettings {
    pub colorblind_mode: bool,
    pub high_contrast: bool,
    pub large_text: bool,
    pub keyboard_only: bool,
}

impl AccessibilitySettings {
    /// Style variables a frontend should set for these flags.
    pub fn theme_overrides(&self) -> Vec<(&'static str, &'static str)> {
        let mut vars = Vec::new();
        if self.colorblind_mode {
            vars.push(("--skill-color-fire", "#ff8800"));
            vars.push(("--skill-color-ice", "#0088ff"));
            vars.push(("--skill-color-lightning", "#ffff00"));
        }
        if self.high_contrast {
            vars.push(("--bg-opacity", "0.95"));
            vars.push(("--text-color", "#ffffff"));
        }
        if self.large_text {
            vars.push(("--font-size-base", "18px"));
        }
        vars
    }
}

pub struct AccessibilitySystem<S: Storage> {
    settings: AccessibilitySettings,
    storage: S,
}

impl<S: Storage> AccessibilitySystem<S> {
    pub fn load(storage: S) -> Self {
        let settings = persist::load_or_default(&storage, keys::ACCESSIBILITY);
        Self { settings, storage }
    }

    pub fn settings(&self) -> AccessibilitySettings {
        self.settings
    }

    pub fn set(&mut self, settings: AccessibilitySettings) {
        self.settings = settings;
        self.save();
    }

    pub fn toggle_colorblind_mode(&mut self) -> bool {
        self.settings.colorblind_mode = !self.settings.colorblind_mode;
        self.save();
        self.settings.colorblind_mode
    }

    pub fn toggle_high_contrast(&mut self) -> bool {
        self.settings.high_contrast = !self.settings.high_contrast;
        self.save();
        self.settings.high_contrast
    }

    pub fn toggle_large_text(&mut self) -> bool {
        self.settings.large_text = !self.settings.large_text;
        self.save();
        self.settings.large_text
    }

    pub fn toggle_keyboard_only(&mut self) -> bool {
        self.settings.keyboard_only = !self.settings.keyboard_only;
        self.save();
        self.settings.keyboard_only
    }

    pub fn theme_overrides(&self) -> Vec<(&'static str, &'static str)> {
        self.settings.theme_overrides()
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        persist::write_json(&self.storage, keys::ACCESSIBILITY, &self.settings)
    }

    fn save(&self) {
        info!(settings = ?self.settings, "accessibility settings changed");
        persist::save_or_warn(&self.storage, keys::ACCESSIBILITY, &self.settings);
    }
}
