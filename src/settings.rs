use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationClock;
use crate::render::CanvasSettings;
use crate::shapes::ShapeKind;
use crate::{
    EpicycleApp, DEFAULT_SAMPLE_COUNT, DEFAULT_TRAIL_LENGTH, MAX_SAMPLE_COUNT, MAX_TRAIL_LENGTH,
    MIN_SAMPLE_COUNT, MIN_TRAIL_LENGTH,
};

/// Returns the path to the settings file: `~/.config/fourier-epicycles/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("fourier-epicycles");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Shape
    pub selected_shape: ShapeKind,
    pub sample_count: usize,
    pub recenter: bool,

    // Animation
    /// Number of epicycles drawn (0 = all)
    pub epicycle_limit: usize,
    /// Cycles per second
    pub speed: f64,
    pub trail_length: usize,

    // Display
    pub show_settings: bool,
    pub show_circles: bool,
    pub show_arms: bool,
    pub show_trail: bool,
    pub show_glow: bool,
    pub show_target: bool,
    pub show_grid: bool,
    pub zoom: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        let canvas = CanvasSettings::default();
        Self {
            selected_shape: ShapeKind::Heart,
            sample_count: DEFAULT_SAMPLE_COUNT,
            recenter: true,

            epicycle_limit: 100,
            speed: AnimationClock::default().speed,
            trail_length: DEFAULT_TRAIL_LENGTH,

            show_settings: true,
            show_circles: canvas.show_circles,
            show_arms: canvas.show_arms,
            show_trail: canvas.show_trail,
            show_glow: canvas.show_glow,
            show_target: canvas.show_target,
            show_grid: canvas.show_grid,
            zoom: canvas.zoom,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => log::info!("Saved settings to {}", path.display()),
                Err(e) => log::warn!("Failed to write settings: {}", e),
            },
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &EpicycleApp) -> Self {
        let canvas = &app.canvas.settings;
        Self {
            selected_shape: app.selected_shape,
            sample_count: app.sample_count,
            recenter: app.recenter,

            epicycle_limit: app.epicycle_limit,
            speed: app.clock.speed,
            trail_length: app.trail.capacity(),

            show_settings: app.show_settings,
            show_circles: canvas.show_circles,
            show_arms: canvas.show_arms,
            show_trail: canvas.show_trail,
            show_glow: canvas.show_glow,
            show_target: canvas.show_target,
            show_grid: canvas.show_grid,
            zoom: canvas.zoom,
        }
    }

    /// Apply loaded settings to the running application.
    ///
    /// Out-of-range values from a hand-edited file are clamped. A saved
    /// freehand or SVG selection has no path to go with it after a restart,
    /// so it falls back to the default preset.
    pub fn apply(&self, app: &mut EpicycleApp) {
        app.selected_shape = if ShapeKind::presets().contains(&self.selected_shape) {
            self.selected_shape
        } else {
            AppSettings::default().selected_shape
        };
        app.sample_count = self.sample_count.clamp(MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT);
        app.recenter = self.recenter;

        app.epicycle_limit = self.epicycle_limit;
        app.clock.speed = if self.speed.is_finite() { self.speed } else { AnimationClock::default().speed };
        app.trail.set_capacity(self.trail_length.clamp(MIN_TRAIL_LENGTH, MAX_TRAIL_LENGTH));

        app.show_settings = self.show_settings;
        let canvas = &mut app.canvas.settings;
        canvas.show_circles = self.show_circles;
        canvas.show_arms = self.show_arms;
        canvas.show_trail = self.show_trail;
        canvas.show_glow = self.show_glow;
        canvas.show_target = self.show_target;
        canvas.show_grid = self.show_grid;
        canvas.zoom = self.zoom.clamp(0.1, 4.0);

        app.needs_recompute = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{ "sample_count": 64 }"#).unwrap();
        assert_eq!(settings.sample_count, 64);
        assert_eq!(settings.epicycle_limit, AppSettings::default().epicycle_limit);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = AppSettings {
            selected_shape: ShapeKind::Star,
            speed: -0.25,
            show_grid: true,
            ..AppSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_apply_and_extract() {
        let mut app = EpicycleApp::headless();
        let settings = AppSettings {
            selected_shape: ShapeKind::Freehand,
            sample_count: 5000,
            epicycle_limit: 12,
            trail_length: 300,
            zoom: 1.5,
            ..AppSettings::default()
        };
        settings.apply(&mut app);

        let extracted = AppSettings::from_app(&app);
        assert_eq!(extracted.selected_shape, AppSettings::default().selected_shape);
        assert_eq!(extracted.sample_count, MAX_SAMPLE_COUNT);
        assert_eq!(extracted.epicycle_limit, 12);
        assert_eq!(extracted.trail_length, 300);
        assert_eq!(extracted.zoom, 1.5);
        assert!(app.needs_recompute);
    }

    #[test]
    fn test_oversized_trail_length_is_clamped() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "trail_length": 100000000000000 }"#).unwrap();
        let mut app = EpicycleApp::headless();
        settings.apply(&mut app);
        assert_eq!(app.trail.capacity(), MAX_TRAIL_LENGTH);

        let settings = AppSettings {
            trail_length: 0,
            ..AppSettings::default()
        };
        settings.apply(&mut app);
        assert_eq!(app.trail.capacity(), MIN_TRAIL_LENGTH);
    }
}
