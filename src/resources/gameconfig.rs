//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 480
//! height = 800
//! target_fps = 60
//!
//! [game]
//! tick_ms = 30
//! wave_size = 10
//! bubble_radius = 60
//! rise_per_tick = 5
//! spawn_margin = 100
//! spawn_depth = 300
//!
//! [storage]
//! prefs_path = ./bubblegame_prefs.ini
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 480;
const DEFAULT_WINDOW_HEIGHT: u32 = 800;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TICK_MS: u32 = 30;
const DEFAULT_WAVE_SIZE: u32 = 10;
const DEFAULT_BUBBLE_RADIUS: f32 = 60.0;
const DEFAULT_RISE_PER_TICK: f32 = 5.0;
const DEFAULT_SPAWN_MARGIN: u32 = 100;
const DEFAULT_SPAWN_DEPTH: u32 = 300;
/// Upper bound for `spawn_margin` and `spawn_depth`, in pixels.
pub const MAX_SPAWN_EXTENT: u32 = 1 << 20;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_PREFS_PATH: &str = "./bubblegame_prefs.ini";

/// Game configuration resource.
///
/// The gameplay values default to the classic rules: waves of 10 bubbles of
/// radius 60 rising 5 units every 30 ms.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Fixed tick interval in milliseconds.
    pub tick_ms: u32,
    /// Bubbles spawned per wave.
    pub wave_size: u32,
    /// Radius of every bubble.
    pub bubble_radius: f32,
    /// Upward distance travelled by a bubble on each tick.
    pub rise_per_tick: f32,
    /// Horizontal distance kept free on both sides when spawning.
    pub spawn_margin: u32,
    /// Spawned bubbles start between the bottom edge and this far below it.
    pub spawn_depth: u32,
    /// Path of the score store file.
    pub prefs_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            tick_ms: DEFAULT_TICK_MS,
            wave_size: DEFAULT_WAVE_SIZE,
            bubble_radius: DEFAULT_BUBBLE_RADIUS,
            rise_per_tick: DEFAULT_RISE_PER_TICK,
            spawn_margin: DEFAULT_SPAWN_MARGIN,
            spawn_depth: DEFAULT_SPAWN_DEPTH,
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [game] section
        if let Some(tick_ms) = config.getuint("game", "tick_ms").ok().flatten() {
            if tick_ms == 0 {
                warn!("tick_ms = 0 would stop the game, keeping {}ms", self.tick_ms);
            } else {
                self.tick_ms = u32::try_from(tick_ms).unwrap_or(u32::MAX);
            }
        }
        if let Some(wave_size) = config.getuint("game", "wave_size").ok().flatten() {
            self.wave_size = wave_size as u32;
        }
        if let Some(radius) = config.getfloat("game", "bubble_radius").ok().flatten() {
            self.bubble_radius = radius as f32;
        }
        if let Some(rise) = config.getfloat("game", "rise_per_tick").ok().flatten() {
            self.rise_per_tick = rise as f32;
        }
        if let Some(margin) = config.getuint("game", "spawn_margin").ok().flatten() {
            self.spawn_margin = clamp_extent("spawn_margin", margin);
        }
        if let Some(depth) = config.getuint("game", "spawn_depth").ok().flatten() {
            self.spawn_depth = clamp_extent("spawn_depth", depth);
        }

        // [storage] section
        if let Some(prefs_path) = config.get("storage", "prefs_path") {
            self.prefs_path = PathBuf::from(prefs_path);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, tick={}ms, wave={}x r{}, rise={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.tick_ms,
            self.wave_size,
            self.bubble_radius,
            self.rise_per_tick
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [game] section
        config.set("game", "tick_ms", Some(self.tick_ms.to_string()));
        config.set("game", "wave_size", Some(self.wave_size.to_string()));
        config.set("game", "bubble_radius", Some(self.bubble_radius.to_string()));
        config.set("game", "rise_per_tick", Some(self.rise_per_tick.to_string()));
        config.set("game", "spawn_margin", Some(self.spawn_margin.to_string()));
        config.set("game", "spawn_depth", Some(self.spawn_depth.to_string()));

        // [storage] section
        config.set(
            "storage",
            "prefs_path",
            Some(self.prefs_path.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Tick interval in seconds.
    pub fn tick_interval(&self) -> f32 {
        self.tick_ms as f32 / 1000.0
    }

    /// `spawn_margin` in signed pixels, saturating.
    pub fn spawn_margin_px(&self) -> i32 {
        i32::try_from(self.spawn_margin).unwrap_or(i32::MAX)
    }

    /// `spawn_depth` in signed pixels, saturating.
    pub fn spawn_depth_px(&self) -> i32 {
        i32::try_from(self.spawn_depth).unwrap_or(i32::MAX)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

fn clamp_extent(key: &str, value: u64) -> u32 {
    if value > MAX_SPAWN_EXTENT as u64 {
        warn!("{} = {} is too large, using {}", key, value, MAX_SPAWN_EXTENT);
        MAX_SPAWN_EXTENT
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bubblepop_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults_match_classic_rules() {
        let config = GameConfig::new();
        assert_eq!(config.tick_ms, 30);
        assert_eq!(config.wave_size, 10);
        assert_eq!(config.bubble_radius, 60.0);
        assert_eq!(config.rise_per_tick, 5.0);
        assert_eq!(config.spawn_margin, 100);
        assert_eq!(config.spawn_depth, 300);
        assert!((config.tick_interval() - 0.03).abs() < 1e-6);
        assert_eq!(config.window_size(), (480, 800));
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_path("does_not_exist"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.wave_size, 10);
    }

    #[test]
    fn test_load_partial_file_overrides_only_present_values() {
        let path = temp_path("partial");
        std::fs::write(
            &path,
            "[game]\nwave_size = 4\nrise_per_tick = 2.5\n\n[storage]\nprefs_path = /tmp/prefs.ini\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.wave_size, 4);
        assert_eq!(config.rise_per_tick, 2.5);
        assert_eq!(config.prefs_path, PathBuf::from("/tmp/prefs.ini"));
        assert_eq!(config.tick_ms, 30);
        assert_eq!(config.window_width, 480);
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let path = temp_path("saved");
        let mut config = GameConfig::with_path(&path);
        config.tick_ms = 16;
        config.spawn_depth = 120;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.tick_ms, 16);
        assert_eq!(loaded.spawn_depth, 120);
    }

    #[test]
    fn test_load_rejects_zero_tick_and_clamps_spawn_extents() {
        let path = temp_path("out_of_range");
        std::fs::write(
            &path,
            "[game]\ntick_ms = 0\nspawn_margin = 3000000000\nspawn_depth = 5000000000\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.tick_ms, 30);
        assert!(config.tick_interval() > 0.0);
        assert_eq!(config.spawn_margin, MAX_SPAWN_EXTENT);
        assert_eq!(config.spawn_depth, MAX_SPAWN_EXTENT);
    }
}
