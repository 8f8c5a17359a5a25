use std::fmt;

use serde::{Deserialize, Serialize};

/// Arena bounds in pixels. Owned by the presentation layer, which pushes
/// the current window size into the world with [`World::set_arena`](crate::World::set_arena).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Configuration for a [`World`](crate::World).
/// Every field is optional in JSON and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Gravity magnitude in pixels/second². Y grows downward, so positive
    /// gravity pulls bodies toward the bottom of the arena (default: 200).
    pub gravity: f32,
    /// Report arena edges to bodies that leave the arena (default: true).
    pub collide_with_window: bool,
    /// Initial arena bounds (default: 800×600).
    pub arena: Arena,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: 200.0,
            collide_with_window: true,
            arena: Arena::default(),
        }
    }
}

impl WorldConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            "Loaded world config: gravity={}, arena={}x{}, edges={}",
            config.gravity,
            config.arena.width,
            config.arena.height,
            config.collide_with_window
        );
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        let Arena { width, height } = self.arena;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }
        Ok(())
    }
}

/// Errors produced while loading a [`WorldConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The input was not valid JSON for a world config.
    Parse(serde_json::Error),
    /// Gravity must be finite and non-negative.
    InvalidGravity(f32),
    /// Arena dimensions must be finite and positive.
    InvalidArena { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid world config: {e}"),
            ConfigError::InvalidGravity(g) => {
                write!(f, "gravity must be finite and non-negative, got {g}")
            }
            ConfigError::InvalidArena { width, height } => {
                write!(f, "arena must have positive size, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
