// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene files describing a tween sequence to play.

use ordoplay_tween::{ConfigError, TweenConfig, Value};
use serde::Deserialize;
use std::path::Path;

/// Scene played when no file is given
pub const DEFAULT_SCENE: &str = include_str!("../assets/bounce.ron");

fn default_frame_ms() -> u64 {
    16
}

/// A tween sequence loaded from RON
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Timing shared by every segment
    #[serde(default)]
    pub config: TweenConfig,
    /// Snapshot displayed before the first segment
    pub initial: Value,
    /// Snapshots animated through, in order
    pub targets: Vec<Value>,
    /// Host frame interval in milliseconds
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

impl Scene {
    /// Parse and validate a RON string
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let scene: Scene = ron::from_str(source)?;
        scene.config.validate()?;
        if scene.targets.is_empty() {
            return Err(ConfigError::EmptyData);
        }
        Ok(scene)
    }

    /// Load and validate a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }
}
