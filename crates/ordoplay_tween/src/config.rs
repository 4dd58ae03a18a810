// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tween timing configuration.
//!
//! Stored as RON, for example:
//!
//! ```ron
//! (duration_ms: 600.0, easing: "bounceOut", delay_ms: 100.0)
//! ```
//!
//! Every field is optional and falls back to its default.

use crate::easing::Easing;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default segment duration in milliseconds
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

/// Timing shared by every segment of a tween queue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Duration of each segment in milliseconds
    pub duration_ms: f64,
    /// Easing curve applied to progress
    pub easing: Easing,
    /// Wait before each segment's first tick, in milliseconds
    pub delay_ms: f64,
}

impl TweenConfig {
    /// Create a validated configuration
    pub fn new(duration_ms: f64, easing: Easing, delay_ms: f64) -> Result<Self, ConfigError> {
        let config = Self {
            duration_ms,
            easing,
            delay_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the duration
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the easing
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the delay
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Check the duration and delay
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(ConfigError::InvalidDuration(self.duration_ms));
        }
        if !(self.delay_ms.is_finite() && self.delay_ms >= 0.0) {
            return Err(ConfigError::InvalidDelay(self.delay_ms));
        }
        Ok(())
    }

    /// Parse and validate a RON string
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: TweenConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            delay_ms: 0.0,
        }
    }
}
