// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for the tween engine.

/// Invalid configuration or input data
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Easing name is not in the catalog
    #[error("Unknown easing: {0:?}")]
    UnknownEasing(String),

    /// Duration must be finite and greater than zero
    #[error("Invalid duration: {0}ms (must be > 0)")]
    InvalidDuration(f64),

    /// Delay must be finite and non-negative
    #[error("Invalid delay: {0}ms (must be >= 0)")]
    InvalidDelay(f64),

    /// A snapshot sequence was empty
    #[error("Snapshot sequence is empty")]
    EmptyData,

    /// RON parse error
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// I/O error while loading a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Two snapshots could not be interpolated
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InterpolationError {
    /// The snapshots have incompatible shapes at `path`
    #[error("Shape mismatch at `{path}`: cannot interpolate {from} into {to}")]
    ShapeMismatch {
        /// Dotted path of the offending field (empty for the root)
        path: String,
        /// Kind of the start value
        from: &'static str,
        /// Kind of the target value
        to: &'static str,
    },

    /// Custom error raised by a user interpolator factory
    #[error("{0}")]
    Custom(String),
}

/// Error returned by tween engine operations
#[derive(Debug, thiserror::Error)]
pub enum TweenError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Interpolation error
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}
