// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tween queue animation engine for `OrdoPlay`.
//!
//! This crate turns an ordered list of data snapshots into a stream of
//! eased intermediate frames:
//! - Target queue with replace and append semantics
//! - Easing catalog (`linear`, `quad`, `cubic`, `poly`, `sin`, `exp`,
//!   `circle`, `elastic`, `back`, `bounce`)
//! - Pluggable snapshot interpolation
//! - Frame-paced timers with cancellation
//! - Optional portal rendering targets
//!
//! ## Architecture
//!
//! The engine is built on:
//! - [`TweenQueue`], one animation lifeline per instance
//! - [`InterpolatorFactory`], building one interpolator per segment
//! - [`Clock`], read once per host frame
//! - [`TweenConfig`], loaded from RON

pub mod clock;
pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod portal;
pub mod queue;
pub mod value;

pub use clock::{Clock, ManualClock, SystemClock, Timer, TimerId};
pub use config::TweenConfig;
pub use easing::{Easing, EasingDirection, EasingFamily};
pub use engine::{AnimationInfo, TweenData, TweenQueue, TweenState};
pub use error::{ConfigError, InterpolationError, TweenError};
pub use interpolate::{Interpolation, Interpolator, InterpolatorFactory, ValueInterpolatorFactory};
pub use portal::{Portal, PortalHost, PortalKey, PortalRegistry};
pub use queue::TargetQueue;
pub use value::Value;
