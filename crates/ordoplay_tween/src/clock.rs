// SPDX-License-Identifier: MIT OR Apache-2.0
//! Clocks and timers that pace the tween engine.
//!
//! Time is measured in milliseconds as `f64`. The engine never sleeps: the
//! host calls [`TweenQueue::frame`](crate::TweenQueue::frame) once per frame
//! and the engine reads its [`Clock`] to work out how far the active
//! [`Timer`] has run.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;
use uuid::Uuid;

/// Source of the current time
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now(&self) -> f64;
}

/// Wall clock measured from its creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock starting at zero now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually advanced clock
///
/// Clones share the same time, so a host can keep one handle and give
/// another to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current time
    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    /// Move the clock forward
    pub fn advance(&self, delta: f64) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Unique identifier for a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub Uuid);

impl TimerId {
    /// Create a new random timer ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimerId {
    fn default() -> Self {
        Self::new()
    }
}

/// A single run of ticks
///
/// Ticks report the time elapsed since the timer's origin, which is its start
/// time plus the delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    /// Unique timer ID
    pub id: TimerId,
    /// Time of the first tick
    origin: f64,
}

impl Timer {
    /// Start a timer at `now` that first ticks after `delay`
    pub fn start(now: f64, delay: f64) -> Self {
        Self {
            id: TimerId::new(),
            origin: now + delay,
        }
    }

    /// Elapsed time at `now`, or `None` while still delayed
    pub fn elapsed(&self, now: f64) -> Option<f64> {
        (now >= self.origin).then_some(now - self.origin)
    }
}
