// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tween queue engine.
//!
//! A [`TweenQueue`] owns one displayed snapshot and a FIFO of targets. Each
//! target becomes one eased segment: the engine interpolates from whatever is
//! displayed toward the queue head, publishes a frame per tick, and moves on
//! to the next target when the segment completes. Once the queue is empty the
//! engine settles and fires its settle callback.
//!
//! ## States
//!
//! - `Idle`: no timer running
//! - `Animating`: a timer is running toward the queue head
//!
//! The engine never sleeps. Hosts drive it with [`TweenQueue::frame`] (reads
//! the engine's clock) or [`TweenQueue::tick`] (external timer delivery).

use crate::clock::{Clock, SystemClock, Timer, TimerId};
use crate::config::TweenConfig;
use crate::error::{ConfigError, TweenError};
use crate::interpolate::{Interpolator, InterpolatorFactory, ValueInterpolatorFactory};
use crate::queue::TargetQueue;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Progress metadata published with every frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationInfo {
    /// Raw (uneased) segment progress in `[0, 1]`
    pub progress: f64,
    /// True while `progress < 1` and a segment is running
    pub animating: bool,
}

impl AnimationInfo {
    /// Info for a segment that has just completed
    pub const SETTLED: AnimationInfo = AnimationInfo {
        progress: 1.0,
        animating: false,
    };

    /// Info for a running segment
    pub fn running(progress: f64) -> Self {
        Self {
            progress,
            animating: true,
        }
    }
}

/// Engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenState {
    /// No timer running
    #[default]
    Idle,
    /// A segment is running
    Animating,
}

/// Snapshot data supplied to the engine
#[derive(Debug, Clone, PartialEq)]
pub enum TweenData<S> {
    /// One snapshot. Replaces every pending target.
    Single(S),
    /// Ordered snapshots. Appended behind pending targets.
    Sequence(Vec<S>),
}

impl<S> TweenData<S> {
    /// Wrap a single snapshot
    pub fn single(snapshot: S) -> Self {
        Self::Single(snapshot)
    }

    /// Wrap an ordered sequence of snapshots
    pub fn sequence(snapshots: impl IntoIterator<Item = S>) -> Self {
        Self::Sequence(snapshots.into_iter().collect())
    }

    /// Reject empty sequences
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Sequence(snapshots) if snapshots.is_empty() => Err(ConfigError::EmptyData),
            _ => Ok(()),
        }
    }
}

impl<S> From<Vec<S>> for TweenData<S> {
    fn from(snapshots: Vec<S>) -> Self {
        Self::Sequence(snapshots)
    }
}

/// Callback fired when the queue is exhausted
pub type SettleCallback = Box<dyn FnMut()>;

/// Rendering consumer receiving every published frame
pub type RenderCallback<S> = Box<dyn FnMut(&S, AnimationInfo)>;

/// The running segment
struct ActiveTween<S> {
    interpolator: Box<dyn Interpolator<S>>,
    timer: Timer,
}

/// Drives eased transitions through a queue of snapshots
pub struct TweenQueue<S, C = SystemClock> {
    /// Displayed snapshot
    data: S,
    /// Progress of the current or last segment
    info: AnimationInfo,
    /// Pending targets; the head is the active target while animating
    queue: TargetQueue<S>,
    /// Timing configuration
    config: TweenConfig,
    /// Builds one interpolator per segment
    factory: Box<dyn InterpolatorFactory<S>>,
    /// Time source for timers
    clock: C,
    /// Running segment, if any
    active: Option<ActiveTween<S>>,
    /// Whether a segment has started since the last settle
    traversed: bool,
    /// Set once by dispose
    disposed: bool,
    on_settle: Option<SettleCallback>,
    renderer: Option<RenderCallback<S>>,
}

impl TweenQueue<Value, SystemClock> {
    /// Create an engine for [`Value`] snapshots on the system clock
    pub fn values(data: TweenData<Value>, config: TweenConfig) -> Result<Self, TweenError> {
        Self::new(data, config, ValueInterpolatorFactory, SystemClock::new())
    }
}

impl<S, C: Clock> TweenQueue<S, C> {
    /// Create an idle engine
    ///
    /// A single snapshot is displayed with nothing queued. A sequence displays
    /// its first element and queues the rest. Nothing runs until
    /// [`activate`](Self::activate) or [`reconfigure`](Self::reconfigure).
    pub fn new(
        data: TweenData<S>,
        config: TweenConfig,
        factory: impl InterpolatorFactory<S> + 'static,
        clock: C,
    ) -> Result<Self, TweenError> {
        config.validate()?;

        let (data, queue) = match data {
            TweenData::Single(snapshot) => (snapshot, TargetQueue::new()),
            TweenData::Sequence(snapshots) => {
                let mut snapshots = snapshots.into_iter();
                let first = snapshots.next().ok_or(ConfigError::EmptyData)?;
                (first, snapshots.collect())
            }
        };

        Ok(Self {
            data,
            info: AnimationInfo::default(),
            queue,
            config,
            factory: Box::new(factory),
            clock,
            active: None,
            traversed: false,
            disposed: false,
            on_settle: None,
            renderer: None,
        })
    }

    /// Set the settle callback
    pub fn with_on_settle(mut self, on_settle: impl FnMut() + 'static) -> Self {
        self.on_settle = Some(Box::new(on_settle));
        self
    }

    /// Set the rendering consumer
    pub fn with_renderer(mut self, renderer: impl FnMut(&S, AnimationInfo) + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Publish the initial frame and start traversal if targets are queued
    ///
    /// With nothing queued this is a no-op and the settle callback does not
    /// fire.
    pub fn activate(&mut self) -> Result<(), TweenError> {
        if self.disposed || self.active.is_some() {
            return Ok(());
        }

        self.publish();

        if self.queue.is_empty() {
            tracing::debug!("Activated tween queue with nothing pending");
            return Ok(());
        }
        self.traverse()
    }

    /// Supply new target data
    ///
    /// Cancels the running segment, then either replaces the queue with a
    /// single snapshot or appends a sequence, and resumes from the displayed
    /// snapshot. An empty sequence is rejected before anything changes.
    pub fn reconfigure(&mut self, data: TweenData<S>) -> Result<(), TweenError> {
        data.validate()?;

        if self.disposed {
            tracing::debug!("Ignoring reconfigure on disposed tween queue");
            return Ok(());
        }

        self.stop_timer();

        match data {
            TweenData::Single(target) => self.queue.replace_all(target),
            TweenData::Sequence(targets) => self.queue.append(targets),
        }

        tracing::debug!(pending = self.queue.len(), "Reconfigured tween queue");
        self.traverse()
    }

    /// Replace the timing configuration
    ///
    /// Duration and easing apply from the next tick, delay from the next
    /// segment.
    pub fn set_config(&mut self, config: TweenConfig) -> Result<(), TweenError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Advance the running segment using the engine's clock
    ///
    /// Does nothing while idle or while the segment's delay has not passed.
    pub fn frame(&mut self) -> Result<(), TweenError> {
        let Some(active) = &self.active else {
            return Ok(());
        };

        match active.timer.elapsed(self.clock.now()) {
            Some(elapsed) => {
                let id = active.timer.id;
                self.tick(id, elapsed)
            }
            None => Ok(()),
        }
    }

    /// Deliver a tick of `elapsed` milliseconds from `timer`
    ///
    /// Ticks from any timer other than the running one are ignored, so
    /// late ticks after a reconfigure or dispose are harmless.
    pub fn tick(&mut self, timer: TimerId, elapsed: f64) -> Result<(), TweenError> {
        let Some(active) = self.active.as_ref().filter(|a| a.timer.id == timer) else {
            tracing::debug!(?timer, "Ignoring tick from inactive timer");
            return Ok(());
        };

        let step = elapsed.max(0.0) / self.config.duration_ms;
        tracing::trace!(?timer, elapsed, step, "Tween tick");

        if step >= 1.0 {
            // Land exactly on the target, never on an eased near-miss
            self.data = active.interpolator.at(1.0);
            self.info = AnimationInfo::SETTLED;
            self.publish();

            self.stop_timer();
            self.queue.pop();
            return self.traverse();
        }

        self.data = active.interpolator.at(self.config.easing.apply(step));
        self.info = AnimationInfo::running(step);
        self.publish();
        Ok(())
    }

    /// Stop the running timer and ignore all further input
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.stop_timer();
        tracing::debug!("Disposed tween queue");
    }

    /// Displayed snapshot
    pub fn data(&self) -> &S {
        &self.data
    }

    /// Progress of the current or last segment
    pub fn animation_info(&self) -> AnimationInfo {
        self.info
    }

    /// Current state
    pub fn state(&self) -> TweenState {
        if self.active.is_some() {
            TweenState::Animating
        } else {
            TweenState::Idle
        }
    }

    /// Check if a segment is running
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Check if the engine has been disposed
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Targets not yet reached, including the one being animated toward
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Target of the running segment
    pub fn target(&self) -> Option<&S> {
        self.active.as_ref().and(self.queue.peek())
    }

    /// ID of the running timer
    pub fn active_timer(&self) -> Option<TimerId> {
        self.active.as_ref().map(|active| active.timer.id)
    }

    /// Timing configuration
    pub fn config(&self) -> &TweenConfig {
        &self.config
    }

    /// Start a segment toward the queue head, or settle if the queue is empty
    fn traverse(&mut self) -> Result<(), TweenError> {
        let Some(target) = self.queue.peek() else {
            self.settle();
            return Ok(());
        };

        let interpolator = match self.factory.build(&self.data, target) {
            Ok(interpolator) => interpolator,
            Err(err) => {
                tracing::warn!("Dropping tween target: {err}");
                self.queue.pop();
                return Err(err.into());
            }
        };

        let timer = Timer::start(self.clock.now(), self.config.delay_ms);
        tracing::debug!(timer = ?timer.id, pending = self.queue.len(), "Starting tween segment");

        self.active = Some(ActiveTween { interpolator, timer });
        self.traversed = true;
        self.info = AnimationInfo::running(0.0);
        self.publish();
        Ok(())
    }

    fn settle(&mut self) {
        if !std::mem::take(&mut self.traversed) {
            return;
        }
        tracing::debug!("Tween queue settled");
        if let Some(on_settle) = self.on_settle.as_mut() {
            on_settle();
        }
    }

    fn stop_timer(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::trace!(timer = ?active.timer.id, "Stopped tween timer");
        }
    }

    fn publish(&mut self) {
        if let Some(render) = self.renderer.as_mut() {
            render(&self.data, self.info);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::easing::Easing;
    use crate::error::InterpolationError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Frames = Rc<RefCell<Vec<(Value, AnimationInfo)>>>;

    struct Harness {
        engine: TweenQueue<Value, ManualClock>,
        clock: ManualClock,
        frames: Frames,
        settled: Rc<Cell<u32>>,
    }

    impl Harness {
        fn new(data: TweenData<Value>, config: TweenConfig) -> Self {
            let clock = ManualClock::new();
            let frames: Frames = Rc::default();
            let settled = Rc::new(Cell::new(0));

            let engine = TweenQueue::new(data, config, ValueInterpolatorFactory, clock.clone())
                .unwrap()
                .with_renderer({
                    let frames = frames.clone();
                    move |data: &Value, info| frames.borrow_mut().push((data.clone(), info))
                })
                .with_on_settle({
                    let settled = settled.clone();
                    move || settled.set(settled.get() + 1)
                });

            Self {
                engine,
                clock,
                frames,
                settled,
            }
        }

        fn at(&mut self, now: f64) {
            self.clock.set(now);
            self.engine.frame().unwrap();
        }

        fn last_frame(&self) -> (Value, AnimationInfo) {
            self.frames.borrow().last().cloned().unwrap()
        }

        fn frame_count(&self) -> usize {
            self.frames.borrow().len()
        }
    }

    fn x(v: f64) -> Value {
        Value::record([("x", v)])
    }

    fn linear() -> TweenConfig {
        TweenConfig::default().with_easing(Easing::LINEAR)
    }

    #[test]
    fn test_two_segment_walkthrough() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine.activate().unwrap();
        h.engine
            .reconfigure(TweenData::sequence([x(10.0), x(20.0)]))
            .unwrap();
        assert_eq!(h.engine.state(), TweenState::Animating);

        h.at(500.0);
        assert_eq!(h.last_frame(), (x(5.0), AnimationInfo::running(0.5)));

        h.at(1000.0);
        let frames = h.frames.borrow().clone();
        let n = frames.len();
        assert_eq!(frames[n - 2], (x(10.0), AnimationInfo::SETTLED));
        // Next segment starts immediately from the reached target
        assert_eq!(frames[n - 1], (x(10.0), AnimationInfo::running(0.0)));
        assert_eq!(h.engine.target(), Some(&x(20.0)));
        assert_eq!(h.settled.get(), 0);

        h.at(1500.0);
        assert_eq!(h.last_frame(), (x(15.0), AnimationInfo::running(0.5)));

        h.at(2000.0);
        assert_eq!(h.last_frame(), (x(20.0), AnimationInfo::SETTLED));
        assert_eq!(h.settled.get(), 1);
        assert_eq!(h.engine.state(), TweenState::Idle);
        assert_eq!(h.engine.pending(), 0);
    }

    #[test]
    fn test_mount_with_single_snapshot_never_settles() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine.activate().unwrap();
        assert_eq!(h.engine.state(), TweenState::Idle);
        assert_eq!(h.engine.animation_info(), AnimationInfo::default());
        h.engine.dispose();
        h.at(5000.0);
        assert_eq!(h.settled.get(), 0);
    }

    #[test]
    fn test_mount_with_one_element_sequence_never_settles() {
        let mut h = Harness::new(TweenData::sequence([x(3.0)]), linear());
        h.engine.activate().unwrap();
        h.at(5000.0);
        assert_eq!(h.engine.state(), TweenState::Idle);
        assert_eq!(h.engine.data(), &x(3.0));
        assert_eq!(h.settled.get(), 0);
    }

    #[test]
    fn test_mount_with_sequence_runs_to_completion() {
        let mut h = Harness::new(TweenData::sequence([x(0.0), x(1.0), x(2.0)]), linear());
        assert_eq!(h.engine.state(), TweenState::Idle);
        assert_eq!(h.engine.pending(), 2);

        h.engine.activate().unwrap();
        assert_eq!(h.engine.state(), TweenState::Animating);

        for now in [250.0, 1000.0, 1600.0, 2000.0, 2500.0] {
            h.at(now);
        }
        assert_eq!(h.settled.get(), 1);
        assert_eq!(h.engine.data(), &x(2.0));
        assert_eq!(h.engine.animation_info(), AnimationInfo::SETTLED);
    }

    #[test]
    fn test_appended_sequence_settles_once_in_order() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine.activate().unwrap();
        h.engine
            .reconfigure(TweenData::sequence([x(1.0), x(2.0), x(3.0)]))
            .unwrap();

        let mut now = 0.0;
        while h.engine.is_animating() {
            now += 100.0;
            h.at(now);
            if h.engine.is_animating() {
                assert_eq!(h.settled.get(), 0);
            }
        }

        let reached: Vec<Value> = h
            .frames
            .borrow()
            .iter()
            .filter(|(_, info)| *info == AnimationInfo::SETTLED)
            .map(|(data, _)| data.clone())
            .collect();
        assert_eq!(reached, [x(1.0), x(2.0), x(3.0)]);
        assert_eq!(h.settled.get(), 1);
    }

    #[test]
    fn test_mid_flight_single_snapshot_retargets() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine.reconfigure(TweenData::single(x(100.0))).unwrap();
        h.at(500.0);
        assert_eq!(h.engine.data(), &x(50.0));
        let stale = h.engine.active_timer().unwrap();

        h.engine.reconfigure(TweenData::single(x(-50.0))).unwrap();
        assert_ne!(h.engine.active_timer(), Some(stale));
        assert_eq!(h.engine.animation_info(), AnimationInfo::running(0.0));
        assert_eq!(h.engine.data(), &x(50.0));

        // A late tick from the superseded timer changes nothing
        let frames_before = h.frame_count();
        h.engine.tick(stale, 900.0).unwrap();
        assert_eq!(h.frame_count(), frames_before);
        assert_eq!(h.engine.data(), &x(50.0));

        h.at(1000.0);
        assert_eq!(h.last_frame(), (x(0.0), AnimationInfo::running(0.5)));
        h.at(1500.0);
        assert_eq!(h.engine.data(), &x(-50.0));
        assert_eq!(h.settled.get(), 1);
    }

    #[test]
    fn test_mid_flight_sequence_keeps_active_target() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine.reconfigure(TweenData::single(x(10.0))).unwrap();
        h.at(500.0);

        h.engine.reconfigure(TweenData::sequence([x(30.0)])).unwrap();
        assert_eq!(h.engine.target(), Some(&x(10.0)));
        assert_eq!(h.engine.pending(), 2);

        h.at(1500.0);
        assert_eq!(h.engine.data(), &x(10.0));
        assert_eq!(h.engine.target(), Some(&x(30.0)));
    }

    #[test]
    fn test_final_frame_is_exact_target() {
        let target = Value::record([("a", 0.1 + 0.2), ("b", 1.0 / 3.0)]);
        let config = TweenConfig::default()
            .with_duration(3.0)
            .with_easing(Easing::from_name("elasticInOut").unwrap());
        let mut h = Harness::new(TweenData::single(Value::record([("a", 7.7), ("b", -2.0)])), config);
        h.engine.reconfigure(TweenData::single(target.clone())).unwrap();

        h.at(3.000_000_000_1);
        assert_eq!(h.engine.data(), &target);
        assert_eq!(h.engine.animation_info(), AnimationInfo::SETTLED);
    }

    #[test]
    fn test_easing_shapes_data_not_progress() {
        let mut h = Harness::new(TweenData::single(x(0.0)), TweenConfig::default());
        h.engine.reconfigure(TweenData::single(x(10.0))).unwrap();
        h.at(250.0);
        // quadInOut(0.25) == 0.125
        assert_eq!(h.last_frame(), (x(1.25), AnimationInfo::running(0.25)));
    }

    #[test]
    fn test_delay_applies_to_each_segment() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear().with_delay(200.0));
        h.engine
            .reconfigure(TweenData::sequence([x(10.0), x(20.0)]))
            .unwrap();
        let started = h.frame_count();

        h.at(100.0);
        assert_eq!(h.frame_count(), started);

        h.at(700.0);
        assert_eq!(h.last_frame(), (x(5.0), AnimationInfo::running(0.5)));

        h.at(1200.0);
        assert_eq!(h.engine.target(), Some(&x(20.0)));
        let started = h.frame_count();
        h.at(1300.0);
        assert_eq!(h.frame_count(), started);
        h.at(1900.0);
        assert_eq!(h.last_frame(), (x(15.0), AnimationInfo::running(0.5)));
    }

    #[test]
    fn test_dispose_is_idempotent_and_final() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine.reconfigure(TweenData::single(x(10.0))).unwrap();
        let timer = h.engine.active_timer().unwrap();

        h.engine.dispose();
        h.engine.dispose();
        assert!(h.engine.is_disposed());
        assert_eq!(h.engine.state(), TweenState::Idle);

        let frames = h.frame_count();
        h.engine.tick(timer, 500.0).unwrap();
        h.at(2000.0);
        h.engine.reconfigure(TweenData::single(x(99.0))).unwrap();
        h.engine.activate().unwrap();
        assert_eq!(h.frame_count(), frames);
        assert_eq!(h.settled.get(), 0);
    }

    #[test]
    fn test_empty_sequence_is_rejected_without_side_effects() {
        assert!(matches!(
            TweenQueue::values(TweenData::Sequence(Vec::new()), TweenConfig::default()),
            Err(TweenError::Configuration(ConfigError::EmptyData))
        ));

        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine.reconfigure(TweenData::single(x(10.0))).unwrap();
        let timer = h.engine.active_timer();

        let result = h.engine.reconfigure(TweenData::Sequence(Vec::new()));
        assert!(matches!(result, Err(TweenError::Configuration(ConfigError::EmptyData))));
        assert_eq!(h.engine.active_timer(), timer);
        assert_eq!(h.engine.pending(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = TweenQueue::values(TweenData::single(x(0.0)), linear().with_duration(0.0));
        assert!(matches!(
            result,
            Err(TweenError::Configuration(ConfigError::InvalidDuration(_)))
        ));

        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        assert!(h.engine.set_config(linear().with_delay(-1.0)).is_err());
        assert_eq!(h.engine.config(), &linear());
    }

    #[test]
    fn test_set_config_changes_duration_mid_flight() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine.reconfigure(TweenData::single(x(10.0))).unwrap();
        h.engine.set_config(linear().with_duration(500.0)).unwrap();
        h.at(250.0);
        assert_eq!(h.last_frame(), (x(5.0), AnimationInfo::running(0.5)));
    }

    #[test]
    fn test_shape_mismatch_surfaces_and_keeps_state() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        let result = h.engine.reconfigure(TweenData::single(Value::Number(5.0)));
        assert!(matches!(
            result,
            Err(TweenError::Interpolation(InterpolationError::ShapeMismatch { .. }))
        ));
        assert_eq!(h.engine.state(), TweenState::Idle);
        assert_eq!(h.engine.data(), &x(0.0));
        assert_eq!(h.engine.pending(), 0);
    }

    #[test]
    fn test_shape_mismatch_mid_queue() {
        let mut h = Harness::new(TweenData::single(x(0.0)), linear());
        h.engine
            .reconfigure(TweenData::sequence([x(10.0), Value::Number(5.0), x(30.0)]))
            .unwrap();

        h.clock.set(1000.0);
        assert!(h.engine.frame().is_err());
        assert_eq!(h.engine.state(), TweenState::Idle);
        assert_eq!(h.engine.data(), &x(10.0));
        assert_eq!(h.engine.animation_info(), AnimationInfo::SETTLED);
        assert_eq!(h.engine.pending(), 1);
        assert_eq!(h.settled.get(), 0);

        h.engine.reconfigure(TweenData::sequence([x(40.0)])).unwrap();
        for now in [2000.0, 3000.0] {
            h.at(now);
        }
        assert_eq!(h.engine.data(), &x(40.0));
        assert_eq!(h.settled.get(), 1);
    }

    #[test]
    fn test_custom_factory_and_snapshot_type() {
        let factory = |from: &f32, to: &f32| -> Result<Box<dyn Interpolator<f32>>, InterpolationError> {
            let (a, b) = (*from, *to);
            Ok(Box::new(move |t: f64| if t >= 1.0 { b } else { a + (b - a) * t as f32 }))
        };
        let clock = ManualClock::new();
        let mut engine = TweenQueue::new(TweenData::sequence([0.0f32, 8.0]), linear(), factory, clock.clone()).unwrap();
        engine.activate().unwrap();

        clock.set(250.0);
        engine.frame().unwrap();
        assert_eq!(*engine.data(), 2.0);

        clock.set(1000.0);
        engine.frame().unwrap();
        assert_eq!(*engine.data(), 8.0);
        assert!(!engine.is_animating());
    }
}
