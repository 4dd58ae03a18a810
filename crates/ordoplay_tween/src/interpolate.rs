// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot interpolation.
//!
//! An [`InterpolatorFactory`] turns a `(from, to)` pair of snapshots into an
//! [`Interpolator`]: a pure function of eased progress. Factories validate
//! shapes up front, so evaluating an interpolator never fails. Every
//! interpolator must return `from` at `0.0` and `to` at `1.0`.

use crate::error::InterpolationError;
use crate::value::Value;

/// Maps eased progress to an intermediate snapshot
pub trait Interpolator<S> {
    /// Evaluate at eased progress `t` (may leave `[0, 1]` for overshoot curves)
    fn at(&self, t: f64) -> S;
}

impl<S, F> Interpolator<S> for F
where
    F: Fn(f64) -> S,
{
    fn at(&self, t: f64) -> S {
        self(t)
    }
}

/// Builds interpolators between two snapshots
pub trait InterpolatorFactory<S> {
    /// Build an interpolator from `from` to `to`
    fn build(&self, from: &S, to: &S) -> Result<Box<dyn Interpolator<S>>, InterpolationError>;
}

impl<S, F> InterpolatorFactory<S> for F
where
    F: Fn(&S, &S) -> Result<Box<dyn Interpolator<S>>, InterpolationError>,
{
    fn build(&self, from: &S, to: &S) -> Result<Box<dyn Interpolator<S>>, InterpolationError> {
        self(from, to)
    }
}

/// Interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation, exact at both endpoints
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a * (1.0 - t) + b * t
    }

    /// Componentwise color blend
    pub fn lerp_color(a: [f32; 4], b: [f32; 4], t: f64) -> [f32; 4] {
        let t = t as f32;
        [
            a[0] * (1.0 - t) + b[0] * t,
            a[1] * (1.0 - t) + b[1] * t,
            a[2] * (1.0 - t) + b[2] * t,
            a[3] * (1.0 - t) + b[3] * t,
        ]
    }

    /// Hold `from` until progress moves, then switch to `to`
    pub fn immediate<T: Clone>(from: &T, to: &T, t: f64) -> T {
        if t <= 0.0 {
            from.clone()
        } else {
            to.clone()
        }
    }
}

/// Default factory for [`Value`] snapshots
///
/// - numbers and colors blend linearly (non-finite numbers switch immediately)
/// - booleans and text switch as soon as progress leaves zero
/// - lists blend their common prefix; extra target elements are held
/// - records blend shared keys; keys only in the target are held and keys
///   only in the start are dropped
///
/// Any other pairing of variants is a [`InterpolationError::ShapeMismatch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueInterpolatorFactory;

impl InterpolatorFactory<Value> for ValueInterpolatorFactory {
    fn build(&self, from: &Value, to: &Value) -> Result<Box<dyn Interpolator<Value>>, InterpolationError> {
        check_shape(from, to, &mut String::new())?;
        Ok(Box::new(ValueInterpolator {
            from: from.clone(),
            to: to.clone(),
        }))
    }
}

/// Interpolator between two shape-compatible [`Value`]s
#[derive(Debug, Clone)]
pub struct ValueInterpolator {
    from: Value,
    to: Value,
}

impl Interpolator<Value> for ValueInterpolator {
    fn at(&self, t: f64) -> Value {
        blend(&self.from, &self.to, t)
    }
}

fn check_shape(from: &Value, to: &Value, path: &mut String) -> Result<(), InterpolationError> {
    if from == to {
        return Ok(());
    }

    match (from, to) {
        (Value::Number(_), Value::Number(_))
        | (Value::Color(_), Value::Color(_))
        | (Value::Bool(_), Value::Bool(_))
        | (Value::Text(_), Value::Text(_)) => Ok(()),
        (Value::List(a), Value::List(b)) => {
            for (i, (a, b)) in a.iter().zip(b).enumerate() {
                let len = path.len();
                path.push_str(&format!("[{i}]"));
                check_shape(a, b, path)?;
                path.truncate(len);
            }
            Ok(())
        }
        (Value::Record(a), Value::Record(b)) => {
            for (key, b) in b {
                if let Some(a) = a.get(key) {
                    let len = path.len();
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                    check_shape(a, b, path)?;
                    path.truncate(len);
                }
            }
            Ok(())
        }
        _ => Err(InterpolationError::ShapeMismatch {
            path: path.clone(),
            from: from.kind(),
            to: to.kind(),
        }),
    }
}

fn blend(from: &Value, to: &Value, t: f64) -> Value {
    if t == 0.0 {
        return from.clone();
    }
    if t == 1.0 || from == to {
        return to.clone();
    }

    match (from, to) {
        (Value::Number(a), Value::Number(b)) if a.is_finite() && b.is_finite() => {
            Value::Number(Interpolation::lerp(*a, *b, t))
        }
        (Value::Color(a), Value::Color(b)) => Value::Color(Interpolation::lerp_color(*a, *b, t)),
        (Value::List(a), Value::List(b)) => Value::List(
            b.iter()
                .enumerate()
                .map(|(i, b)| match a.get(i) {
                    Some(a) => blend(a, b, t),
                    None => b.clone(),
                })
                .collect(),
        ),
        (Value::Record(a), Value::Record(b)) => Value::Record(
            b.iter()
                .map(|(key, b)| {
                    let value = match a.get(key) {
                        Some(a) => blend(a, b, t),
                        None => b.clone(),
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        // Booleans, text and non-finite numbers
        _ => Interpolation::immediate(from, to, t),
    }
}
