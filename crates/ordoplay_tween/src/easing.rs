// SPDX-License-Identifier: MIT OR Apache-2.0
//! Easing catalog.
//!
//! Every curve maps normalized progress `t` in `[0, 1]` to eased progress.
//! Curves start at `0` and end at `1`; `back` and `elastic` overshoot in
//! between. Names follow the `family` + direction scheme (`quadIn`,
//! `bounceOut`, `sinInOut`, ...). The bare family name is an alias for one of
//! its directions, usually `InOut`.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

/// Exponent used by the `poly` family
const POLY_EXPONENT: f64 = 3.0;
/// Overshoot used by the `back` family
const BACK_OVERSHOOT: f64 = 1.70158;
/// Amplitude used by the `elastic` family
const ELASTIC_AMPLITUDE: f64 = 1.0;
/// Period used by the `elastic` family
const ELASTIC_PERIOD: f64 = 0.3;

/// Curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasingFamily {
    /// Identity
    Linear,
    /// Quadratic
    Quad,
    /// Cubic
    Cubic,
    /// Polynomial with exponent 3
    Poly,
    /// Sinusoidal
    Sin,
    /// Exponential
    Exp,
    /// Circular
    Circle,
    /// Elastic band, overshoots
    Elastic,
    /// Anticipatory, overshoots
    Back,
    /// Bouncing ball
    Bounce,
}

impl EasingFamily {
    /// All families in catalog order
    pub const ALL: [EasingFamily; 10] = [
        Self::Linear,
        Self::Cubic,
        Self::Quad,
        Self::Sin,
        Self::Exp,
        Self::Circle,
        Self::Elastic,
        Self::Back,
        Self::Bounce,
        Self::Poly,
    ];

    /// Get the catalog name of the family
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quad => "quad",
            Self::Cubic => "cubic",
            Self::Poly => "poly",
            Self::Sin => "sin",
            Self::Exp => "exp",
            Self::Circle => "circle",
            Self::Elastic => "elastic",
            Self::Back => "back",
            Self::Bounce => "bounce",
        }
    }

    /// Direction the bare family name stands for
    pub fn default_direction(&self) -> EasingDirection {
        match self {
            Self::Elastic | Self::Bounce => EasingDirection::Out,
            _ => EasingDirection::InOut,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.name() == name)
    }
}

/// Curve direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasingDirection {
    /// Accelerate from rest
    In,
    /// Decelerate to rest
    Out,
    /// Accelerate then decelerate
    InOut,
}

impl EasingDirection {
    /// All directions
    pub const ALL: [EasingDirection; 3] = [Self::In, Self::Out, Self::InOut];

    /// Name suffix used in the catalog
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::In => "In",
            Self::Out => "Out",
            Self::InOut => "InOut",
        }
    }
}

/// A resolved catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Easing {
    /// Curve family
    pub family: EasingFamily,
    /// Curve direction
    pub direction: EasingDirection,
}

impl Easing {
    /// Linear easing
    pub const LINEAR: Easing = Easing::new(EasingFamily::Linear, EasingDirection::InOut);

    /// Create an easing from its parts
    pub const fn new(family: EasingFamily, direction: EasingDirection) -> Self {
        Self { family, direction }
    }

    /// Look up a catalog name such as `"cubicOut"` or `"bounce"`
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        let unknown = || ConfigError::UnknownEasing(name.to_string());

        if let Some(family) = EasingFamily::from_name(name) {
            return Ok(Self::new(family, family.default_direction()));
        }

        // Longest suffix first so "InOut" wins over "Out"
        for direction in [EasingDirection::InOut, EasingDirection::In, EasingDirection::Out] {
            if let Some(stem) = name.strip_suffix(direction.suffix()) {
                let family = EasingFamily::from_name(stem).ok_or_else(unknown)?;
                return Ok(Self::new(family, direction));
            }
        }

        Err(unknown())
    }

    /// Every recognized name, bare aliases included
    pub fn catalog_names() -> impl Iterator<Item = String> {
        EasingFamily::ALL.into_iter().flat_map(|family| {
            std::iter::once(family.name().to_string()).chain(
                EasingDirection::ALL
                    .into_iter()
                    .map(move |direction| format!("{}{}", family.name(), direction.suffix())),
            )
        })
    }

    /// Canonical name of this entry
    pub fn name(&self) -> String {
        format!("{}{}", self.family.name(), self.direction.suffix())
    }

    /// Apply the curve to normalized progress
    pub fn apply(&self, t: f64) -> f64 {
        use EasingDirection::{In, InOut, Out};
        use EasingFamily::*;

        match (self.family, self.direction) {
            (Linear, _) => t,

            (Quad, In) => t * t,
            (Quad, Out) => t * (2.0 - t),
            (Quad, InOut) => in_out(t, |t| t * t, |t| (t - 1.0) * (3.0 - t) + 1.0),

            (Cubic, In) => t * t * t,
            (Cubic, Out) => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            (Cubic, InOut) => in_out(t, |t| t * t * t, |t| {
                let t = t - 2.0;
                t * t * t + 2.0
            }),

            (Poly, In) => t.powf(POLY_EXPONENT),
            (Poly, Out) => 1.0 - (1.0 - t).powf(POLY_EXPONENT),
            (Poly, InOut) => in_out(
                t,
                |t| t.powf(POLY_EXPONENT),
                |t| 2.0 - (2.0 - t).powf(POLY_EXPONENT),
            ),

            (Sin, In) => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - (t * FRAC_PI_2).cos()
                }
            }
            (Sin, Out) => (t * FRAC_PI_2).sin(),
            (Sin, InOut) => (1.0 - (PI * t).cos()) / 2.0,

            (Exp, In) => tpmt(1.0 - t),
            (Exp, Out) => 1.0 - tpmt(t),
            (Exp, InOut) => in_out(t, |t| tpmt(1.0 - t), |t| 2.0 - tpmt(t - 1.0)),

            (Circle, In) => 1.0 - (1.0 - t * t).sqrt(),
            (Circle, Out) => {
                let t = t - 1.0;
                (1.0 - t * t).sqrt()
            }
            (Circle, InOut) => in_out(t, |t| 1.0 - (1.0 - t * t).sqrt(), |t| {
                let t = t - 2.0;
                (1.0 - t * t).sqrt() + 1.0
            }),

            (Elastic, In) => elastic_in(t),
            (Elastic, Out) => elastic_out(t),
            (Elastic, InOut) => elastic_in_out(t),

            (Back, In) => t * t * (BACK_OVERSHOOT * (t - 1.0) + t),
            (Back, Out) => {
                let t = t - 1.0;
                t * t * ((t + 1.0) * BACK_OVERSHOOT + t) + 1.0
            }
            (Back, InOut) => {
                let s = BACK_OVERSHOOT;
                in_out(t, |t| t * t * ((s + 1.0) * t - s), |t| {
                    let t = t - 2.0;
                    t * t * ((s + 1.0) * t + s) + 2.0
                })
            }

            (Bounce, In) => 1.0 - bounce_out(1.0 - t),
            (Bounce, Out) => bounce_out(t),
            (Bounce, InOut) => in_out(t, |t| 1.0 - bounce_out(1.0 - t), |t| bounce_out(t - 1.0) + 1.0),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::new(EasingFamily::Quad, EasingDirection::InOut)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family.name(), self.direction.suffix())
    }
}

impl FromStr for Easing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Easing {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<Easing> for String {
    fn from(easing: Easing) -> Self {
        easing.name()
    }
}

/// Split an in-out curve at the midpoint. Both halves receive `2t`.
fn in_out(t: f64, first: impl Fn(f64) -> f64, second: impl Fn(f64) -> f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        first(t) / 2.0
    } else {
        second(t) / 2.0
    }
}

/// `2^(-10x)` rescaled so that `tpmt(0) == 1` and `tpmt(1) == 0`
fn tpmt(x: f64) -> f64 {
    (2f64.powf(-10.0 * x) - 0.0009765625) * 1.0009775171065494
}

fn elastic_params() -> (f64, f64) {
    let period = ELASTIC_PERIOD / TAU;
    let shift = (1.0 / ELASTIC_AMPLITUDE).asin() * period;
    (shift, period)
}

fn elastic_in(t: f64) -> f64 {
    let (s, p) = elastic_params();
    let t = t - 1.0;
    ELASTIC_AMPLITUDE * tpmt(-t) * ((s - t) / p).sin()
}

fn elastic_out(t: f64) -> f64 {
    let (s, p) = elastic_params();
    1.0 - ELASTIC_AMPLITUDE * tpmt(t) * ((t + s) / p).sin()
}

fn elastic_in_out(t: f64) -> f64 {
    let (s, p) = elastic_params();
    let t = t * 2.0 - 1.0;
    if t < 0.0 {
        ELASTIC_AMPLITUDE * tpmt(-t) * ((s - t) / p).sin() / 2.0
    } else {
        (2.0 - ELASTIC_AMPLITUDE * tpmt(t) * ((s + t) / p).sin()) / 2.0
    }
}

fn bounce_out(t: f64) -> f64 {
    const B1: f64 = 4.0 / 11.0;
    const B2: f64 = 6.0 / 11.0;
    const B3: f64 = 8.0 / 11.0;
    const B4: f64 = 3.0 / 4.0;
    const B5: f64 = 9.0 / 11.0;
    const B6: f64 = 10.0 / 11.0;
    const B7: f64 = 15.0 / 16.0;
    const B8: f64 = 21.0 / 22.0;
    const B9: f64 = 63.0 / 64.0;
    const B0: f64 = 1.0 / B1 / B1;

    if t < B1 {
        B0 * t * t
    } else if t < B3 {
        let t = t - B2;
        B0 * t * t + B4
    } else if t < B6 {
        let t = t - B5;
        B0 * t * t + B7
    } else {
        let t = t - B8;
        B0 * t * t + B9
    }
}
