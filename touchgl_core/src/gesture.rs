// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-to-transform gesture classification.
//!
//! Classification is split in two so it can be tested without a surface:
//!
//! - [`classify_motion`] and [`classify_scale`] are pure functions from a
//!   [`GestureConfig`] and measured input to a [`Gesture`].
//! - [`GestureRecognizer`] owns the only cross-event state (the pinch
//!   detector), runs both classifiers for each [`PointerEvent`] and returns a
//!   [`Recognition`] that is dispatched to a [`GestureSink`] separately.
//!
//! # Rules
//!
//! | Input | Signal |
//! |---|---|
//! | move, one pointer | `Move(vx · 0.02, −vy · 0.02)`, always |
//! | move, several pointers, `\|vx\| > 0.8` or `\|vy\| > 0.8` | `Rotate(vx · 4, vy · 4)` |
//! | move, several pointers, both axes within ±0.8 | nothing |
//! | pinch update with factor `f` | `Scale(clamp(f, 0.1, 5.0))` |
//!
//! Velocities are in pixels per millisecond. The move signal flips the
//! vertical axis to turn screen space (Y down) into world space (Y up).
//!
//! The host never accumulates scale: each report is the per-update ratio,
//! clamped, and accumulation is up to the sink.

use kurbo::Vec2;

use crate::pointer::PointerEvent;
use crate::scale::{ScaleDetector, ScaleDetectorConfig};
use crate::velocity::{VelocityConfig, VelocityTracker};

/// Tuning for gesture classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Multiplier from single-pointer velocity to a move delta.
    pub single_touch_factor: f64,
    /// Multiplier from multi-pointer velocity to a rotation delta.
    pub multi_touch_factor: f64,
    /// Multi-pointer velocities at or below this magnitude on both axes are
    /// dropped.
    pub velocity_limit: f64,
    /// Lower bound for reported scale factors.
    pub min_scale: f64,
    /// Upper bound for reported scale factors. Wins over `min_scale` if the
    /// two are inverted.
    pub max_scale: f64,
    /// Time base for velocities, in milliseconds.
    pub velocity_units_ms: u32,
    /// Per-axis velocity cap passed to the estimator. NaN disables the cap.
    pub max_velocity: f64,
}

impl GestureConfig {
    /// The stock tuning.
    pub const DEFAULT: Self = Self {
        single_touch_factor: 1.0 / 50.0,
        multi_touch_factor: 4.0,
        velocity_limit: 0.8,
        min_scale: 0.1,
        max_scale: 5.0,
        velocity_units_ms: 1,
        max_velocity: f64::MAX,
    };
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A classified gesture signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// No signal for this input.
    None,
    /// Single-pointer pan, in world units (Y up).
    Move(Vec2),
    /// Multi-pointer rotation delta.
    Rotate(Vec2),
    /// Clamped pinch scale factor.
    Scale(f64),
}

impl Gesture {
    /// Returns `true` for [`Gesture::None`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Sends this signal to `sink`. Returns `false` for [`Gesture::None`].
    pub fn dispatch<S: GestureSink + ?Sized>(self, sink: &mut S) -> bool {
        match self {
            Self::None => return false,
            Self::Move(delta) => sink.on_move(delta),
            Self::Rotate(delta) => sink.on_rotation(delta),
            Self::Scale(factor) => sink.on_scale(factor),
        }
        true
    }
}

/// Receives gesture signals. Implemented by the application.
///
/// Signals arrive on the input thread, which is not the render thread; the
/// implementation decides how its state reaches the next frame.
pub trait GestureSink {
    /// Single-pointer pan delta in world units (Y up).
    fn on_move(&mut self, delta: Vec2);

    /// Clamped per-update pinch scale factor.
    fn on_scale(&mut self, factor: f64);

    /// Multi-pointer rotation delta.
    fn on_rotation(&mut self, delta: Vec2);
}

/// Classifies a move with `pointer_count` pointers and measured `velocity`.
#[must_use]
pub fn classify_motion(config: &GestureConfig, pointer_count: usize, velocity: Vec2) -> Gesture {
    match pointer_count {
        0 => Gesture::None,
        1 => Gesture::Move(Vec2::new(
            velocity.x * config.single_touch_factor,
            -velocity.y * config.single_touch_factor,
        )),
        _ => {
            let limit = config.velocity_limit;
            if velocity.x.abs() > limit || velocity.y.abs() > limit {
                Gesture::Rotate(velocity * config.multi_touch_factor)
            } else {
                Gesture::None
            }
        }
    }
}

/// Classifies a pinch update with the recognizer's raw `factor`.
///
/// Unlike [`f64::clamp`], inverted bounds do not panic: the result is
/// `max_scale`.
#[must_use]
pub fn classify_scale(config: &GestureConfig, factor: f64) -> Gesture {
    Gesture::Scale(factor.max(config.min_scale).min(config.max_scale))
}

/// The signals produced by one event, in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recognition {
    /// Pinch signal; fires before motion, and independently of it.
    pub scale: Gesture,
    /// Move or rotate signal.
    pub motion: Gesture,
}

impl Recognition {
    /// A recognition with no signals.
    pub const NONE: Self = Self {
        scale: Gesture::None,
        motion: Gesture::None,
    };

    /// Iterates the signals that fired, scale first.
    pub fn iter(&self) -> impl Iterator<Item = Gesture> {
        [self.scale, self.motion].into_iter().filter(|g| !g.is_none())
    }

    /// Returns `true` if a pinch update fired, which warrants a redraw.
    #[must_use]
    pub fn wants_redraw(&self) -> bool {
        !self.scale.is_none()
    }

    /// Sends every signal to `sink`, scale first. Returns the number sent.
    pub fn dispatch<S: GestureSink + ?Sized>(self, sink: &mut S) -> usize {
        self.iter().filter(|g| g.dispatch(sink)).count()
    }
}

/// Turns pointer events into gesture signals.
///
/// The pinch detector is the only state that survives between events; a
/// fresh [`VelocityTracker`] is created and dropped for every move.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    velocity: VelocityConfig,
    scale: ScaleDetector,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(
            GestureConfig::DEFAULT,
            VelocityConfig::DEFAULT,
            ScaleDetectorConfig::DEFAULT,
        )
    }
}

impl GestureRecognizer {
    /// Creates a recognizer.
    #[must_use]
    pub fn new(config: GestureConfig, velocity: VelocityConfig, scale: ScaleDetectorConfig) -> Self {
        Self {
            config,
            velocity,
            scale: ScaleDetector::new(scale),
        }
    }

    /// The classification tuning.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The pinch detector.
    #[must_use]
    pub fn scale_detector(&self) -> &ScaleDetector {
        &self.scale
    }

    /// Measures the primary pointer's velocity from `event` alone.
    #[must_use]
    pub fn measure_velocity(&self, event: &PointerEvent) -> Vec2 {
        let mut tracker = VelocityTracker::new(self.velocity);
        tracker.add_movement(event);
        tracker.compute_current_velocity(self.config.velocity_units_ms, self.config.max_velocity)
    }

    /// Classifies one event.
    ///
    /// Every event feeds the pinch detector. Only moves are classified for
    /// pan or rotation.
    pub fn recognize(&mut self, event: &PointerEvent) -> Recognition {
        let scale = match self.scale.on_pointer_event(event) {
            Some(update) => classify_scale(&self.config, update.scale_factor),
            None => Gesture::None,
        };
        let motion = if event.is_move() {
            let velocity = self.measure_velocity(event);
            classify_motion(&self.config, event.pointer_count(), velocity)
        } else {
            Gesture::None
        };
        Recognition { scale, motion }
    }
}
