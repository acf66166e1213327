// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer velocity estimation.
//!
//! [`VelocityTracker`] fits a least-squares polynomial to the recent positions
//! of one pointer and reports the derivative at the newest sample. Time is
//! measured in milliseconds relative to the newest sample, so the fitted
//! slope is directly in pixels per millisecond.
//!
//! A tracker is meant to be short-lived: the gesture listener obtains one per
//! event, feeds it that event's batched samples, reads the velocity and drops
//! it. Nothing carries over between events.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::pointer::{PointerAction, PointerEvent, PointerId};
use crate::time::{EventDuration, EventTime};

/// Polynomial degree used by the least-squares fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FitDegree {
    /// Straight-line fit.
    Linear,
    /// Quadratic fit; falls back to [`Linear`](Self::Linear) with fewer than
    /// three samples or a singular system.
    Quadratic,
}

/// Configuration for a [`VelocityTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityConfig {
    /// Samples older than this (relative to the newest) are ignored.
    pub horizon: EventDuration,
    /// A gap between consecutive samples longer than this means the pointer
    /// stopped; samples before the gap are ignored.
    pub stop_gap: EventDuration,
    /// Maximum number of samples retained.
    pub max_samples: usize,
    /// Fit degree.
    pub degree: FitDegree,
}

impl VelocityConfig {
    /// Defaults matching the Android framework estimator.
    pub const DEFAULT: Self = Self {
        horizon: EventDuration::from_millis(100),
        stop_gap: EventDuration::from_millis(40),
        max_samples: 20,
        degree: FitDegree::Quadratic,
    };
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A timestamped position.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    time: EventTime,
    x: f64,
    y: f64,
}

/// Estimates the velocity of the primary pointer from recent movement.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    config: VelocityConfig,
    pointer: Option<PointerId>,
    samples: Vec<Sample>,
    velocity: Vec2,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(VelocityConfig::DEFAULT)
    }
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new(config: VelocityConfig) -> Self {
        Self {
            config,
            pointer: None,
            samples: Vec::with_capacity(config.max_samples.max(1)),
            velocity: Vec2::ZERO,
        }
    }

    /// Forgets all samples and the last computed velocity.
    pub fn clear(&mut self) {
        self.pointer = None;
        self.samples.clear();
        self.velocity = Vec2::ZERO;
    }

    /// Number of retained samples.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Adds the primary pointer's samples from `event`, history first.
    ///
    /// A [`PointerAction::Down`] or a change of primary pointer restarts the
    /// track.
    pub fn add_movement(&mut self, event: &PointerEvent) {
        let Some(primary) = event.primary() else {
            return;
        };
        if event.action == PointerAction::Down || self.pointer != Some(primary.id) {
            self.clear();
            self.pointer = Some(primary.id);
        }
        for (time, position) in event.samples(0) {
            if self.samples.last().is_some_and(|last| time < last.time) {
                continue;
            }
            if self.samples.len() == self.config.max_samples.max(1) {
                self.samples.remove(0);
            }
            self.samples.push(Sample {
                time,
                x: position.x,
                y: position.y,
            });
        }
    }

    /// Computes the velocity in pixels per `units_ms` milliseconds, each axis
    /// clamped to `±max_velocity`. A NaN `max_velocity` leaves the result
    /// unclamped.
    ///
    /// With `units_ms == 1` the result is pixels per millisecond.
    pub fn compute_current_velocity(&mut self, units_ms: u32, max_velocity: f64) -> Vec2 {
        let window = self.window();
        let units = f64::from(units_ms);
        let limit = max_velocity.abs();

        let vx = fit_slope(&window, |s| s.x, self.config.degree) * units;
        let vy = fit_slope(&window, |s| s.y, self.config.degree) * units;
        self.velocity = Vec2::new(vx.max(-limit).min(limit), vy.max(-limit).min(limit));
        self.velocity
    }

    /// The velocity from the last [`compute_current_velocity`] call.
    ///
    /// [`compute_current_velocity`]: Self::compute_current_velocity
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Samples within the horizon and after the last stop, as
    /// `(ms relative to newest, sample)`, newest first.
    fn window(&self) -> Vec<(f64, Sample)> {
        let mut out = Vec::with_capacity(self.samples.len());
        let Some(newest) = self.samples.last() else {
            return out;
        };
        let mut newer_time = newest.time;
        for sample in self.samples.iter().rev() {
            if newest.time.saturating_duration_since(sample.time) > self.config.horizon {
                break;
            }
            if newer_time.saturating_duration_since(sample.time) > self.config.stop_gap {
                break;
            }
            out.push((sample.time.millis_since(newest.time), *sample));
            newer_time = sample.time;
        }
        out
    }
}

/// Slope at `t = 0` of the least-squares fit of `axis(sample)` against time.
fn fit_slope(window: &[(f64, Sample)], axis: impl Fn(&Sample) -> f64, degree: FitDegree) -> f64 {
    if window.len() < 2 {
        return 0.0;
    }
    let points: Vec<(f64, f64)> = window.iter().map(|(t, s)| (*t, axis(s))).collect();
    if degree == FitDegree::Quadratic && points.len() >= 3 {
        if let Some(slope) = quadratic_slope(&points) {
            return slope;
        }
    }
    linear_slope(&points).unwrap_or(0.0)
}

fn linear_slope(points: &[(f64, f64)]) -> Option<f64> {
    let n = points.len() as f64;
    let (mut st, mut stt, mut sy, mut sty) = (0.0, 0.0, 0.0, 0.0);
    for &(t, y) in points {
        st += t;
        stt += t * t;
        sy += y;
        sty += t * y;
    }
    let denom = n * stt - st * st;
    if !denom.is_finite() || denom.abs() < SINGULAR_EPSILON {
        return None;
    }
    Some((n * sty - st * sy) / denom)
}

/// Solves the 3×3 normal equations for `y = b0 + b1·t + b2·t²` by Cramer's
/// rule and returns `b1`.
fn quadratic_slope(points: &[(f64, f64)]) -> Option<f64> {
    let mut s = [0.0_f64; 5];
    let mut r = [0.0_f64; 3];
    for &(t, y) in points {
        let mut tp = 1.0;
        for (k, acc) in s.iter_mut().enumerate() {
            *acc += tp;
            if k < 3 {
                r[k] += tp * y;
            }
            tp *= t;
        }
    }
    let a = [[s[0], s[1], s[2]], [s[1], s[2], s[3]], [s[2], s[3], s[4]]];
    let det = det3(a);
    if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
        return None;
    }
    let mut a1 = a;
    for (row, rhs) in a1.iter_mut().zip(r) {
        row[1] = rhs;
    }
    Some(det3(a1) / det)
}

const SINGULAR_EPSILON: f64 = 1e-9;

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::Pointer;
    use alloc::vec;
    use kurbo::Point;

    const EPS: f64 = 1e-6;

    /// Builds a single-pointer move whose history follows `f(t_ms)`.
    fn track(times_ms: &[u64], f: impl Fn(f64) -> (f64, f64)) -> PointerEvent {
        let (last, older) = times_ms.split_last().unwrap();
        let (x, y) = f(*last as f64);
        let mut ev = PointerEvent::new(
            PointerAction::Move,
            EventTime::from_millis(*last),
            vec![Pointer::new(0, x, y)],
        );
        for &t in older {
            let (hx, hy) = f(t as f64);
            ev = ev.with_history(EventTime::from_millis(t), vec![Point::new(hx, hy)]);
        }
        ev
    }

    #[test]
    fn single_sample_has_zero_velocity() {
        let mut vt = VelocityTracker::default();
        vt.add_movement(&track(&[100], |_| (5.0, 5.0)));
        assert_eq!(vt.compute_current_velocity(1, f64::MAX), Vec2::ZERO);
    }

    #[test]
    fn linear_motion_in_pixels_per_ms() {
        let mut vt = VelocityTracker::default();
        vt.add_movement(&track(&[100, 108, 116, 124], |t| (2.0 * t, -0.5 * t)));
        let v = vt.compute_current_velocity(1, f64::MAX);
        assert!((v.x - 2.0).abs() < EPS, "vx = {}", v.x);
        assert!((v.y + 0.5).abs() < EPS, "vy = {}", v.y);
    }

    #[test]
    fn units_scale_the_result() {
        let mut vt = VelocityTracker::default();
        vt.add_movement(&track(&[100, 110, 120], |t| (t, 0.0)));
        let v = vt.compute_current_velocity(1000, f64::MAX);
        assert!((v.x - 1000.0).abs() < 1e-3, "vx = {}", v.x);
    }

    #[test]
    fn quadratic_fit_reports_slope_at_newest_sample() {
        // x(t) = (t - 120)² + 3 (t - 120): slope at t = 120 is 3.
        let mut vt = VelocityTracker::default();
        vt.add_movement(&track(&[100, 110, 120], |t| {
            let r = t - 120.0;
            (r * r + 3.0 * r, 0.0)
        }));
        let v = vt.compute_current_velocity(1, f64::MAX);
        assert!((v.x - 3.0).abs() < EPS, "vx = {}", v.x);
    }

    #[test]
    fn linear_degree_ignores_curvature() {
        let config = VelocityConfig {
            degree: FitDegree::Linear,
            ..VelocityConfig::DEFAULT
        };
        let mut vt = VelocityTracker::new(config);
        vt.add_movement(&track(&[100, 110, 120], |t| {
            let r = t - 120.0;
            (r * r, 0.0)
        }));
        // Points (-20, 400), (-10, 100), (0, 0): least-squares line slope -20.
        let v = vt.compute_current_velocity(1, f64::MAX);
        assert!((v.x + 20.0).abs() < EPS, "vx = {}", v.x);
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut vt = VelocityTracker::default();
        // The 0 ms sample is 150 ms old and would bend the line if used.
        let ev = track(&[0, 120, 130, 140, 150], |t| if t < 1.0 { (500.0, 0.0) } else { (t, 0.0) });
        vt.add_movement(&ev);
        let v = vt.compute_current_velocity(1, f64::MAX);
        assert!((v.x - 1.0).abs() < EPS, "vx = {}", v.x);
    }

    #[test]
    fn stop_gap_discards_earlier_samples() {
        let mut vt = VelocityTracker::default();
        // 50 ms pause between 10 and 60 means only the last two samples count.
        let ev = track(&[10, 60, 70], |t| if t < 50.0 { (0.0, 0.0) } else { (t * 4.0, 0.0) });
        vt.add_movement(&ev);
        let v = vt.compute_current_velocity(1, f64::MAX);
        assert!((v.x - 4.0).abs() < EPS, "vx = {}", v.x);
    }

    #[test]
    fn max_velocity_clamps_each_axis() {
        let mut vt = VelocityTracker::default();
        vt.add_movement(&track(&[100, 101, 102], |t| (50.0 * t, -50.0 * t)));
        let v = vt.compute_current_velocity(1, 10.0);
        assert_eq!(v, Vec2::new(10.0, -10.0));
        assert_eq!(vt.velocity(), v);
    }

    #[test]
    fn nan_max_velocity_leaves_result_unclamped() {
        let mut vt = VelocityTracker::default();
        vt.add_movement(&track(&[100, 110, 120], |t| (3.0 * t, 0.0)));
        let v = vt.compute_current_velocity(1, f64::NAN);
        assert!((v.x - 3.0).abs() < EPS, "vx = {}", v.x);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn down_restarts_the_track() {
        let mut vt = VelocityTracker::default();
        vt.add_movement(&track(&[100, 110, 120], |t| (t, 0.0)));
        assert_eq!(vt.sample_count(), 3);
        let down = PointerEvent::new(
            PointerAction::Down,
            EventTime::from_millis(500),
            vec![Pointer::new(0, 1.0, 1.0)],
        );
        vt.add_movement(&down);
        assert_eq!(vt.sample_count(), 1);
    }

    #[test]
    fn sample_count_is_bounded() {
        let config = VelocityConfig {
            max_samples: 4,
            ..VelocityConfig::DEFAULT
        };
        let mut vt = VelocityTracker::new(config);
        vt.add_movement(&track(&[100, 102, 104, 106, 108, 110], |t| (t, 0.0)));
        assert_eq!(vt.sample_count(), 4);
    }

    #[test]
    fn empty_event_is_ignored() {
        let mut vt = VelocityTracker::default();
        vt.add_movement(&PointerEvent::new(
            PointerAction::Move,
            EventTime::from_millis(1),
            Vec::new(),
        ));
        assert_eq!(vt.sample_count(), 0);
        assert_eq!(vt.compute_current_velocity(1, f64::MAX), Vec2::ZERO);
    }
}
