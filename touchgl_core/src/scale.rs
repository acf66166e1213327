// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch (scale) recognition.
//!
//! [`ScaleDetector`] watches the spread of all active pointers around their
//! common focal point. Once the spread has changed by more than the span slop
//! a pinch is in progress, and every subsequent move reports the ratio of the
//! current span to the span at the previous report.
//!
//! The detector runs independently of move/rotate classification: it sees
//! every event, including the ones that end up classified as a pan.

use kurbo::{Point, Vec2};

use crate::pointer::{PointerAction, PointerEvent};

/// Configuration for a [`ScaleDetector`]. Distances are in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleDetectorConfig {
    /// How far the span must move away from its starting value before a
    /// pinch begins.
    pub span_slop: f64,
    /// Pinches with a smaller span never start, and end if the span shrinks
    /// below it.
    pub min_span: f64,
}

impl ScaleDetectorConfig {
    /// Defaults tuned for phone-sized touch screens.
    pub const DEFAULT: Self = Self {
        span_slop: 16.0,
        min_span: 32.0,
    };
}

impl Default for ScaleDetectorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One pinch report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleUpdate {
    /// `current_span / previous_span`. Greater than one when spreading.
    pub scale_factor: f64,
    /// Average position of the active pointers.
    pub focus: Point,
    /// Current span.
    pub span: f64,
}

/// Recognizes pinch gestures from a stream of [`PointerEvent`]s.
#[derive(Clone, Debug)]
pub struct ScaleDetector {
    config: ScaleDetectorConfig,
    in_progress: bool,
    initial_span: f64,
    previous_span: f64,
    current_span: f64,
    focus: Point,
}

impl Default for ScaleDetector {
    fn default() -> Self {
        Self::new(ScaleDetectorConfig::DEFAULT)
    }
}

impl ScaleDetector {
    /// Creates an idle detector.
    #[must_use]
    pub fn new(config: ScaleDetectorConfig) -> Self {
        Self {
            config,
            in_progress: false,
            initial_span: 0.0,
            previous_span: 0.0,
            current_span: 0.0,
            focus: Point::ORIGIN,
        }
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Focal point from the most recent event.
    #[must_use]
    pub fn focus(&self) -> Point {
        self.focus
    }

    /// Span from the most recent move.
    #[must_use]
    pub fn current_span(&self) -> f64 {
        self.current_span
    }

    /// Feeds one event. Returns a report when an in-progress pinch moved.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<ScaleUpdate> {
        let action = event.action;
        if action == PointerAction::Other {
            return None;
        }

        if action == PointerAction::Down || action.ends_stream() {
            if self.in_progress {
                self.in_progress = false;
                self.initial_span = 0.0;
            }
            if action.ends_stream() {
                return None;
            }
        }

        let config_changed = action.changes_pointer_set();
        let skip = (action == PointerAction::PointerUp).then_some(event.action_index);
        let (focus, span) = focus_and_span(event, skip)?;
        self.focus = focus;

        let was_in_progress = self.in_progress;
        if self.in_progress && (span < self.config.min_span || config_changed) {
            self.in_progress = false;
            self.initial_span = span;
        }
        if config_changed {
            self.initial_span = span;
            self.previous_span = span;
            self.current_span = span;
        }

        if !self.in_progress
            && span >= self.config.min_span
            && (was_in_progress || (span - self.initial_span).abs() > self.config.span_slop)
        {
            self.previous_span = span;
            self.current_span = span;
            self.in_progress = true;
        }

        if action != PointerAction::Move {
            return None;
        }
        self.current_span = span;
        if !self.in_progress {
            return None;
        }
        let scale_factor = if self.previous_span > 0.0 {
            self.current_span / self.previous_span
        } else {
            1.0
        };
        self.previous_span = self.current_span;
        Some(ScaleUpdate {
            scale_factor,
            focus,
            span,
        })
    }
}

/// Average position and span of the pointers, excluding `skip`.
///
/// The span is the diagonal of twice the mean absolute deviation on each
/// axis. Returns `None` when no pointer remains.
fn focus_and_span(event: &PointerEvent, skip: Option<usize>) -> Option<(Point, f64)> {
    let active = || {
        event
            .pointers
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != skip)
            .map(|(_, p)| p.position)
    };
    let count = active().count();
    if count == 0 {
        return None;
    }
    let n = count as f64;
    let sum = active().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let focus = (sum / n).to_point();
    let dev = active().fold(Vec2::ZERO, |acc, p| {
        acc + Vec2::new((p.x - focus.x).abs(), (p.y - focus.y).abs())
    }) / n;
    let span = (dev * 2.0).hypot();
    Some((focus, span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::Pointer;
    use crate::time::EventTime;
    use alloc::vec;

    const EPS: f64 = 1e-9;

    fn config() -> ScaleDetectorConfig {
        ScaleDetectorConfig {
            span_slop: 10.0,
            min_span: 20.0,
        }
    }

    /// Two pointers on a horizontal line, `gap` pixels apart.
    fn pair(action: PointerAction, t: u64, gap: f64) -> PointerEvent {
        PointerEvent::new(
            action,
            EventTime::from_millis(t),
            vec![Pointer::new(0, 100.0, 100.0), Pointer::new(1, 100.0 + gap, 100.0)],
        )
    }

    fn start_pinch(det: &mut ScaleDetector) {
        let down = PointerEvent::new(
            PointerAction::Down,
            EventTime::from_millis(0),
            vec![Pointer::new(0, 100.0, 100.0)],
        );
        assert_eq!(det.on_pointer_event(&down), None);
        assert_eq!(
            det.on_pointer_event(&pair(PointerAction::PointerDown, 5, 100.0).with_action_index(1)),
            None
        );
    }

    #[test]
    fn span_is_distance_between_two_pointers() {
        let (focus, span) = focus_and_span(&pair(PointerAction::Move, 0, 60.0), None).unwrap();
        assert_eq!(focus, Point::new(130.0, 100.0));
        assert!((span - 60.0).abs() < EPS);
    }

    #[test]
    fn lifting_pointer_is_excluded() {
        let ev = pair(PointerAction::PointerUp, 0, 60.0).with_action_index(1);
        let (focus, span) = focus_and_span(&ev, Some(1)).unwrap();
        assert_eq!(focus, Point::new(100.0, 100.0));
        assert_eq!(span, 0.0);
    }

    #[test]
    fn small_changes_stay_inside_slop() {
        let mut det = ScaleDetector::new(config());
        start_pinch(&mut det);
        assert_eq!(det.on_pointer_event(&pair(PointerAction::Move, 10, 105.0)), None);
        assert!(!det.is_in_progress());
    }

    #[test]
    fn pinch_reports_ratio_between_moves() {
        let mut det = ScaleDetector::new(config());
        start_pinch(&mut det);

        // Crossing the slop begins the pinch; the first report is relative
        // to the span at which it began.
        let first = det.on_pointer_event(&pair(PointerAction::Move, 10, 120.0)).unwrap();
        assert!((first.scale_factor - 1.0).abs() < EPS);
        assert!(det.is_in_progress());

        let second = det.on_pointer_event(&pair(PointerAction::Move, 20, 180.0)).unwrap();
        assert!((second.scale_factor - 1.5).abs() < EPS);
        assert!((second.span - 180.0).abs() < EPS);

        let third = det.on_pointer_event(&pair(PointerAction::Move, 30, 90.0)).unwrap();
        assert!((third.scale_factor - 0.5).abs() < EPS);
    }

    #[test]
    fn pointer_set_change_restarts_the_baseline() {
        let mut det = ScaleDetector::new(config());
        start_pinch(&mut det);
        det.on_pointer_event(&pair(PointerAction::Move, 10, 120.0));
        assert!(det.is_in_progress());

        let three = PointerEvent::new(
            PointerAction::PointerDown,
            EventTime::from_millis(20),
            vec![
                Pointer::new(0, 100.0, 100.0),
                Pointer::new(1, 220.0, 100.0),
                Pointer::new(2, 160.0, 160.0),
            ],
        )
        .with_action_index(2);
        assert_eq!(det.on_pointer_event(&three), None);
        // Still in progress: the gesture resumes against the new span.
        assert!(det.is_in_progress());
    }

    #[test]
    fn span_below_minimum_ends_the_pinch() {
        let mut det = ScaleDetector::new(config());
        start_pinch(&mut det);
        det.on_pointer_event(&pair(PointerAction::Move, 10, 120.0));
        assert!(det.is_in_progress());
        assert_eq!(det.on_pointer_event(&pair(PointerAction::Move, 20, 10.0)), None);
        assert!(!det.is_in_progress());
    }

    #[test]
    fn up_and_cancel_end_the_stream() {
        let mut det = ScaleDetector::new(config());
        start_pinch(&mut det);
        det.on_pointer_event(&pair(PointerAction::Move, 10, 120.0));
        assert!(det.is_in_progress());
        let up = PointerEvent::new(
            PointerAction::Cancel,
            EventTime::from_millis(20),
            vec![Pointer::new(0, 100.0, 100.0)],
        );
        assert_eq!(det.on_pointer_event(&up), None);
        assert!(!det.is_in_progress());
    }

    #[test]
    fn single_pointer_never_pinches() {
        let mut det = ScaleDetector::new(config());
        let mut x = 0.0;
        for t in 0..10 {
            x += 50.0;
            let ev = PointerEvent::new(
                PointerAction::Move,
                EventTime::from_millis(t),
                vec![Pointer::new(0, x, 0.0)],
            );
            assert_eq!(det.on_pointer_event(&ev), None);
        }
        assert!(!det.is_in_progress());
    }
}
