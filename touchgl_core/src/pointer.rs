// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event snapshots.
//!
//! A [`PointerEvent`] is what the platform hands the surface for one touch
//! callback: the action kind, every pointer currently down with its position,
//! and any movement samples the platform batched since the previous callback.
//! Events are not retained; each consumer reads what it needs and drops it.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::time::EventTime;

/// Identifies one finger for the duration of its contact.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PointerId(pub i32);

impl fmt::Debug for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointerId({})", self.0)
    }
}

/// The kind of change a [`PointerEvent`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The first pointer went down; a new gesture stream starts.
    Down,
    /// An additional pointer went down. [`PointerEvent::action_index`] names it.
    PointerDown,
    /// One or more pointers moved.
    Move,
    /// A non-primary pointer went up. [`PointerEvent::action_index`] names it.
    PointerUp,
    /// The last pointer went up; the gesture stream ends.
    Up,
    /// The platform aborted the gesture stream.
    Cancel,
    /// Any other action (hover, scroll, outside); ignored by recognizers.
    Other,
}

impl PointerAction {
    /// Returns `true` if this action ends the gesture stream.
    #[inline]
    #[must_use]
    pub const fn ends_stream(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }

    /// Returns `true` if the set of active pointers changes with this action.
    #[inline]
    #[must_use]
    pub const fn changes_pointer_set(self) -> bool {
        matches!(self, Self::Down | Self::PointerDown | Self::PointerUp)
    }
}

/// One pointer's identity and position at the event time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Stable id for this contact.
    pub id: PointerId,
    /// Position in surface pixels (Y down).
    pub position: Point,
}

impl Pointer {
    /// Creates a pointer at `(x, y)`.
    #[inline]
    #[must_use]
    pub const fn new(id: i32, x: f64, y: f64) -> Self {
        Self {
            id: PointerId(id),
            position: Point::new(x, y),
        }
    }
}

/// An older movement sample batched into an event.
///
/// `positions` is parallel to [`PointerEvent::pointers`]: entry `i` is where
/// pointer `i` was at `time`.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoricalSample {
    /// When the sample was taken.
    pub time: EventTime,
    /// Per-pointer positions, in the same order as the event's pointers.
    pub positions: Vec<Point>,
}

/// A snapshot of the touch state delivered in one platform callback.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What changed.
    pub action: PointerAction,
    /// Index into `pointers` of the pointer that went down or up, for
    /// [`PointerAction::PointerDown`] and [`PointerAction::PointerUp`].
    /// Zero otherwise.
    pub action_index: usize,
    /// When the current positions were sampled.
    pub time: EventTime,
    /// Every pointer currently in contact, including one that is lifting.
    pub pointers: Vec<Pointer>,
    /// Batched older samples, oldest first. All are earlier than `time`.
    pub history: Vec<HistoricalSample>,
}

impl PointerEvent {
    /// Creates an event with no batched history.
    #[must_use]
    pub fn new(action: PointerAction, time: EventTime, pointers: Vec<Pointer>) -> Self {
        Self {
            action,
            action_index: 0,
            time,
            pointers,
            history: Vec::new(),
        }
    }

    /// Sets the index of the pointer the action refers to.
    #[must_use]
    pub fn with_action_index(mut self, index: usize) -> Self {
        self.action_index = index;
        self
    }

    /// Appends a batched historical sample. Samples must be pushed oldest
    /// first.
    #[must_use]
    pub fn with_history(mut self, time: EventTime, positions: Vec<Point>) -> Self {
        self.history.push(HistoricalSample { time, positions });
        self
    }

    /// Number of pointers in contact.
    #[inline]
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` for a [`PointerAction::Move`] event.
    #[inline]
    #[must_use]
    pub fn is_move(&self) -> bool {
        self.action == PointerAction::Move
    }

    /// The pointer that drives single-pointer queries (the first one).
    #[inline]
    #[must_use]
    pub fn primary(&self) -> Option<&Pointer> {
        self.pointers.first()
    }

    /// Iterates `(time, position)` samples for the pointer at `index`,
    /// oldest first, ending with the current position.
    ///
    /// Historical samples that lack an entry for `index` are skipped.
    pub fn samples(&self, index: usize) -> impl Iterator<Item = (EventTime, Point)> + '_ {
        let historical = self
            .history
            .iter()
            .filter_map(move |h| h.positions.get(index).map(|p| (h.time, *p)));
        let current = self.pointers.get(index).map(|p| (self.time, p.position));
        historical.chain(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn two_finger_move() -> PointerEvent {
        PointerEvent::new(
            PointerAction::Move,
            EventTime::from_millis(20),
            vec![Pointer::new(0, 10.0, 10.0), Pointer::new(1, 50.0, 10.0)],
        )
        .with_history(
            EventTime::from_millis(10),
            vec![Point::new(8.0, 10.0), Point::new(52.0, 10.0)],
        )
        .with_history(EventTime::from_millis(15), vec![Point::new(9.0, 10.0)])
    }

    #[test]
    fn samples_are_oldest_first_and_end_with_current() {
        let ev = two_finger_move();
        let xs: Vec<f64> = ev.samples(0).map(|(_, p)| p.x).collect();
        assert_eq!(xs, vec![8.0, 9.0, 10.0]);
        let times: Vec<u64> = ev.samples(0).map(|(t, _)| t.nanos() / 1_000_000).collect();
        assert_eq!(times, vec![10, 15, 20]);
    }

    #[test]
    fn short_history_entries_are_skipped() {
        let ev = two_finger_move();
        let xs: Vec<f64> = ev.samples(1).map(|(_, p)| p.x).collect();
        assert_eq!(xs, vec![52.0, 50.0]);
    }

    #[test]
    fn out_of_range_index_yields_nothing() {
        let ev = two_finger_move();
        assert_eq!(ev.samples(5).count(), 0);
    }

    #[test]
    fn action_classification() {
        assert!(PointerAction::Up.ends_stream());
        assert!(PointerAction::Cancel.ends_stream());
        assert!(!PointerAction::Move.ends_stream());
        assert!(PointerAction::PointerUp.changes_pointer_set());
        assert!(PointerAction::Down.changes_pointer_set());
        assert!(!PointerAction::Move.changes_pointer_set());
    }

    #[test]
    fn primary_is_first_pointer() {
        let ev = two_finger_move();
        assert_eq!(ev.pointer_count(), 2);
        assert_eq!(ev.primary().map(|p| p.id), Some(PointerId(0)));
        assert!(ev.is_move());
    }
}
