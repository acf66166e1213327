// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic event time.
//!
//! [`EventTime`] is a point on the platform's monotonic clock in nanoseconds,
//! the unit Android uses for `MotionEvent` timestamps. [`EventDuration`] is a
//! span in the same unit.

use core::fmt;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// A point in time in monotonic nanoseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EventTime(pub u64);

impl EventTime {
    /// Creates an event time from a millisecond timestamp.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis.saturating_mul(NANOS_PER_MILLI))
    }

    /// Returns the raw nanosecond value.
    #[inline]
    #[must_use]
    pub const fn nanos(self) -> u64 {
        self.0
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> EventDuration {
        EventDuration(self.0.saturating_sub(earlier.0))
    }

    /// Signed offset of `self` from `reference`, in fractional milliseconds.
    ///
    /// Negative when `self` is earlier than `reference`.
    #[inline]
    #[must_use]
    pub fn millis_since(self, reference: Self) -> f64 {
        if self >= reference {
            self.saturating_duration_since(reference).as_millis_f64()
        } else {
            -reference.saturating_duration_since(self).as_millis_f64()
        }
    }
}

impl fmt::Debug for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventTime({})", self.0)
    }
}

/// A duration in nanoseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EventDuration(pub u64);

impl EventDuration {
    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis.saturating_mul(NANOS_PER_MILLI))
    }

    /// Returns the duration in fractional milliseconds.
    #[inline]
    #[must_use]
    pub fn as_millis_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_MILLI as f64
    }
}

impl fmt::Debug for EventDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventDuration({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_conversion() {
        assert_eq!(EventTime::from_millis(16).nanos(), 16_000_000);
        assert_eq!(EventDuration::from_millis(3).as_millis_f64(), 3.0);
        assert_eq!(EventDuration(1_500_000).as_millis_f64(), 1.5);
    }

    #[test]
    fn signed_millis_offset() {
        let a = EventTime::from_millis(10);
        let b = EventTime::from_millis(14);
        assert_eq!(b.millis_since(a), 4.0);
        assert_eq!(a.millis_since(b), -4.0);
        assert_eq!(a.millis_since(a), 0.0);
    }

    #[test]
    fn duration_since_saturates() {
        let t = EventTime(1000);
        assert_eq!(t.saturating_duration_since(EventTime(400)), EventDuration(600));
        assert_eq!(t.saturating_duration_since(EventTime(1500)), EventDuration(0));
    }
}
