// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for input handling and the render loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the surface glue calls as events arrive, gestures fire and frames are
//! drawn. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use crate::gesture::Gesture;
use crate::lifecycle::{LifecycleError, Viewport};
use crate::pointer::{PointerAction, PointerEvent};
use crate::time::EventTime;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the surface receives a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTraceEvent {
    /// Event time.
    pub time: EventTime,
    /// Action kind.
    pub action: PointerAction,
    /// Pointers in contact.
    pub pointer_count: usize,
    /// Batched historical samples carried by the event.
    pub history_len: usize,
}

impl From<&PointerEvent> for PointerTraceEvent {
    fn from(event: &PointerEvent) -> Self {
        Self {
            time: event.time,
            action: event.action,
            pointer_count: event.pointer_count(),
            history_len: event.history.len(),
        }
    }
}

/// Emitted for every gesture signal sent to the application.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTraceEvent {
    /// Time of the pointer event that produced the signal.
    pub time: EventTime,
    /// The signal.
    pub gesture: Gesture,
}

/// Which surface lifecycle callback fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceEventKind {
    /// The graphics context was created.
    Created,
    /// The surface was resized.
    Changed(Viewport),
}

/// Emitted when a frame is handed to the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTraceEvent {
    /// Monotonic frame counter.
    pub frame_index: u64,
    /// Viewport of the default target for this frame.
    pub viewport: Viewport,
}

/// Emitted when a graphics call reports an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraphicsErrorTraceEvent {
    /// Name of the failed call, e.g. `glClear`.
    pub call: &'static str,
    /// What the caller was trying to do.
    pub description: &'static str,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the surface glue.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a pointer event arrives.
    fn on_pointer_event(&mut self, e: &PointerTraceEvent) {
        _ = e;
    }

    /// Called for each gesture signal dispatched.
    fn on_gesture(&mut self, e: &GestureTraceEvent) {
        _ = e;
    }

    /// Called on surface created/changed.
    fn on_surface(&mut self, e: &SurfaceEventKind) {
        _ = e;
    }

    /// Called when a frame is handed to the application.
    fn on_frame(&mut self, e: &FrameTraceEvent) {
        _ = e;
    }

    /// Called when a graphics call fails.
    fn on_graphics_error(&mut self, e: &GraphicsErrorTraceEvent) {
        _ = e;
    }

    /// Called when a lifecycle callback arrives out of order.
    fn on_lifecycle_error(&mut self, e: &LifecycleError) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PointerTraceEvent`].
    #[inline]
    pub fn pointer_event(&mut self, e: &PointerTraceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pointer_event(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GestureTraceEvent`].
    #[inline]
    pub fn gesture(&mut self, e: &GestureTraceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_gesture(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SurfaceEventKind`].
    #[inline]
    pub fn surface(&mut self, e: &SurfaceEventKind) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameTraceEvent`].
    #[inline]
    pub fn frame(&mut self, e: &FrameTraceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GraphicsErrorTraceEvent`].
    #[inline]
    pub fn graphics_error(&mut self, e: &GraphicsErrorTraceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_graphics_error(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LifecycleError`].
    #[inline]
    pub fn lifecycle_error(&mut self, e: &LifecycleError) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_lifecycle_error(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::Pointer;
    use alloc::vec;
    use kurbo::{Point, Vec2};

    fn sample_event() -> PointerEvent {
        PointerEvent::new(
            PointerAction::Move,
            EventTime(42),
            vec![Pointer::new(0, 1.0, 2.0), Pointer::new(1, 3.0, 4.0)],
        )
        .with_history(EventTime(40), vec![Point::new(0.0, 0.0), Point::new(3.0, 3.0)])
    }

    #[test]
    fn pointer_trace_event_from_pointer_event() {
        let e = PointerTraceEvent::from(&sample_event());
        assert_eq!(e.time, EventTime(42));
        assert_eq!(e.action, PointerAction::Move);
        assert_eq!(e.pointer_count, 2);
        assert_eq!(e.history_len, 1);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_pointer_event(&PointerTraceEvent::from(&sample_event()));
        sink.on_gesture(&GestureTraceEvent {
            time: EventTime(0),
            gesture: Gesture::Scale(1.0),
        });
        sink.on_surface(&SurfaceEventKind::Created);
        sink.on_frame(&FrameTraceEvent {
            frame_index: 0,
            viewport: Viewport::PLACEHOLDER,
        });
        sink.on_lifecycle_error(&LifecycleError::NoViewport);
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.pointer_event(&PointerTraceEvent::from(&sample_event()));
        tracer.gesture(&GestureTraceEvent {
            time: EventTime(0),
            gesture: Gesture::Move(Vec2::ZERO),
        });
        tracer.graphics_error(&GraphicsErrorTraceEvent {
            call: "glClear",
            description: "Failed to clear framebuffer",
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            frames: Vec<u64>,
            gestures: Vec<Gesture>,
        }
        impl TraceSink for RecordingSink {
            fn on_frame(&mut self, e: &FrameTraceEvent) {
                self.frames.push(e.frame_index);
            }
            fn on_gesture(&mut self, e: &GestureTraceEvent) {
                self.gestures.push(e.gesture);
            }
        }

        let mut sink = RecordingSink {
            frames: Vec::new(),
            gestures: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.frame(&FrameTraceEvent {
            frame_index: 7,
            viewport: Viewport::new(640, 480),
        });
        tracer.gesture(&GestureTraceEvent {
            time: EventTime(1),
            gesture: Gesture::Scale(0.5),
        });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.frames, &[7]);
        assert_eq!(sink.gestures, &[Gesture::Scale(0.5)]);
    }
}
