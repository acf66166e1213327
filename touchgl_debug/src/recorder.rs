// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory trace recording.
//!
//! [`RecorderSink`] keeps every event it receives, each stamped with the
//! wall-clock time elapsed since the recorder was created. Input and render
//! callbacks run on different threads, so [`SharedRecorder`] wraps one
//! recorder behind a mutex and hands out clones to both sides.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use touchgl_core::lifecycle::LifecycleError;
use touchgl_core::trace::{
    FrameTraceEvent, GestureTraceEvent, GraphicsErrorTraceEvent, PointerTraceEvent,
    SurfaceEventKind, TraceSink,
};

/// A trace event as received by the recorder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A pointer event arrived.
    Pointer(PointerTraceEvent),
    /// A gesture signal was dispatched.
    Gesture(GestureTraceEvent),
    /// The surface was created or changed.
    Surface(SurfaceEventKind),
    /// A frame was drawn.
    Frame(FrameTraceEvent),
    /// A graphics call failed.
    GraphicsError(GraphicsErrorTraceEvent),
    /// A lifecycle callback was rejected.
    LifecycleError(LifecycleError),
}

/// A [`RecordedEvent`] and when it was received.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Recorded {
    /// Time since the recorder was created.
    pub at: Duration,
    /// The event.
    pub event: RecordedEvent,
}

/// Records trace events in memory.
#[derive(Debug)]
pub struct RecorderSink {
    origin: Instant,
    events: Vec<Recorded>,
}

impl Default for RecorderSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecorderSink {
    /// Creates an empty recorder whose clock starts now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            events: Vec::new(),
        }
    }

    /// Every event so far, in arrival order.
    #[must_use]
    pub fn events(&self) -> &[Recorded] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discards all events. The clock keeps running.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn push(&mut self, event: RecordedEvent) {
        self.events.push(Recorded {
            at: self.origin.elapsed(),
            event,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_pointer_event(&mut self, e: &PointerTraceEvent) {
        self.push(RecordedEvent::Pointer(*e));
    }

    fn on_gesture(&mut self, e: &GestureTraceEvent) {
        self.push(RecordedEvent::Gesture(*e));
    }

    fn on_surface(&mut self, e: &SurfaceEventKind) {
        self.push(RecordedEvent::Surface(*e));
    }

    fn on_frame(&mut self, e: &FrameTraceEvent) {
        self.push(RecordedEvent::Frame(*e));
    }

    fn on_graphics_error(&mut self, e: &GraphicsErrorTraceEvent) {
        self.push(RecordedEvent::GraphicsError(*e));
    }

    fn on_lifecycle_error(&mut self, e: &LifecycleError) {
        self.push(RecordedEvent::LifecycleError(*e));
    }
}

/// A [`RecorderSink`] shared between threads. Clones record into the same
/// recording.
#[derive(Clone, Debug, Default)]
pub struct SharedRecorder(Arc<Mutex<RecorderSink>>);

impl SharedRecorder {
    /// Creates an empty shared recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out the events recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Recorded> {
        self.with(|r| r.events().to_vec())
    }

    fn with<T>(&self, f: impl FnOnce(&mut RecorderSink) -> T) -> T {
        // A panic while recording leaves a usable recording behind.
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl TraceSink for SharedRecorder {
    fn on_pointer_event(&mut self, e: &PointerTraceEvent) {
        self.with(|r| r.on_pointer_event(e));
    }

    fn on_gesture(&mut self, e: &GestureTraceEvent) {
        self.with(|r| r.on_gesture(e));
    }

    fn on_surface(&mut self, e: &SurfaceEventKind) {
        self.with(|r| r.on_surface(e));
    }

    fn on_frame(&mut self, e: &FrameTraceEvent) {
        self.with(|r| r.on_frame(e));
    }

    fn on_graphics_error(&mut self, e: &GraphicsErrorTraceEvent) {
        self.with(|r| r.on_graphics_error(e));
    }

    fn on_lifecycle_error(&mut self, e: &LifecycleError) {
        self.with(|r| r.on_lifecycle_error(e));
    }
}
