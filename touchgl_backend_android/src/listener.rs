// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The touch listener that turns pointer events into gesture signals.

use core::fmt;

use touchgl_core::gesture::{GestureRecognizer, GestureSink};
use touchgl_core::pointer::PointerEvent;
use touchgl_core::trace::{GestureTraceEvent, PointerTraceEvent, TraceSink, Tracer};

use crate::redraw::RedrawRequester;
use crate::surface::TouchListener;

/// Composes a [`GestureRecognizer`] with the application's [`GestureSink`].
///
/// For every event: the recognizer runs, each resulting signal is sent to
/// the sink (scale before move or rotate), a pinch update requests a redraw,
/// and the event is reported as consumed.
pub struct GestureListener<S> {
    recognizer: GestureRecognizer,
    sink: S,
    redraw: RedrawRequester,
    trace: Option<Box<dyn TraceSink + Send>>,
}

impl<S: fmt::Debug> fmt::Debug for GestureListener<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureListener")
            .field("recognizer", &self.recognizer)
            .field("sink", &self.sink)
            .field("redraw", &self.redraw)
            .field("traced", &self.trace.is_some())
            .finish()
    }
}

impl<S: GestureSink> GestureListener<S> {
    /// Creates a listener with the given recognizer.
    #[must_use]
    pub fn new(recognizer: GestureRecognizer, sink: S, redraw: RedrawRequester) -> Self {
        Self {
            recognizer,
            sink,
            redraw,
            trace: None,
        }
    }

    /// Forwards pointer and gesture events to `sink` (with the `trace`
    /// feature).
    #[must_use]
    pub fn with_trace_sink(mut self, sink: Box<dyn TraceSink + Send>) -> Self {
        self.trace = Some(sink);
        self
    }

    /// The application's sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    /// Handles one event. Always returns `true`.
    pub fn handle(&mut self, event: &PointerEvent) -> bool {
        let mut tracer = match &mut self.trace {
            Some(sink) => Tracer::new(sink.as_mut()),
            None => Tracer::none(),
        };
        tracer.pointer_event(&PointerTraceEvent::from(event));

        let recognition = self.recognizer.recognize(event);
        for gesture in recognition.iter() {
            tracer.gesture(&GestureTraceEvent {
                time: event.time,
                gesture,
            });
            gesture.dispatch(&mut self.sink);
        }
        if recognition.wants_redraw() {
            self.redraw.request();
        }
        true
    }
}

impl<S: GestureSink + Send> TouchListener for GestureListener<S> {
    fn on_touch(&mut self, event: &PointerEvent) -> bool {
        self.handle(event)
    }
}
