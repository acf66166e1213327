// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Event times
//! are printed in milliseconds.

use std::io::Write;

use touchgl_core::gesture::Gesture;
use touchgl_core::lifecycle::LifecycleError;
use touchgl_core::time::EventTime;
use touchgl_core::trace::{
    FrameTraceEvent, GestureTraceEvent, GraphicsErrorTraceEvent, PointerTraceEvent,
    SurfaceEventKind, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write + Send>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn ms(t: EventTime) -> f64 {
    t.nanos() as f64 / 1_000_000.0
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_pointer_event(&mut self, e: &PointerTraceEvent) {
        let _ = writeln!(
            self.writer,
            "[pointer] t={:.3}ms action={:?} pointers={} history={}",
            ms(e.time),
            e.action,
            e.pointer_count,
            e.history_len,
        );
    }

    fn on_gesture(&mut self, e: &GestureTraceEvent) {
        let t = ms(e.time);
        let _ = match e.gesture {
            Gesture::None => writeln!(self.writer, "[gesture] t={t:.3}ms none"),
            Gesture::Move(d) => {
                writeln!(self.writer, "[gesture] t={t:.3}ms move dx={:.4} dy={:.4}", d.x, d.y)
            }
            Gesture::Rotate(d) => {
                writeln!(self.writer, "[gesture] t={t:.3}ms rotate x={:.4} y={:.4}", d.x, d.y)
            }
            Gesture::Scale(f) => writeln!(self.writer, "[gesture] t={t:.3}ms scale factor={f:.4}"),
        };
    }

    fn on_surface(&mut self, e: &SurfaceEventKind) {
        let _ = match e {
            SurfaceEventKind::Created => writeln!(self.writer, "[surface] created"),
            SurfaceEventKind::Changed(v) => {
                writeln!(self.writer, "[surface] changed {}x{}", v.width, v.height)
            }
        };
    }

    fn on_frame(&mut self, e: &FrameTraceEvent) {
        let _ = writeln!(
            self.writer,
            "[frame] index={} viewport={}x{}",
            e.frame_index, e.viewport.width, e.viewport.height,
        );
    }

    fn on_graphics_error(&mut self, e: &GraphicsErrorTraceEvent) {
        let _ = writeln!(self.writer, "[gl-error] {}: {}", e.call, e.description);
    }

    fn on_lifecycle_error(&mut self, e: &LifecycleError) {
        let _ = writeln!(self.writer, "[lifecycle] rejected: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use touchgl_core::lifecycle::Viewport;
    use touchgl_core::pointer::PointerAction;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_pointer_and_gesture() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_pointer_event(&PointerTraceEvent {
            time: EventTime::from_millis(16),
            action: PointerAction::Move,
            pointer_count: 2,
            history_len: 3,
        });
        sink.on_gesture(&GestureTraceEvent {
            time: EventTime::from_millis(16),
            gesture: Gesture::Rotate(Vec2::new(4.0, 0.0)),
        });
        let out = output(sink);
        assert!(out.contains("[pointer] t=16.000ms action=Move pointers=2"), "got: {out}");
        assert!(out.contains("rotate x=4.0000 y=0.0000"), "got: {out}");
    }

    #[test]
    fn pretty_print_surface_and_frame() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_surface(&SurfaceEventKind::Changed(Viewport::new(1080, 1920)));
        sink.on_frame(&FrameTraceEvent {
            frame_index: 4,
            viewport: Viewport::new(1080, 1920),
        });
        sink.on_graphics_error(&GraphicsErrorTraceEvent {
            call: "glClear",
            description: "Failed to clear framebuffer",
        });
        let out = output(sink);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[surface] changed 1080x1920",
                "[frame] index=4 viewport=1080x1920",
                "[gl-error] glClear: Failed to clear framebuffer",
            ]
        );
    }
}
