// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] takes a recording from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes
//! [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Input events go on thread 0 and render-thread events on thread 1, so the
//! two streams show up as separate tracks.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};
use std::time::Duration;

use serde_json::{Value, json};

use touchgl_core::gesture::Gesture;
use touchgl_core::trace::SurfaceEventKind;

use crate::recorder::{Recorded, RecordedEvent};

const INPUT_TID: u32 = 0;
const RENDER_TID: u32 = 1;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of instant events, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
/// Timestamps are the recorder's receive times in microseconds; pointer and
/// gesture events also carry their platform event time in `args`.
pub fn export(recording: &[Recorded], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = recording.iter().map(event_json).collect();
    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn event_json(recorded: &Recorded) -> Value {
    let ts = us(recorded.at);
    match recorded.event {
        RecordedEvent::Pointer(e) => json!({
            "ph": "i",
            "name": "PointerEvent",
            "cat": "Input",
            "ts": ts,
            "pid": 0,
            "tid": INPUT_TID,
            "s": "t",
            "args": {
                "event_time_ns": e.time.nanos(),
                "action": format!("{:?}", e.action),
                "pointer_count": e.pointer_count,
                "history_len": e.history_len,
            }
        }),
        RecordedEvent::Gesture(e) => {
            let (name, args) = match e.gesture {
                Gesture::None => ("None", json!({})),
                Gesture::Move(d) => ("Move", json!({ "dx": d.x, "dy": d.y })),
                Gesture::Rotate(d) => ("Rotate", json!({ "x": d.x, "y": d.y })),
                Gesture::Scale(f) => ("Scale", json!({ "factor": f })),
            };
            json!({
                "ph": "i",
                "name": name,
                "cat": "Gesture",
                "ts": ts,
                "pid": 0,
                "tid": INPUT_TID,
                "s": "t",
                "args": {
                    "event_time_ns": e.time.nanos(),
                    "signal": args,
                }
            })
        }
        RecordedEvent::Surface(kind) => {
            let (name, args) = match kind {
                SurfaceEventKind::Created => ("SurfaceCreated", json!({})),
                SurfaceEventKind::Changed(v) => (
                    "SurfaceChanged",
                    json!({ "width": v.width, "height": v.height }),
                ),
            };
            json!({
                "ph": "i",
                "name": name,
                "cat": "Lifecycle",
                "ts": ts,
                "pid": 0,
                "tid": RENDER_TID,
                "s": "p",
                "args": args,
            })
        }
        RecordedEvent::Frame(e) => json!({
            "ph": "i",
            "name": "Frame",
            "cat": "Frame",
            "ts": ts,
            "pid": 0,
            "tid": RENDER_TID,
            "s": "t",
            "args": {
                "frame_index": e.frame_index,
                "width": e.viewport.width,
                "height": e.viewport.height,
            }
        }),
        RecordedEvent::GraphicsError(e) => json!({
            "ph": "i",
            "name": "GraphicsError",
            "cat": "Error",
            "ts": ts,
            "pid": 0,
            "tid": RENDER_TID,
            "s": "g",
            "args": {
                "call": e.call,
                "description": e.description,
            }
        }),
        RecordedEvent::LifecycleError(e) => json!({
            "ph": "i",
            "name": "LifecycleRejected",
            "cat": "Error",
            "ts": ts,
            "pid": 0,
            "tid": RENDER_TID,
            "s": "g",
            "args": {
                "reason": e.to_string(),
            }
        }),
    }
}

fn us(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use kurbo::Vec2;
    use touchgl_core::lifecycle::{LifecycleError, Viewport};
    use touchgl_core::pointer::PointerAction;
    use touchgl_core::time::EventTime;
    use touchgl_core::trace::{
        FrameTraceEvent, GestureTraceEvent, PointerTraceEvent, TraceSink,
    };

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_surface(&SurfaceEventKind::Changed(Viewport::new(640, 480)));
        rec.on_pointer_event(&PointerTraceEvent {
            time: EventTime::from_millis(5),
            action: PointerAction::Move,
            pointer_count: 1,
            history_len: 2,
        });
        rec.on_gesture(&GestureTraceEvent {
            time: EventTime::from_millis(5),
            gesture: Gesture::Move(Vec2::new(0.5, -0.25)),
        });
        rec.on_frame(&FrameTraceEvent {
            frame_index: 9,
            viewport: Viewport::new(640, 480),
        });
        rec.on_lifecycle_error(&LifecycleError::NoViewport);

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        // Should parse as a JSON array.
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 5);

        assert_eq!(parsed[0]["name"], "SurfaceChanged");
        assert_eq!(parsed[0]["args"]["width"], 640);
        assert_eq!(parsed[0]["tid"], RENDER_TID);

        assert_eq!(parsed[1]["ph"], "i");
        assert_eq!(parsed[1]["args"]["action"], "Move");
        assert_eq!(parsed[1]["args"]["event_time_ns"], 5_000_000);
        assert_eq!(parsed[1]["tid"], INPUT_TID);

        assert_eq!(parsed[2]["name"], "Move");
        assert_eq!(parsed[2]["args"]["signal"]["dy"], -0.25);

        assert_eq!(parsed[3]["args"]["frame_index"], 9);
        assert_eq!(
            parsed[4]["args"]["reason"],
            "no viewport reported since surface creation"
        );
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
