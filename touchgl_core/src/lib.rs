// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events, gesture recognition and surface lifecycle for touch-driven
//! GL surfaces.
//!
//! `touchgl_core` holds everything in the touch-to-transform path that does
//! not touch a graphics API or a platform widget. It is `no_std` compatible
//! (with `alloc`), so the decision logic can be unit tested without any
//! surface present.
//!
//! # Architecture
//!
//! ```text
//!   Platform pointer event
//!       │
//!       ▼
//!   PointerEvent ──► GestureRecognizer::recognize()
//!                        │            │
//!                        ▼            ▼
//!                 ScaleDetector   VelocityTracker (per event)
//!                        │            │
//!                        ▼            ▼
//!                classify_scale()  classify_motion()
//!                        │            │
//!                        └─────┬──────┘
//!                              ▼
//!                   Recognition::dispatch() ──► GestureSink
//! ```
//!
//! **[`pointer`]**: Pointer snapshots with batched history.
//!
//! **[`velocity`]**: Least-squares velocity estimator over one event's
//! samples.
//!
//! **[`scale`]**: Pinch recognizer reporting span ratios.
//!
//! **[`gesture`]**: Pure classification into move, rotate and scale
//! signals, plus the [`GestureSink`](gesture::GestureSink) capability the
//! application implements.
//!
//! **[`lifecycle`]**: The created/changed/running surface state machine and
//! the stored viewport.
//!
//! **[`time`]**: Monotonic event time in nanoseconds.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! input and frame instrumentation, with a zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod gesture;
pub mod lifecycle;
pub mod pointer;
pub mod scale;
pub mod time;
pub mod trace;
pub mod velocity;
