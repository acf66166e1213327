// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for touchgl
//! diagnostics.
//!
//! This crate provides [`TraceSink`](touchgl_core::trace::TraceSink)
//! implementations for development:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory recording stamped with the time
//!   since the recorder was created.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from a
//!   recording.
//!
//! Sinks that cross to the input thread must be `Send`; all three are.

pub mod chrome;
pub mod pretty;
pub mod recorder;
