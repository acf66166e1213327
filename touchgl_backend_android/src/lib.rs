// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Android surface glue for touchgl.
//!
//! This crate is the Rust side of a `GLSurfaceView`-style widget:
//!
//! - [`TouchSurface`]: receives pointer events from the platform and hands
//!   each one to a single [`TouchListener`]
//! - [`GestureListener`]: the listener that turns pointer events into
//!   move/scale/rotate signals on the application's
//!   [`GestureSink`](touchgl_core::gesture::GestureSink)
//! - [`SurfaceRenderer`]: receives the render thread's created/changed/draw
//!   callbacks and drives a [`RenderHost`](touchgl_render::RenderHost)
//! - [`SurfaceConfig`]: what the platform glue should ask EGL for
//!
//! The platform glue (JNI or `NativeActivity`) converts native motion events
//! into [`PointerEvent`](touchgl_core::pointer::PointerEvent)s, calls
//! [`TouchSurface::on_touch_event`] on the UI thread, and calls the
//! [`SurfaceRenderer`] callbacks on the render thread. Nothing here
//! synchronizes the two threads; the gesture sink is `Send` and the
//! application decides how its state reaches the next frame.
//!
//! Diagnostics go to the [`log`] facade.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Forwards trace events to an attached
//!   [`TraceSink`](touchgl_core::trace::TraceSink).

mod config;
mod listener;
mod redraw;
mod renderer;
mod surface;

pub use config::{EglConfig, RenderMode, SurfaceConfig};
pub use listener::GestureListener;
pub use redraw::RedrawRequester;
pub use renderer::SurfaceRenderer;
pub use surface::{TouchListener, TouchSurface};
