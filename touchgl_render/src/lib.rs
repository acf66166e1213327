// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render host and graphics context contract for touchgl.
//!
//! This crate sits between the platform's render-thread callbacks and the
//! application's drawing code. It defines:
//!
//! - [`GraphicsContext`]: the handful of OpenGL ES 3.0 calls the host issues,
//!   so a real GL binding and a test double are interchangeable
//! - [`RenderHost`]: the created/changed/draw lifecycle plus the `clear` and
//!   `draw` primitives the application calls from its draw callback
//! - [`RenderLifecycle`]: the callbacks the application implements
//! - [`GraphicsError`] and [`HostError`]: the only failure modes
//! - [`Framebuffer`], [`MeshHandle`], [`Shader`]: opaque handles to
//!   context-owned resources
//!
//! The host never allocates or frees graphics resources; it only binds them.
//!
//! # Frame flow
//!
//! ```text
//!   surface_created ──► enable(Blend) ──► check ──► on_surface_created
//!   surface_changed ──► store viewport ──────────► on_surface_changed
//!   draw_frame ──► clear(default, black) ────────► on_draw_frame
//!                                                     │
//!                                    clear / draw / draw_to (any order)
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod context;
mod error;
mod host;
pub mod recording;
mod resource;
mod target;

pub use context::{BlendFactor, Capability, ClearMask, Color, GraphicsContext};
pub use error::{ErrorCode, GraphicsError, HostError, check};
pub use host::{RenderHost, RenderLifecycle};
pub use resource::{BlendState, Framebuffer, FramebufferId, MeshHandle, Shader, ShaderHandle};
pub use target::TargetBinding;
