// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`GraphicsContext`] that records calls instead of issuing them.
//!
//! [`RecordingContext`] tracks the state a real context would (bound
//! framebuffer, viewport, enabled capabilities, depth mask) and logs every
//! call in order, so tests can assert on both the sequence and the result.
//! Errors are injected either immediately with
//! [`push_error`](RecordingContext::push_error) or latched by the next call
//! to a named entry point with [`fail_on`](RecordingContext::fail_on).

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use touchgl_core::lifecycle::Viewport;

use crate::context::{BlendFactor, Capability, ClearMask, Color, GraphicsContext};
use crate::error::ErrorCode;
use crate::resource::{BlendState, FramebufferId, MeshHandle, ShaderHandle};

/// One recorded graphics call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlCall {
    /// `glEnable`.
    Enable(Capability),
    /// `glDisable`.
    Disable(Capability),
    /// `glBlendFuncSeparate`.
    BlendFuncSeparate(BlendState),
    /// `glClearColor`.
    ClearColor(Color),
    /// `glDepthMask`.
    DepthMask(bool),
    /// `glClear`.
    Clear(ClearMask),
    /// `glBindFramebuffer`.
    BindFramebuffer(FramebufferId),
    /// `glViewport`.
    Viewport {
        /// Left edge.
        x: i32,
        /// Bottom edge.
        y: i32,
        /// Width.
        width: u32,
        /// Height.
        height: u32,
    },
    /// `glUseProgram`.
    UseProgram(ShaderHandle),
    /// Mesh draw.
    DrawMesh(MeshHandle),
}

impl GlCall {
    /// The GL entry point name, as used in error reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Enable(_) => "glEnable",
            Self::Disable(_) => "glDisable",
            Self::BlendFuncSeparate(_) => "glBlendFuncSeparate",
            Self::ClearColor(_) => "glClearColor",
            Self::DepthMask(_) => "glDepthMask",
            Self::Clear(_) => "glClear",
            Self::BindFramebuffer(_) => "glBindFramebuffer",
            Self::Viewport { .. } => "glViewport",
            Self::UseProgram(_) => "glUseProgram",
            Self::DrawMesh(_) => "glDrawElements",
        }
    }
}

/// State captured when a mesh was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawRecord {
    /// The mesh drawn.
    pub mesh: MeshHandle,
    /// The program in use.
    pub program: Option<ShaderHandle>,
    /// The framebuffer bound.
    pub framebuffer: FramebufferId,
    /// The viewport size set.
    pub viewport: Option<Viewport>,
    /// Whether depth testing was on.
    pub depth_test: bool,
    /// Whether depth writes were on.
    pub depth_write: bool,
}

/// Records calls and tracks the resulting context state.
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: Vec<GlCall>,
    draws: Vec<DrawRecord>,
    pending: VecDeque<ErrorCode>,
    failures: Vec<(&'static str, ErrorCode)>,
    framebuffer: FramebufferId,
    viewport: Option<Viewport>,
    program: Option<ShaderHandle>,
    blend: bool,
    depth_test: bool,
    depth_write: bool,
}

impl RecordingContext {
    /// Creates a context in GL's initial state: default framebuffer bound,
    /// blending and depth test off, depth writes on.
    #[must_use]
    pub fn new() -> Self {
        Self {
            depth_write: true,
            ..Self::default()
        }
    }

    /// Latches `code` as if the last call had failed.
    pub fn push_error(&mut self, code: ErrorCode) {
        self.pending.push_back(code);
    }

    /// Latches `code` when `call` (e.g. `"glClear"`) is next issued.
    pub fn fail_on(&mut self, call: &'static str, code: ErrorCode) {
        self.failures.push((call, code));
    }

    /// Every call so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[GlCall] {
        &self.calls
    }

    /// Returns and clears the call log.
    pub fn take_calls(&mut self) -> Vec<GlCall> {
        core::mem::take(&mut self.calls)
    }

    /// Every mesh draw so far.
    #[must_use]
    pub fn draws(&self) -> &[DrawRecord] {
        &self.draws
    }

    /// Currently bound framebuffer.
    #[must_use]
    pub fn bound_framebuffer(&self) -> FramebufferId {
        self.framebuffer
    }

    /// Last viewport set, if any.
    #[must_use]
    pub fn current_viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Whether `capability` is enabled.
    #[must_use]
    pub fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::Blend => self.blend,
            Capability::DepthTest => self.depth_test,
        }
    }

    /// Whether depth writes are on.
    #[must_use]
    pub fn depth_write(&self) -> bool {
        self.depth_write
    }

    fn record(&mut self, call: GlCall) {
        let name = call.name();
        if let Some(i) = self.failures.iter().position(|(n, _)| *n == name) {
            let (_, code) = self.failures.remove(i);
            self.pending.push_back(code);
        }
        self.calls.push(call);
    }

    fn set_capability(&mut self, capability: Capability, on: bool) {
        match capability {
            Capability::Blend => self.blend = on,
            Capability::DepthTest => self.depth_test = on,
        }
    }
}

impl GraphicsContext for RecordingContext {
    fn enable(&mut self, capability: Capability) {
        self.record(GlCall::Enable(capability));
        self.set_capability(capability, true);
    }

    fn disable(&mut self, capability: Capability) {
        self.record(GlCall::Disable(capability));
        self.set_capability(capability, false);
    }

    fn blend_func_separate(
        &mut self,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) {
        self.record(GlCall::BlendFuncSeparate(BlendState {
            src_rgb,
            dst_rgb,
            src_alpha,
            dst_alpha,
        }));
    }

    fn clear_color(&mut self, color: Color) {
        self.record(GlCall::ClearColor(color));
    }

    fn depth_mask(&mut self, write: bool) {
        self.record(GlCall::DepthMask(write));
        self.depth_write = write;
    }

    fn clear(&mut self, mask: ClearMask) {
        self.record(GlCall::Clear(mask));
    }

    fn bind_framebuffer(&mut self, id: FramebufferId) {
        self.record(GlCall::BindFramebuffer(id));
        self.framebuffer = id;
    }

    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.record(GlCall::Viewport {
            x,
            y,
            width,
            height,
        });
        self.viewport = Some(Viewport::new(width, height));
    }

    fn use_program(&mut self, program: ShaderHandle) {
        self.record(GlCall::UseProgram(program));
        self.program = Some(program);
    }

    fn draw_mesh(&mut self, mesh: MeshHandle) {
        self.record(GlCall::DrawMesh(mesh));
        self.draws.push(DrawRecord {
            mesh,
            program: self.program,
            framebuffer: self.framebuffer,
            viewport: self.viewport,
            depth_test: self.depth_test,
            depth_write: self.depth_write,
        });
    }

    fn get_error(&mut self) -> Option<ErrorCode> {
        self.pending.pop_front()
    }
}
