// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The graphics calls the render host issues.

use core::ops::BitOr;

use crate::error::ErrorCode;
use crate::resource::{FramebufferId, MeshHandle, ShaderHandle};

/// A server-side capability toggled with `glEnable`/`glDisable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `GL_BLEND`.
    Blend,
    /// `GL_DEPTH_TEST`.
    DepthTest,
}

/// Source or destination factor for blending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// `GL_ZERO`.
    Zero,
    /// `GL_ONE`.
    One,
    /// `GL_SRC_COLOR`.
    SrcColor,
    /// `GL_ONE_MINUS_SRC_COLOR`.
    OneMinusSrcColor,
    /// `GL_DST_COLOR`.
    DstColor,
    /// `GL_ONE_MINUS_DST_COLOR`.
    OneMinusDstColor,
    /// `GL_SRC_ALPHA`.
    SrcAlpha,
    /// `GL_ONE_MINUS_SRC_ALPHA`.
    OneMinusSrcAlpha,
    /// `GL_DST_ALPHA`.
    DstAlpha,
    /// `GL_ONE_MINUS_DST_ALPHA`.
    OneMinusDstAlpha,
}

/// Buffers cleared by [`GraphicsContext::clear`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClearMask(u8);

impl ClearMask {
    /// The color buffer.
    pub const COLOR: Self = Self(0b01);
    /// The depth buffer.
    pub const DEPTH: Self = Self(0b10);

    /// Returns `true` if every buffer in `other` is also in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ClearMask {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::fmt::Debug for ClearMask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut set = f.debug_set();
        if self.contains(Self::COLOR) {
            set.entry(&"COLOR");
        }
        if self.contains(Self::DEPTH) {
            set.entry(&"DEPTH");
        }
        set.finish()
    }
}

/// Linear RGBA clear color, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Opaque black, the per-frame clear color.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a color.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// The OpenGL ES 3.0 subset the render host drives.
///
/// Implementations forward each method to the matching GL call on the
/// current context. None of the methods report failure directly: as in GL,
/// errors are latched and read back with [`get_error`](Self::get_error),
/// which the host does after every call.
pub trait GraphicsContext {
    /// `glEnable`.
    fn enable(&mut self, capability: Capability);

    /// `glDisable`.
    fn disable(&mut self, capability: Capability);

    /// `glBlendFuncSeparate`.
    fn blend_func_separate(
        &mut self,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    );

    /// `glClearColor`.
    fn clear_color(&mut self, color: Color);

    /// `glDepthMask`.
    fn depth_mask(&mut self, write: bool);

    /// `glClear`.
    fn clear(&mut self, mask: ClearMask);

    /// `glBindFramebuffer(GL_FRAMEBUFFER, id)`.
    fn bind_framebuffer(&mut self, id: FramebufferId);

    /// `glViewport`.
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// `glUseProgram`.
    fn use_program(&mut self, program: ShaderHandle);

    /// Binds the mesh's vertex array and issues its draw call.
    fn draw_mesh(&mut self, mesh: MeshHandle);

    /// `glGetError`. Returns `None` for `GL_NO_ERROR`.
    fn get_error(&mut self) -> Option<ErrorCode>;
}
