// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles to context-owned resources.
//!
//! The graphics context allocates and frees these; the host only binds them.
//! Ids are passed through without interpretation.

use core::fmt;

use crate::context::BlendFactor;

/// A framebuffer object name. `0` is the window's default framebuffer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FramebufferId(pub u32);

impl FramebufferId {
    /// The default (on-screen) framebuffer.
    pub const DEFAULT: Self = Self(0);
}

impl fmt::Debug for FramebufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FramebufferId({})", self.0)
    }
}

/// A vertex array plus the draw call that renders it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeshHandle(pub u32);

impl fmt::Debug for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MeshHandle({})", self.0)
    }
}

/// A linked shader program name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShaderHandle(pub u32);

impl fmt::Debug for ShaderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShaderHandle({})", self.0)
    }
}

/// An offscreen render target and its size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Framebuffer {
    /// Framebuffer object name.
    pub id: FramebufferId,
    /// Width of the attachments.
    pub width: u32,
    /// Height of the attachments.
    pub height: u32,
}

impl Framebuffer {
    /// Wraps an existing framebuffer object.
    #[must_use]
    pub const fn new(id: u32, width: u32, height: u32) -> Self {
        Self {
            id: FramebufferId(id),
            width,
            height,
        }
    }
}

/// Separate RGB and alpha blend factors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlendState {
    /// Source RGB factor.
    pub src_rgb: BlendFactor,
    /// Destination RGB factor.
    pub dst_rgb: BlendFactor,
    /// Source alpha factor.
    pub src_alpha: BlendFactor,
    /// Destination alpha factor.
    pub dst_alpha: BlendFactor,
}

impl BlendState {
    /// Source replaces destination.
    pub const REPLACE: Self = Self::uniform(BlendFactor::One, BlendFactor::Zero);

    /// Uses the same factors for color and alpha.
    #[must_use]
    pub const fn uniform(src: BlendFactor, dst: BlendFactor) -> Self {
        Self {
            src_rgb: src,
            dst_rgb: dst,
            src_alpha: src,
            dst_alpha: dst,
        }
    }
}

impl Default for BlendState {
    fn default() -> Self {
        Self::REPLACE
    }
}

/// A shader program and the pipeline state applied with it on every draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shader {
    /// Program name.
    pub handle: ShaderHandle,
    /// Blend factors.
    pub blend: BlendState,
    /// Whether fragments are depth tested.
    pub depth_test: bool,
    /// Whether fragments write depth.
    pub depth_write: bool,
}

impl Shader {
    /// Wraps a program with replace blending and depth test and write on.
    #[must_use]
    pub const fn new(handle: u32) -> Self {
        Self {
            handle: ShaderHandle(handle),
            blend: BlendState::REPLACE,
            depth_test: true,
            depth_write: true,
        }
    }

    /// Sets the same blend factors for color and alpha.
    #[must_use]
    pub const fn with_blend(mut self, src: BlendFactor, dst: BlendFactor) -> Self {
        self.blend = BlendState::uniform(src, dst);
        self
    }

    /// Sets separate color and alpha blend factors.
    #[must_use]
    pub const fn with_blend_state(mut self, blend: BlendState) -> Self {
        self.blend = blend;
        self
    }

    /// Enables or disables depth testing.
    #[must_use]
    pub const fn with_depth_test(mut self, enabled: bool) -> Self {
        self.depth_test = enabled;
        self
    }

    /// Enables or disables depth writes.
    #[must_use]
    pub const fn with_depth_write(mut self, enabled: bool) -> Self {
        self.depth_write = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_defaults() {
        let s = Shader::new(3);
        assert_eq!(s.handle, ShaderHandle(3));
        assert_eq!(s.blend, BlendState::REPLACE);
        assert!(s.depth_test);
        assert!(s.depth_write);
    }

    #[test]
    fn shader_builder() {
        let s = Shader::new(1)
            .with_blend(BlendFactor::One, BlendFactor::OneMinusSrcAlpha)
            .with_depth_write(false);
        assert_eq!(s.blend.src_alpha, BlendFactor::One);
        assert_eq!(s.blend.dst_rgb, BlendFactor::OneMinusSrcAlpha);
        assert!(s.depth_test);
        assert!(!s.depth_write);
    }

    #[test]
    fn debug_formats() {
        assert_eq!(alloc::format!("{:?}", FramebufferId::DEFAULT), "FramebufferId(0)");
        assert_eq!(alloc::format!("{:?}", MeshHandle(7)), "MeshHandle(7)");
    }
}
