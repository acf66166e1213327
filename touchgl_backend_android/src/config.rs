// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface configuration read by the platform glue.

/// Framebuffer bit depths to request from the EGL config chooser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EglConfig {
    /// Red bits.
    pub red: u8,
    /// Green bits.
    pub green: u8,
    /// Blue bits.
    pub blue: u8,
    /// Alpha bits.
    pub alpha: u8,
    /// Depth buffer bits.
    pub depth: u8,
    /// Stencil buffer bits.
    pub stencil: u8,
}

impl EglConfig {
    /// RGBA8888 with a 16-bit depth buffer and no stencil.
    pub const RGBA8888_DEPTH16: Self = Self {
        red: 8,
        green: 8,
        blue: 8,
        alpha: 8,
        depth: 16,
        stencil: 0,
    };
}

impl Default for EglConfig {
    fn default() -> Self {
        Self::RGBA8888_DEPTH16
    }
}

/// When the render thread calls the draw callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Every vsync.
    #[default]
    Continuous,
    /// Only after a redraw request.
    WhenDirty,
}

/// Everything the platform glue configures on the native surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceConfig {
    /// `EGL_CONTEXT_CLIENT_VERSION`.
    pub client_version: u8,
    /// Bit depths for the config chooser.
    pub egl: EglConfig,
    /// Keep the EGL context while the activity is paused.
    pub preserve_context_on_pause: bool,
    /// Draw scheduling.
    pub render_mode: RenderMode,
    /// Whether the view skips its own `onDraw`.
    pub will_not_draw: bool,
}

impl SurfaceConfig {
    /// OpenGL ES 3.0, RGBA8888 + depth16, context preserved on pause,
    /// continuous rendering.
    pub const DEFAULT: Self = Self {
        client_version: 3,
        egl: EglConfig::RGBA8888_DEPTH16,
        preserve_context_on_pause: true,
        render_mode: RenderMode::Continuous,
        will_not_draw: false,
    };

    /// Returns a copy with a different render mode.
    #[must_use]
    pub const fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requests_gles3_rgba8888_depth16() {
        let c = SurfaceConfig::default();
        assert_eq!(c.client_version, 3);
        assert_eq!(c.egl, EglConfig::RGBA8888_DEPTH16);
        assert_eq!((c.egl.depth, c.egl.stencil), (16, 0));
        assert!(c.preserve_context_on_pause);
        assert_eq!(c.render_mode, RenderMode::Continuous);
        assert!(!c.will_not_draw);
    }

    #[test]
    fn render_mode_override() {
        let c = SurfaceConfig::DEFAULT.with_render_mode(RenderMode::WhenDirty);
        assert_eq!(c.render_mode, RenderMode::WhenDirty);
        assert_eq!(c.client_version, 3);
    }
}
