// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render target resolution.

use touchgl_core::lifecycle::Viewport;

use crate::resource::{Framebuffer, FramebufferId};

/// The framebuffer and viewport a `clear` or `draw` binds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetBinding {
    /// Framebuffer to bind.
    pub framebuffer: FramebufferId,
    /// Viewport to set, anchored at the origin.
    pub viewport: Viewport,
}

impl TargetBinding {
    /// Resolves an optional offscreen target.
    ///
    /// `None` is the default framebuffer at the surface viewport; an
    /// offscreen target uses its own id and size.
    #[must_use]
    pub const fn resolve(target: Option<&Framebuffer>, surface: Viewport) -> Self {
        match target {
            None => Self {
                framebuffer: FramebufferId::DEFAULT,
                viewport: surface,
            },
            Some(fb) => Self {
                framebuffer: fb.id,
                viewport: Viewport::new(fb.width, fb.height),
            },
        }
    }
}
