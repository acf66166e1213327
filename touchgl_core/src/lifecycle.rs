// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface lifecycle state machine.
//!
//! ```text
//!                 created            changed(w, h)
//!   Uninitialized ───────► Created ───────────────► Changed ◄──┐
//!                             ▲                        │       │ changed
//!                             │ created                │ frame │
//!                             │ (context recreated)    ▼       │
//!                             └─────────────────── Running ────┘
//! ```
//!
//! The machine guarantees the ordering the application relies on: the
//! created signal fires once per graphics context before any frame, and a
//! non-empty viewport has been reported before the first frame of that
//! context. A context that fails to come up puts the machine back in
//! `Uninitialized` until the next successful create.

use core::fmt;

/// Viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// The placeholder viewport used before the first surface change.
    pub const PLACEHOLDER: Self = Self {
        width: 1,
        height: 1,
    };

    /// Creates a viewport.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

/// Where the surface is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfaceState {
    /// No graphics context yet.
    #[default]
    Uninitialized,
    /// A context exists but no viewport has been reported for it.
    Created,
    /// A viewport was reported and no frame has been drawn at that size.
    Changed,
    /// Frames are being drawn.
    Running,
}

/// A lifecycle transition that is not allowed from the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleError {
    /// Surface change or frame before the surface was created.
    NotCreated,
    /// Frame before any viewport was reported for the current context.
    NoViewport,
    /// Frame while the reported viewport has a zero dimension.
    EmptyViewport(Viewport),
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCreated => write!(f, "surface has not been created"),
            Self::NoViewport => write!(f, "no viewport reported since surface creation"),
            Self::EmptyViewport(v) => {
                write!(f, "cannot draw to empty viewport {}x{}", v.width, v.height)
            }
        }
    }
}

impl core::error::Error for LifecycleError {}

/// Tracks the lifecycle state and the last reported viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceLifecycle {
    state: SurfaceState,
    viewport: Viewport,
    frame_index: u64,
}

impl SurfaceLifecycle {
    /// Creates an uninitialized lifecycle with the placeholder viewport.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SurfaceState::Uninitialized,
            viewport: Viewport::PLACEHOLDER,
            frame_index: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SurfaceState {
        self.state
    }

    /// Last reported viewport, or [`Viewport::PLACEHOLDER`].
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of frames begun so far, across contexts.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// The current graphics context is gone. Frames and resizes are rejected
    /// until [`created`](Self::created). The stored viewport is kept.
    pub fn lost(&mut self) {
        self.state = SurfaceState::Uninitialized;
    }

    /// A graphics context was created (or recreated after loss).
    pub fn created(&mut self) {
        self.state = SurfaceState::Created;
    }

    /// The surface was resized. The size is stored as reported, even when a
    /// dimension is zero; [`check_frame`](Self::check_frame) refuses to draw
    /// until it is not.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::NotCreated`] before [`created`](Self::created).
    pub fn changed(&mut self, width: u32, height: u32) -> Result<Viewport, LifecycleError> {
        if self.state == SurfaceState::Uninitialized {
            return Err(LifecycleError::NotCreated);
        }
        self.viewport = Viewport::new(width, height);
        self.state = SurfaceState::Changed;
        Ok(self.viewport)
    }

    /// Checks that a frame may be drawn now, without counting it.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::NotCreated`], [`LifecycleError::NoViewport`] or
    /// [`LifecycleError::EmptyViewport`] when the ordering guarantees do not
    /// hold yet.
    pub fn check_frame(&self) -> Result<(), LifecycleError> {
        match self.state {
            SurfaceState::Uninitialized => Err(LifecycleError::NotCreated),
            SurfaceState::Created => Err(LifecycleError::NoViewport),
            SurfaceState::Changed | SurfaceState::Running if self.viewport.is_empty() => {
                Err(LifecycleError::EmptyViewport(self.viewport))
            }
            SurfaceState::Changed | SurfaceState::Running => Ok(()),
        }
    }

    /// A frame is being drawn. Returns its index.
    ///
    /// # Errors
    ///
    /// Whatever [`check_frame`](Self::check_frame) reports. Nothing is
    /// counted on error.
    pub fn begin_frame(&mut self) -> Result<u64, LifecycleError> {
        self.check_frame()?;
        self.state = SurfaceState::Running;
        let index = self.frame_index;
        self.frame_index += 1;
        Ok(index)
    }
}
