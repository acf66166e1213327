// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render host: lifecycle callbacks and drawing primitives.

use touchgl_core::lifecycle::{SurfaceLifecycle, SurfaceState, Viewport};

use crate::context::{Capability, ClearMask, Color, GraphicsContext};
use crate::error::{GraphicsError, HostError, check};
use crate::resource::{Framebuffer, MeshHandle, Shader};
use crate::target::TargetBinding;

/// Render-thread callbacks implemented by the application.
///
/// Each callback receives the host so it can call [`RenderHost::clear`],
/// [`RenderHost::draw`] and [`RenderHost::draw_to`]. Returning an error stops
/// the current callback; the host does not retry.
pub trait RenderLifecycle<C: GraphicsContext> {
    /// A graphics context was created. Load shaders and meshes here.
    ///
    /// Called once per context, before any other callback for that context.
    fn on_surface_created(&mut self, host: &mut RenderHost<C>) -> Result<(), HostError>;

    /// The surface has a new size. The host has already stored it as the
    /// default target's viewport.
    fn on_surface_changed(
        &mut self,
        host: &mut RenderHost<C>,
        width: u32,
        height: u32,
    ) -> Result<(), HostError>;

    /// Draw one frame. The default target has already been cleared to
    /// opaque black.
    fn on_draw_frame(&mut self, host: &mut RenderHost<C>) -> Result<(), HostError>;
}

/// Drives a [`GraphicsContext`] through the surface lifecycle.
///
/// The host owns the context and the stored viewport. Drawing state is not
/// saved or restored between calls: each `clear` or `draw` binds its target
/// and sets the state it needs.
#[derive(Debug)]
pub struct RenderHost<C> {
    context: C,
    lifecycle: SurfaceLifecycle,
}

impl<C: GraphicsContext> RenderHost<C> {
    /// Wraps a context. No calls are issued until
    /// [`surface_created`](Self::surface_created).
    #[must_use]
    pub const fn new(context: C) -> Self {
        Self {
            context,
            lifecycle: SurfaceLifecycle::new(),
        }
    }

    /// The viewport of the default target.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.lifecycle.viewport()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SurfaceState {
        self.lifecycle.state()
    }

    /// Frames drawn so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.lifecycle.frame_count()
    }

    /// The wrapped context.
    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// The wrapped context, mutably.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consumes the host and returns the context.
    pub fn into_context(self) -> C {
        self.context
    }

    /// Platform callback: a graphics context was created.
    ///
    /// Enables blending, then calls [`RenderLifecycle::on_surface_created`].
    /// Any previous context is treated as lost first, so frames are rejected
    /// until this call succeeds.
    ///
    /// # Errors
    ///
    /// A [`GraphicsError`] for `glEnable`, in which case the application is
    /// not called, or whatever the application returns.
    pub fn surface_created<R>(&mut self, app: &mut R) -> Result<(), HostError>
    where
        R: RenderLifecycle<C> + ?Sized,
    {
        self.lifecycle.lost();
        self.context.enable(Capability::Blend);
        check(&mut self.context, "Failed to enable blending", "glEnable")?;
        self.lifecycle.created();
        app.on_surface_created(self)
    }

    /// Platform callback: the surface was resized.
    ///
    /// Stores the viewport, then calls [`RenderLifecycle::on_surface_changed`].
    ///
    /// # Errors
    ///
    /// [`LifecycleError::NotCreated`] before the surface was created, or
    /// whatever the application returns. A zero-sized surface is stored and
    /// reported; frames are refused until it grows.
    ///
    /// [`LifecycleError::NotCreated`]: touchgl_core::lifecycle::LifecycleError::NotCreated
    pub fn surface_changed<R>(&mut self, app: &mut R, width: u32, height: u32) -> Result<(), HostError>
    where
        R: RenderLifecycle<C> + ?Sized,
    {
        let viewport = self.lifecycle.changed(width, height)?;
        app.on_surface_changed(self, viewport.width, viewport.height)
    }

    /// Platform callback: draw a frame. Returns the frame index.
    ///
    /// Clears the default target to opaque black, then calls
    /// [`RenderLifecycle::on_draw_frame`]. The frame is counted once the
    /// clear succeeds.
    ///
    /// # Errors
    ///
    /// A lifecycle error if the surface has no context or no usable viewport
    /// yet, a [`GraphicsError`] from the clear, or whatever the application
    /// returns.
    pub fn draw_frame<R>(&mut self, app: &mut R) -> Result<u64, HostError>
    where
        R: RenderLifecycle<C> + ?Sized,
    {
        self.lifecycle.check_frame()?;
        self.clear(None, Color::BLACK)?;
        let index = self.lifecycle.begin_frame()?;
        app.on_draw_frame(self)?;
        Ok(index)
    }

    /// Clears color and depth of `target`, or of the default target for
    /// `None`.
    ///
    /// Depth writes are left enabled afterwards.
    ///
    /// # Errors
    ///
    /// The first graphics call that fails.
    pub fn clear(&mut self, target: Option<&Framebuffer>, color: Color) -> Result<(), GraphicsError> {
        self.use_target(target)?;
        self.context.clear_color(color);
        check(&mut self.context, "Failed to set clear color", "glClearColor")?;
        self.context.depth_mask(true);
        check(&mut self.context, "Failed to set depth write mask", "glDepthMask")?;
        self.context.clear(ClearMask::COLOR | ClearMask::DEPTH);
        check(&mut self.context, "Failed to clear framebuffer", "glClear")
    }

    /// Draws `mesh` with `shader` to the default target.
    ///
    /// # Errors
    ///
    /// The first graphics call that fails.
    pub fn draw(&mut self, mesh: MeshHandle, shader: &Shader) -> Result<(), GraphicsError> {
        self.draw_to(mesh, shader, None)
    }

    /// Draws `mesh` with `shader` to `target`, or to the default target for
    /// `None`.
    ///
    /// # Errors
    ///
    /// The first graphics call that fails. Calls issued before the failure
    /// stay in effect.
    pub fn draw_to(
        &mut self,
        mesh: MeshHandle,
        shader: &Shader,
        target: Option<&Framebuffer>,
    ) -> Result<(), GraphicsError> {
        self.use_target(target)?;
        self.apply_shader(shader)?;
        self.context.draw_mesh(mesh);
        check(
            &mut self.context,
            "Failed to draw vertex array object",
            "glDrawElements",
        )
    }

    fn apply_shader(&mut self, shader: &Shader) -> Result<(), GraphicsError> {
        let ctx = &mut self.context;
        ctx.use_program(shader.handle);
        check(ctx, "Failed to use shader program", "glUseProgram")?;

        let blend = shader.blend;
        ctx.blend_func_separate(blend.src_rgb, blend.dst_rgb, blend.src_alpha, blend.dst_alpha);
        check(ctx, "Failed to set blend mode", "glBlendFuncSeparate")?;

        ctx.depth_mask(shader.depth_write);
        check(ctx, "Failed to update depth write mask", "glDepthMask")?;

        if shader.depth_test {
            ctx.enable(Capability::DepthTest);
            check(ctx, "Failed to enable depth test", "glEnable")
        } else {
            ctx.disable(Capability::DepthTest);
            check(ctx, "Failed to disable depth test", "glDisable")
        }
    }

    fn use_target(&mut self, target: Option<&Framebuffer>) -> Result<TargetBinding, GraphicsError> {
        let binding = TargetBinding::resolve(target, self.lifecycle.viewport());
        self.context.bind_framebuffer(binding.framebuffer);
        check(&mut self.context, "Failed to bind framebuffer", "glBindFramebuffer")?;
        self.context
            .viewport(0, 0, binding.viewport.width, binding.viewport.height);
        check(
            &mut self.context,
            "Failed to set viewport dimensions",
            "glViewport",
        )?;
        Ok(binding)
    }
}
