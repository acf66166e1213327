// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-thread side of the surface.

use core::fmt;

use touchgl_core::gesture::{GestureRecognizer, GestureSink};
use touchgl_core::trace::{
    FrameTraceEvent, GraphicsErrorTraceEvent, SurfaceEventKind, TraceSink, Tracer,
};
use touchgl_render::{GraphicsContext, HostError, RenderHost, RenderLifecycle};

use crate::config::SurfaceConfig;
use crate::listener::GestureListener;
use crate::surface::TouchSurface;

/// Drives a [`RenderHost`] from the platform's render-thread callbacks.
///
/// Platform callbacks cannot return errors, so every failure is logged and
/// traced here before being handed back to the glue, which decides whether
/// it is fatal.
pub struct SurfaceRenderer<C, R> {
    host: RenderHost<C>,
    app: R,
    trace: Option<Box<dyn TraceSink + Send>>,
}

impl<C: fmt::Debug, R: fmt::Debug> fmt::Debug for SurfaceRenderer<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceRenderer")
            .field("host", &self.host)
            .field("app", &self.app)
            .field("traced", &self.trace.is_some())
            .finish()
    }
}

impl<C, R> SurfaceRenderer<C, R>
where
    C: GraphicsContext,
    R: RenderLifecycle<C>,
{
    /// Wraps a context and the application's lifecycle callbacks.
    #[must_use]
    pub fn new(context: C, app: R) -> Self {
        Self {
            host: RenderHost::new(context),
            app,
            trace: None,
        }
    }

    /// Configures `surface` with `config`, installs a [`GestureListener`]
    /// that sends signals to `gestures`, and returns the renderer.
    ///
    /// The listener uses the default recognizer and requests redraws through
    /// the surface's own flag.
    pub fn attach<S>(
        surface: &mut TouchSurface,
        config: SurfaceConfig,
        context: C,
        app: R,
        gestures: S,
    ) -> Self
    where
        S: GestureSink + Send + 'static,
    {
        surface.configure(config);
        surface.set_touch_listener(GestureListener::new(
            GestureRecognizer::default(),
            gestures,
            surface.redraw_requester(),
        ));
        log::debug!(
            "attached renderer: GLES {} {:?} render_mode={:?}",
            config.client_version,
            config.egl,
            config.render_mode
        );
        Self::new(context, app)
    }

    /// Forwards surface and frame events to `sink` (with the `trace`
    /// feature).
    #[must_use]
    pub fn with_trace_sink(mut self, sink: Box<dyn TraceSink + Send>) -> Self {
        self.trace = Some(sink);
        self
    }

    /// The render host.
    #[must_use]
    pub fn host(&self) -> &RenderHost<C> {
        &self.host
    }

    /// The render host, mutably.
    pub fn host_mut(&mut self) -> &mut RenderHost<C> {
        &mut self.host
    }

    /// The application's lifecycle implementation.
    #[must_use]
    pub fn app(&self) -> &R {
        &self.app
    }

    /// The application's lifecycle implementation, mutably.
    pub fn app_mut(&mut self) -> &mut R {
        &mut self.app
    }

    /// Render-thread callback: a graphics context was created.
    ///
    /// # Errors
    ///
    /// Whatever [`RenderHost::surface_created`] returns.
    pub fn on_surface_created(&mut self) -> Result<(), HostError> {
        let result = self.host.surface_created(&mut self.app);
        if result.is_ok() {
            log::info!("surface created");
            self.tracer().surface(&SurfaceEventKind::Created);
        }
        self.report("surface created", result)
    }

    /// Render-thread callback: the surface was resized.
    ///
    /// # Errors
    ///
    /// Whatever [`RenderHost::surface_changed`] returns.
    pub fn on_surface_changed(&mut self, width: u32, height: u32) -> Result<(), HostError> {
        let result = self.host.surface_changed(&mut self.app, width, height);
        if result.is_ok() {
            let viewport = self.host.viewport();
            log::info!("surface changed to {}x{}", viewport.width, viewport.height);
            self.tracer().surface(&SurfaceEventKind::Changed(viewport));
        }
        self.report("surface changed", result)
    }

    /// Render-thread callback: draw a frame. Returns the frame index.
    ///
    /// # Errors
    ///
    /// Whatever [`RenderHost::draw_frame`] returns.
    pub fn on_draw_frame(&mut self) -> Result<u64, HostError> {
        let result = self.host.draw_frame(&mut self.app);
        if let Ok(frame_index) = result {
            let viewport = self.host.viewport();
            self.tracer().frame(&FrameTraceEvent {
                frame_index,
                viewport,
            });
        }
        self.report("draw frame", result)
    }

    fn tracer(&mut self) -> Tracer<'_> {
        match &mut self.trace {
            Some(sink) => Tracer::new(sink.as_mut()),
            None => Tracer::none(),
        }
    }

    fn report<T>(&mut self, callback: &str, result: Result<T, HostError>) -> Result<T, HostError> {
        if let Err(err) = &result {
            match err {
                HostError::Graphics(e) => {
                    log::error!("{callback}: {e}");
                    self.tracer().graphics_error(&GraphicsErrorTraceEvent {
                        call: e.call,
                        description: e.description,
                    });
                }
                HostError::Lifecycle(e) => {
                    log::warn!("{callback} rejected: {e}");
                    self.tracer().lifecycle_error(e);
                }
            }
        }
        result
    }
}
