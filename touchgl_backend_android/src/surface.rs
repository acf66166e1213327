// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The touch surface: the input half of the `GLSurfaceView` counterpart.

use core::fmt;

use touchgl_core::pointer::PointerEvent;

use crate::config::SurfaceConfig;
use crate::redraw::RedrawRequester;

/// Receives every pointer event delivered to a [`TouchSurface`].
pub trait TouchListener: Send {
    /// Handles one event. Returns `true` if it was consumed.
    fn on_touch(&mut self, event: &PointerEvent) -> bool;
}

/// Owns the surface configuration and the single touch listener.
///
/// Holds no gesture logic: events are passed through as-is and the
/// listener's answer is returned to the platform.
pub struct TouchSurface {
    config: SurfaceConfig,
    listener: Option<Box<dyn TouchListener>>,
    redraw: RedrawRequester,
}

impl fmt::Debug for TouchSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchSurface")
            .field("config", &self.config)
            .field("has_listener", &self.listener.is_some())
            .field("redraw", &self.redraw)
            .finish()
    }
}

impl Default for TouchSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchSurface {
    /// Creates a surface with the default configuration and no listener.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SurfaceConfig::DEFAULT,
            listener: None,
            redraw: RedrawRequester::new(),
        }
    }

    /// The configuration the platform glue should apply.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn configure(&mut self, config: SurfaceConfig) {
        self.config = config;
    }

    /// Installs the listener, replacing any previous one.
    pub fn set_touch_listener<L: TouchListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    /// Returns `true` once a listener is installed.
    #[must_use]
    pub fn has_touch_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Platform callback for a pointer event. Returns the listener's result.
    ///
    /// Without a listener the event is logged and reported as not consumed.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        match &mut self.listener {
            Some(listener) => listener.on_touch(event),
            None => {
                log::warn!(
                    "pointer event {:?} at {:?} arrived before a touch listener was set",
                    event.action,
                    event.time
                );
                false
            }
        }
    }

    /// Platform callback for an accessibility click. Always handled.
    #[must_use]
    pub fn perform_click(&mut self) -> bool {
        true
    }

    /// A handle for requesting redraws from any thread.
    #[must_use]
    pub fn redraw_requester(&self) -> RedrawRequester {
        self.redraw.clone()
    }

    /// Marks the surface dirty.
    pub fn request_redraw(&self) {
        self.redraw.request();
    }

    /// Drains the redraw flag. Returns `true` if a redraw was requested.
    pub fn take_redraw_request(&self) -> bool {
        self.redraw.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use touchgl_core::pointer::{Pointer, PointerAction};
    use touchgl_core::time::EventTime;

    struct Recorder {
        seen: Arc<Mutex<Vec<PointerAction>>>,
        answer: bool,
    }

    impl TouchListener for Recorder {
        fn on_touch(&mut self, event: &PointerEvent) -> bool {
            self.seen.lock().unwrap().push(event.action);
            self.answer
        }
    }

    fn event(action: PointerAction) -> PointerEvent {
        PointerEvent::new(action, EventTime::from_millis(1), vec![Pointer::new(0, 1.0, 1.0)])
    }

    #[test]
    fn forwards_each_event_and_returns_listener_result() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut surface = TouchSurface::new();
        surface.set_touch_listener(Recorder {
            seen: Arc::clone(&seen),
            answer: false,
        });
        assert!(!surface.on_touch_event(&event(PointerAction::Down)));
        assert!(!surface.on_touch_event(&event(PointerAction::Up)));
        assert_eq!(*seen.lock().unwrap(), vec![PointerAction::Down, PointerAction::Up]);
    }

    #[test]
    fn replacing_the_listener_routes_to_the_new_one() {
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));
        let mut surface = TouchSurface::new();
        surface.set_touch_listener(Recorder {
            seen: Arc::clone(&first),
            answer: true,
        });
        surface.set_touch_listener(Recorder {
            seen: Arc::clone(&second),
            answer: true,
        });
        assert!(surface.on_touch_event(&event(PointerAction::Move)));
        assert!(first.lock().unwrap().is_empty());
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    #[test]
    fn no_listener_means_not_consumed() {
        let mut surface = TouchSurface::new();
        assert!(!surface.has_touch_listener());
        assert!(!surface.on_touch_event(&event(PointerAction::Down)));
    }

    #[test]
    fn perform_click_is_handled() {
        assert!(TouchSurface::new().perform_click());
    }

    #[test]
    fn redraw_requests_are_drained_once() {
        let surface = TouchSurface::new();
        surface.redraw_requester().request();
        assert!(surface.take_redraw_request());
        assert!(!surface.take_redraw_request());
        surface.request_redraw();
        assert!(surface.take_redraw_request());
    }
}
