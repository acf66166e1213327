// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-thread redraw requests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shareable "surface is dirty" flag.
///
/// The input thread sets it; the platform glue drains it and schedules a
/// draw (the `invalidate` counterpart). Requests coalesce: any number of
/// requests before a drain produce one redraw.
#[derive(Clone, Debug, Default)]
pub struct RedrawRequester {
    dirty: Arc<AtomicBool>,
}

impl RedrawRequester {
    /// Creates a clean flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the surface dirty.
    pub fn request(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Returns `true` if a redraw is pending, without clearing it.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Clears the flag. Returns `true` if a redraw was pending.
    pub fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }
}
