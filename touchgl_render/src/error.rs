// Copyright 2026 the touchgl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphics and host errors.
//!
//! Every graphics call the host makes is followed by [`check`], which drains
//! the context's latched error codes. A non-empty drain becomes a
//! [`GraphicsError`] naming the call and what the host was trying to do.
//! Nothing is retried.

use alloc::vec::Vec;
use core::fmt;

use touchgl_core::lifecycle::LifecycleError;

use crate::context::GraphicsContext;

/// Upper bound on codes drained per check. A lost context can report errors
/// indefinitely.
const MAX_DRAINED_ERRORS: usize = 16;

/// A code returned by `glGetError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `GL_INVALID_ENUM`.
    InvalidEnum,
    /// `GL_INVALID_VALUE`.
    InvalidValue,
    /// `GL_INVALID_OPERATION`.
    InvalidOperation,
    /// `GL_OUT_OF_MEMORY`.
    OutOfMemory,
    /// `GL_INVALID_FRAMEBUFFER_OPERATION`.
    InvalidFramebufferOperation,
    /// Any other non-zero code.
    Other(u32),
}

impl ErrorCode {
    /// Maps a raw `glGetError` value. Returns `None` for `GL_NO_ERROR`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => return None,
            0x0500 => Self::InvalidEnum,
            0x0501 => Self::InvalidValue,
            0x0502 => Self::InvalidOperation,
            0x0505 => Self::OutOfMemory,
            0x0506 => Self::InvalidFramebufferOperation,
            other => Self::Other(other),
        })
    }

    /// The raw GL value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        match self {
            Self::InvalidEnum => 0x0500,
            Self::InvalidValue => 0x0501,
            Self::InvalidOperation => 0x0502,
            Self::OutOfMemory => 0x0505,
            Self::InvalidFramebufferOperation => 0x0506,
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnum => write!(f, "GL_INVALID_ENUM"),
            Self::InvalidValue => write!(f, "GL_INVALID_VALUE"),
            Self::InvalidOperation => write!(f, "GL_INVALID_OPERATION"),
            Self::OutOfMemory => write!(f, "GL_OUT_OF_MEMORY"),
            Self::InvalidFramebufferOperation => write!(f, "GL_INVALID_FRAMEBUFFER_OPERATION"),
            Self::Other(raw) => write!(f, "0x{raw:04x}"),
        }
    }
}

/// A graphics call left one or more error codes latched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphicsError {
    /// What the host was doing, e.g. `"Failed to clear framebuffer"`.
    pub description: &'static str,
    /// The GL entry point, e.g. `"glClear"`.
    pub call: &'static str,
    /// Every code drained after the call, oldest first. Never empty.
    pub codes: Vec<ErrorCode>,
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: ", self.description, self.call)?;
        for (i, code) in self.codes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

impl core::error::Error for GraphicsError {}

/// Anything a [`RenderHost`](crate::RenderHost) operation can fail with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// A graphics call failed.
    Graphics(GraphicsError),
    /// A lifecycle callback arrived out of order.
    Lifecycle(LifecycleError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Graphics(e) => write!(f, "graphics call failed: {e}"),
            Self::Lifecycle(e) => write!(f, "lifecycle violation: {e}"),
        }
    }
}

impl core::error::Error for HostError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Graphics(e) => Some(e),
            Self::Lifecycle(e) => Some(e),
        }
    }
}

impl From<GraphicsError> for HostError {
    fn from(e: GraphicsError) -> Self {
        Self::Graphics(e)
    }
}

impl From<LifecycleError> for HostError {
    fn from(e: LifecycleError) -> Self {
        Self::Lifecycle(e)
    }
}

/// Drains the context's error queue after `call`.
///
/// # Errors
///
/// Returns a [`GraphicsError`] carrying every drained code if at least one
/// was latched.
pub fn check<C: GraphicsContext + ?Sized>(
    context: &mut C,
    description: &'static str,
    call: &'static str,
) -> Result<(), GraphicsError> {
    let mut codes = Vec::new();
    for _ in 0..MAX_DRAINED_ERRORS {
        match context.get_error() {
            Some(code) => codes.push(code),
            None => break,
        }
    }
    if codes.is_empty() {
        Ok(())
    } else {
        Err(GraphicsError {
            description,
            call,
            codes,
        })
    }
}
