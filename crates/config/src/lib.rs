//! Shared configuration for Drillboard
//!
//! This crate provides the single source of truth for drawing-surface
//! dimensions shared between the capture core and whatever host shell
//! supplies resize events.

use serde::{Deserialize, Serialize};

/// Default surface width in pixels
pub const DEFAULT_SURFACE_WIDTH: u32 = 1920;

/// Default surface height in pixels
pub const DEFAULT_SURFACE_HEIGHT: u32 = 1080;

/// Minimum surface width in pixels (a 110-yard field at 3 px per yard).
/// Keeps the board usable at tiny viewports and keeps the normalization
/// denominator non-zero.
pub const MIN_SURFACE_WIDTH: u32 = 330;

/// Minimum surface height in pixels (a 60-yard field at 3 px per yard).
pub const MIN_SURFACE_HEIGHT: u32 = 180;

/// Current drawing-surface dimensions used to normalize pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl SurfaceSize {
    /// Create a surface size, clamping both dimensions up to the floor
    /// minimums. Resize collaborators should construct through here so a
    /// shrinking viewport can never produce a degenerate surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(MIN_SURFACE_WIDTH),
            height: height.max(MIN_SURFACE_HEIGHT),
        }
    }

    /// Get width as f32 for normalization math
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    /// Get height as f32 for normalization math
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}
