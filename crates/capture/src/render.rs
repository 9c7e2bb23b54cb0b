//! Helpers for the rendering boundary.
//!
//! The session hands a rendering collaborator its read-only motion list;
//! these helpers do the rescaling from normalized coordinates back to the
//! collaborator's current pixel dimensions. The expected drawing contract
//! is clear-and-redraw: every motion becomes one polyline, consecutive
//! points connected by line segments.

use drillboard_config::SurfaceSize;
use glam::Vec2;

use crate::normalize::denormalize_point;
use crate::types::{Motion, MotionFrame};

/// Rescale one motion's frames to pixel coordinates on the given surface,
/// in capture order.
pub fn motion_polyline(motion: &Motion, surface: SurfaceSize) -> Vec<Vec2> {
    motion
        .frames()
        .iter()
        .map(|frame| denormalize_point(frame.position, surface))
        .collect()
}

/// Rescale every motion in the list, one polyline per motion.
pub fn polylines(motions: &[Motion], surface: SurfaceSize) -> Vec<Vec<Vec2>> {
    motions
        .iter()
        .map(|motion| motion_polyline(motion, surface))
        .collect()
}

/// Get a frame slice as raw bytes for vertex-buffer upload.
pub fn frames_as_bytes(frames: &[MotionFrame]) -> &[u8] {
    bytemuck::cast_slice(frames)
}
