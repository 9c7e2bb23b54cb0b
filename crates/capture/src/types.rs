use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single captured sample within a motion
///
/// Positions are stored normalized to [0,1] as a fraction of the surface
/// dimensions at capture time, so a recording replays without shape
/// distortion on a surface of different size.
///
/// This struct is designed for GPU compatibility with bytemuck.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct MotionFrame {
    /// Normalized position, each component a fraction of surface width/height
    pub position: Vec2,
    /// Milliseconds elapsed since the owning motion's start
    pub elapsed_ms: u32,
}

impl MotionFrame {
    /// Create a frame at a normalized position and time offset
    pub fn new(position: Vec2, elapsed_ms: u32) -> Self {
        Self {
            position,
            elapsed_ms,
        }
    }
}

/// One recorded gesture: an append-only frame sequence bounded by a start
/// and end time
///
/// A motion is created on press, grows by one frame per move while the
/// pointer is down, and is finished on release. Frames are stored in
/// insertion order; the capture session supplies monotonically increasing
/// time offsets, so insertion order is temporal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motion {
    /// Absolute timestamp in milliseconds when the gesture began
    pub start_time_ms: u64,
    /// Absolute timestamp in milliseconds when the gesture ended.
    /// Equals `start_time_ms` while the gesture is still in progress.
    pub end_time_ms: u64,
    /// Frames in capture order
    frames: Vec<MotionFrame>,
}

impl Motion {
    /// Create an empty motion starting at the given absolute time
    pub fn new(start_time_ms: u64) -> Self {
        Self {
            start_time_ms,
            end_time_ms: start_time_ms,
            frames: Vec::new(),
        }
    }

    /// Append a frame to the end of the sequence.
    ///
    /// No temporal validation is performed here; the caller is responsible
    /// for supplying non-decreasing `elapsed_ms` values.
    pub fn add_frame(&mut self, frame: MotionFrame) {
        self.frames.push(frame);
    }

    /// Set the end time. Last write wins; the capture session only calls
    /// this once per gesture.
    pub fn finish(&mut self, end_time_ms: u64) {
        self.end_time_ms = end_time_ms;
    }

    /// Frames in capture order
    pub fn frames(&self) -> &[MotionFrame] {
        &self.frames
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// True if no frames were captured (press and release with no movement)
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Gesture duration in milliseconds, zero while still in progress
    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms.saturating_sub(self.start_time_ms)
    }
}
