//! Pointer input and capture lifecycle events.

use glam::Vec2;

use crate::types::MotionFrame;

/// A raw pointer event delivered by the input-source collaborator.
///
/// Positions are pixel offsets relative to the drawing surface's top-left;
/// timestamps are absolute milliseconds from whatever monotonic-enough
/// clock the host provides.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// Pointer pressed down on the surface
    Press { time_ms: u64 },
    /// Pointer moved while over the surface
    Move { position: Vec2, time_ms: u64 },
    /// Pointer released
    Release { time_ms: u64 },
}

/// Events emitted as the capture session mutates its motion list.
///
/// These let external systems (storage, sync, analysis) observe gesture
/// lifecycle changes without tight coupling to the session. `index` is the
/// motion's position in the session's ordered motion list.
#[derive(Debug, Clone)]
pub enum CaptureEvent {
    /// A press created a new motion and began recording into it.
    MotionStarted { index: usize, start_time_ms: u64 },
    /// A move appended a frame to the active motion.
    FrameRecorded { index: usize, frame: MotionFrame },
    /// A release finished the active motion.
    MotionFinished { index: usize, end_time_ms: u64 },
}
