//! The capture session state machine.

use drillboard_config::SurfaceSize;
use glam::Vec2;
use tracing::{debug, warn};

use crate::normalize::normalize_point;
use crate::types::{Motion, MotionFrame};

use super::events::{CaptureEvent, PointerEvent};

/// Turns raw pointer events into a growing collection of motions.
///
/// The session is a two-state machine: idle (no active motion) and
/// recording (exactly one active motion). A press opens a motion, each
/// move while pressed appends one normalized frame to it, and a release
/// finishes it. Events that arrive in an invalid state (a move before any
/// press, a release while idle, a second press while recording) are
/// absorbed as logged no-ops so out-of-order delivery can never corrupt a
/// motion.
///
/// All state transitions run synchronously on the thread delivering the
/// events; there is exactly one mutator, so no locking is used.
///
/// # Example
///
/// ```ignore
/// let mut session = CaptureSession::new();
/// session.set_surface_size(SurfaceSize::new(800, 600));
/// session.press(0);
/// session.move_to(Vec2::new(400.0, 300.0), 16);
/// session.release(32);
/// assert_eq!(session.motion_count(), 1);
/// ```
#[derive(Default)]
pub struct CaptureSession {
    /// Every motion recorded since the session began, in capture order
    motions: Vec<Motion>,
    /// Index of the in-progress motion. Set iff `pressed` is true.
    active: Option<usize>,
    /// Whether the pointer is currently down
    pressed: bool,
    /// Current normalization denominators, updated by the resize collaborator
    surface: SurfaceSize,
    /// Lifecycle listeners; each receives cloned events
    event_listeners: Vec<Box<dyn Fn(CaptureEvent)>>,
    /// Redraw listeners, invoked with the full motion list after each mutation
    redraw_listeners: Vec<Box<dyn FnMut(&[Motion])>>,
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("motion_count", &self.motions.len())
            .field("active", &self.active)
            .field("pressed", &self.pressed)
            .field("surface", &self.surface)
            .finish()
    }
}

impl CaptureSession {
    /// Create an idle session with the default surface size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle session normalizing against the given surface size.
    pub fn with_surface(surface: SurfaceSize) -> Self {
        Self {
            surface,
            ..Self::default()
        }
    }

    /// Dispatch a raw pointer event to the matching transition.
    ///
    /// This is the single entry point for an input-source collaborator.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press { time_ms } => self.press(time_ms),
            PointerEvent::Move { position, time_ms } => self.move_to(position, time_ms),
            PointerEvent::Release { time_ms } => self.release(time_ms),
        }
    }

    /// Begin a new motion at the given absolute time.
    ///
    /// A press while a motion is already recording is ignored; the active
    /// motion keeps recording until its matching release arrives.
    pub fn press(&mut self, time_ms: u64) {
        if self.pressed {
            warn!("press at {}ms while already recording, ignoring", time_ms);
            return;
        }

        self.motions.push(Motion::new(time_ms));
        let index = self.motions.len() - 1;
        self.active = Some(index);
        self.pressed = true;

        debug!("motion {} started at {}ms", index, time_ms);
        self.emit(CaptureEvent::MotionStarted {
            index,
            start_time_ms: time_ms,
        });
        self.request_redraw();
    }

    /// Append a frame to the active motion.
    ///
    /// `raw` is a pixel offset from the surface's top-left; it is normalized
    /// against the current surface size before being stored. A move with no
    /// active press mutates nothing.
    pub fn move_to(&mut self, raw: Vec2, time_ms: u64) {
        let index = match self.active {
            Some(index) if self.pressed => index,
            _ => {
                debug!("move at {}ms with no active press, ignoring", time_ms);
                return;
            }
        };

        let position = match normalize_point(raw, self.surface) {
            Ok(position) => position,
            Err(err) => {
                warn!("skipping frame: {}", err);
                return;
            }
        };

        let motion = &mut self.motions[index];
        let elapsed_ms = time_ms.saturating_sub(motion.start_time_ms) as u32;
        let frame = MotionFrame::new(position, elapsed_ms);
        motion.add_frame(frame);

        debug!(
            "motion {} frame at ({:.3}, {:.3}) +{}ms",
            index, position.x, position.y, elapsed_ms
        );
        self.emit(CaptureEvent::FrameRecorded { index, frame });
        self.request_redraw();
    }

    /// Finish the active motion at the given absolute time.
    ///
    /// A release while idle is ignored.
    pub fn release(&mut self, time_ms: u64) {
        let index = match self.active.take() {
            Some(index) => index,
            None => {
                debug!("release at {}ms with no active motion, ignoring", time_ms);
                return;
            }
        };

        self.motions[index].finish(time_ms);
        self.pressed = false;

        debug!("motion {} finished at {}ms", index, time_ms);
        self.emit(CaptureEvent::MotionFinished {
            index,
            end_time_ms: time_ms,
        });
    }

    /// Update the normalization denominators.
    ///
    /// Called by the resize collaborator at least once before any pointer
    /// event and again on every viewport change. Does not interrupt an
    /// in-progress motion; already-recorded frames keep their normalized
    /// coordinates and are simply reinterpreted at the new scale on the
    /// next redraw.
    pub fn set_surface_size(&mut self, surface: SurfaceSize) {
        debug!("surface resized to {}x{}", surface.width, surface.height);
        self.surface = surface;
        self.request_redraw();
    }

    /// Current surface size used to normalize raw input
    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    /// Every motion recorded since the session began, in capture order.
    ///
    /// This is the read-only view handed to the rendering collaborator.
    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    /// Number of recorded motions, including the active one
    pub fn motion_count(&self) -> usize {
        self.motions.len()
    }

    /// Whether the pointer is currently down
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// The motion currently receiving frames, if a gesture is in progress
    pub fn active_motion(&self) -> Option<&Motion> {
        self.active.map(|index| &self.motions[index])
    }

    /// Register a lifecycle listener.
    ///
    /// The listener receives cloned events for `MotionStarted`,
    /// `FrameRecorded`, and `MotionFinished`.
    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: Fn(CaptureEvent) + 'static,
    {
        self.event_listeners.push(Box::new(listener));
    }

    /// Register a redraw listener.
    ///
    /// After every mutating transition and after a resize, each listener is
    /// handed the full ordered motion list. The call is fire-and-forget;
    /// the listener rescales normalized positions to its own current pixel
    /// dimensions.
    pub fn add_redraw_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&[Motion]) + 'static,
    {
        self.redraw_listeners.push(Box::new(listener));
    }

    fn emit(&self, event: CaptureEvent) {
        for listener in self.event_listeners.iter() {
            listener(event.clone());
        }
    }

    fn request_redraw(&mut self) {
        let motions = &self.motions;
        for listener in self.redraw_listeners.iter_mut() {
            listener(motions);
        }
    }
}
