//! Pointer-event capture for the Drillboard motion system.
//!
//! This module provides:
//! - [`CaptureSession`] - The state machine turning pointer events into motions
//! - [`PointerEvent`] - The input-source boundary contract
//! - [`CaptureEvent`] - Lifecycle events for external observation hooks
//!
//! A session processes an unbounded sequence of gestures: each
//! press/move*/release cycle opens, grows, and finishes one [`Motion`]
//! (see [`crate::types`]). Positions are normalized against the current
//! surface size at capture time, so the recorded motion list replays
//! undistorted on a surface of any dimensions.
//!
//! [`Motion`]: crate::types::Motion

mod events;
mod recorder;

pub use events::{CaptureEvent, PointerEvent};
pub use recorder::CaptureSession;

#[cfg(test)]
mod tests {
    use super::*;
    use drillboard_config::SurfaceSize;
    use glam::Vec2;

    fn session_100x100() -> CaptureSession {
        // Constructed directly: the floor clamp in SurfaceSize::new would
        // raise a 100x100 surface to the minimums.
        CaptureSession::with_surface(SurfaceSize {
            width: 100,
            height: 100,
        })
    }

    #[test]
    fn test_press_move_release_cycle() {
        let mut session = session_100x100();

        session.press(0);
        assert!(session.is_pressed());
        assert_eq!(session.motion_count(), 1);

        session.move_to(Vec2::new(50.0, 50.0), 10);
        session.release(20);

        assert!(!session.is_pressed());
        assert!(session.active_motion().is_none());

        let motion = &session.motions()[0];
        assert_eq!(motion.frame_count(), 1);
        assert_eq!(motion.frames()[0].position, Vec2::new(0.5, 0.5));
        assert_eq!(motion.frames()[0].elapsed_ms, 10);
        assert_eq!(motion.end_time_ms, 20);
    }

    #[test]
    fn test_frame_count_matches_moves_while_pressed() {
        let mut session = session_100x100();

        session.move_to(Vec2::new(10.0, 10.0), 1); // before press: dropped
        session.press(5);
        for i in 0..4 {
            session.move_to(Vec2::new(10.0 + i as f32, 10.0), 6 + i);
        }
        session.release(20);
        session.move_to(Vec2::new(90.0, 90.0), 25); // after release: dropped

        assert_eq!(session.motion_count(), 1);
        assert_eq!(session.motions()[0].frame_count(), 4);
    }

    #[test]
    fn test_move_without_press_mutates_nothing() {
        let mut session = session_100x100();
        session.move_to(Vec2::new(10.0, 10.0), 5);

        assert_eq!(session.motion_count(), 0);
        assert!(session.active_motion().is_none());
        assert!(!session.is_pressed());
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let mut session = session_100x100();
        session.release(10);

        assert_eq!(session.motion_count(), 0);
        assert!(!session.is_pressed());
    }

    #[test]
    fn test_empty_motion_keeps_duration() {
        let mut session = session_100x100();
        session.press(0);
        session.release(1);

        let motion = &session.motions()[0];
        assert!(motion.is_empty());
        assert_eq!(motion.duration_ms(), 1);
    }

    #[test]
    fn test_second_press_while_recording_is_ignored() {
        let mut session = session_100x100();
        session.press(0);
        session.move_to(Vec2::new(10.0, 10.0), 5);

        session.press(7);
        assert_eq!(session.motion_count(), 1);

        session.move_to(Vec2::new(20.0, 20.0), 9);
        session.release(12);

        // Both moves landed in the one motion opened by the first press
        let motion = &session.motions()[0];
        assert_eq!(motion.start_time_ms, 0);
        assert_eq!(motion.frame_count(), 2);
        assert_eq!(motion.end_time_ms, 12);
    }

    #[test]
    fn test_positions_normalized_to_unit_interval() {
        let mut session = session_100x100();
        session.press(0);
        session.move_to(Vec2::new(0.0, 100.0), 1);
        session.move_to(Vec2::new(100.0, 0.0), 2);
        session.move_to(Vec2::new(33.0, 66.0), 3);
        session.release(4);

        for frame in session.motions()[0].frames() {
            assert!((0.0..=1.0).contains(&frame.position.x));
            assert!((0.0..=1.0).contains(&frame.position.y));
        }
    }

    #[test]
    fn test_elapsed_is_non_decreasing() {
        let mut session = session_100x100();
        session.press(100);
        for t in [105, 105, 112, 140, 141] {
            session.move_to(Vec2::new(50.0, 50.0), t);
        }
        session.release(150);

        let frames = session.motions()[0].frames();
        for pair in frames.windows(2) {
            assert!(pair[0].elapsed_ms <= pair[1].elapsed_ms);
        }
    }

    #[test]
    fn test_resize_only_affects_subsequent_frames() {
        let mut session = session_100x100();
        session.press(0);
        session.move_to(Vec2::new(50.0, 50.0), 1);

        session.set_surface_size(SurfaceSize {
            width: 200,
            height: 200,
        });
        session.move_to(Vec2::new(50.0, 50.0), 2);
        session.release(3);

        let frames = session.motions()[0].frames();
        assert_eq!(frames[0].position, Vec2::new(0.5, 0.5));
        assert_eq!(frames[1].position, Vec2::new(0.25, 0.25));
    }

    #[test]
    fn test_resize_does_not_interrupt_recording() {
        let mut session = session_100x100();
        session.press(0);
        session.set_surface_size(SurfaceSize {
            width: 500,
            height: 500,
        });

        assert!(session.is_pressed());
        session.move_to(Vec2::new(250.0, 250.0), 5);
        session.release(10);

        assert_eq!(session.motions()[0].frame_count(), 1);
    }

    #[test]
    fn test_handle_pointer_dispatch() {
        let mut session = session_100x100();
        session.handle_pointer(PointerEvent::Press { time_ms: 0 });
        session.handle_pointer(PointerEvent::Move {
            position: Vec2::new(25.0, 75.0),
            time_ms: 8,
        });
        session.handle_pointer(PointerEvent::Release { time_ms: 16 });

        let motion = &session.motions()[0];
        assert_eq!(motion.frame_count(), 1);
        assert_eq!(motion.frames()[0].position, Vec2::new(0.25, 0.75));
        assert_eq!(motion.duration_ms(), 16);
    }

    #[test]
    fn test_event_listener_observes_lifecycle_in_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut session = session_100x100();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);

        session.add_event_listener(move |event| {
            let tag = match event {
                CaptureEvent::MotionStarted { .. } => "started",
                CaptureEvent::FrameRecorded { .. } => "frame",
                CaptureEvent::MotionFinished { .. } => "finished",
            };
            seen_clone.borrow_mut().push(tag);
        });

        session.press(0);
        session.move_to(Vec2::new(10.0, 10.0), 5);
        session.move_to(Vec2::new(20.0, 20.0), 9);
        session.release(12);

        assert_eq!(
            *seen.borrow(),
            vec!["started", "frame", "frame", "finished"]
        );
    }

    #[test]
    fn test_redraw_fires_on_press_move_and_resize() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut session = session_100x100();
        let redraws = Rc::new(Cell::new(0usize));
        let redraws_clone = Rc::clone(&redraws);

        session.add_redraw_listener(move |_motions| {
            redraws_clone.set(redraws_clone.get() + 1);
        });

        session.press(0); // 1
        session.move_to(Vec2::new(10.0, 10.0), 5); // 2
        session.release(10); // no redraw: nothing visual changed
        session.set_surface_size(SurfaceSize {
            width: 400,
            height: 400,
        }); // 3

        assert_eq!(redraws.get(), 3);
    }

    #[test]
    fn test_redraw_listener_sees_full_motion_list() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut session = session_100x100();
        let last_seen = Rc::new(Cell::new(0usize));
        let last_seen_clone = Rc::clone(&last_seen);

        session.add_redraw_listener(move |motions| {
            last_seen_clone.set(motions.len());
        });

        session.press(0);
        session.release(5);
        session.press(10);
        session.move_to(Vec2::new(10.0, 10.0), 12);
        session.release(15);

        assert_eq!(last_seen.get(), 2);
    }
}
