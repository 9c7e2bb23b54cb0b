//! Drillboard motion capture - gesture recording data model and session
//!
//! This crate provides the core types for recording freehand pointer
//! gestures as time-stamped, surface-relative paths:
//! - [`types::Motion`] - One gesture: an append-only, time-bounded frame sequence
//! - [`types::MotionFrame`] - A normalized position plus elapsed-time offset
//! - [`session`] - The capture session state machine and its event contracts
//! - [`normalize`] - Raw-pixel to normalized coordinate mapping
//! - [`render`] - Rescaling helpers for the rendering boundary

pub mod normalize;
pub mod render;
pub mod session;
pub mod types;

pub use normalize::*;
pub use render::*;
pub use session::*;
pub use types::*;
