//! game/mod.rs
//!
//! The brain of the app:
//! - Target geometry (spawn rule + hit test)
//! - Session state machine (score, countdown, start/end/tick/click)
//!
//! Rules live here so the GUI stays dumb:
//! - no widgets, no canvas, no timers
//! - randomness comes in as an `Rng` parameter, so tests can seed it
//!
//! The GUI layer owns the actual clock (a 1-second subscription) and the
//! drawing surface; this module only answers "what happens to the state".

pub mod session;
pub mod target;

pub use session::Session;
pub use target::Target;

/// Fixed target radius (surface pixels). All targets share it for now.
pub const TARGET_RADIUS: f32 = 20.0;

/// Length of one game in seconds.
pub const GAME_SECONDS: u32 = 60;
