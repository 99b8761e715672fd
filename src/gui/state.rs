//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use iced::widget::canvas;
use iced::{Point, Size};

use crate::game::Session;

/// Pages the sidebar can dispatch to.
/// One game today; the router keeps a default arm for “nothing selected”.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    AimTraining,
}

/// App state
pub(crate) struct HeadshotHaven {
    /// Which game view is mounted. `None` shows the “select a game” hint.
    pub page: Option<Page>,

    /// The aim-training session: score, countdown, live target.
    /// The session is the only writer of its own state; the GUI just
    /// routes events into it and renders what it reads back.
    pub session: Session,

    /// Last layout size the arena canvas reported.
    /// Start is gated on this: spawning needs known bounds.
    pub arena_size: Option<Size>,

    /// Cached arena geometry. Update handlers clear it whenever the
    /// target list changes; that clear IS the “state changed, redraw”
    /// signal the canvas consumes on its next frame.
    pub arena_cache: canvas::Cache,
}

impl Default for HeadshotHaven {
    fn default() -> Self {
        Self {
            page: Some(Page::AimTraining),
            session: Session::new(),
            arena_size: None,
            arena_cache: canvas::Cache::new(),
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Navigation
    SelectPage(Page),

    // Game controls
    StartPressed,
    EndPressed,

    /// One second elapsed on the game clock.
    Tick,

    // Arena canvas events (surface-local coordinates)
    ArenaClicked { at: Point, size: Size },
    ArenaResized(Size),
}
