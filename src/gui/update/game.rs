//! gui/update/game.rs
//! GUI-session bridge for Aim Training.
//!
//! - All rules live in `game::Session`; handlers here just route events
//!   into it and clear the arena cache when the drawn picture changed.
//! - Randomness enters at this boundary (`thread_rng`); the session
//!   itself is deterministic given an RNG.

use iced::{Point, Size, Task};

use super::super::state::{HeadshotHaven, Message};

pub(crate) fn start_pressed(state: &mut HeadshotHaven) -> Task<Message> {
    // The view disables Start until the canvas has reported a size,
    // but guard anyway: spawning needs real bounds.
    let Some(size) = state.arena_size else {
        return Task::none();
    };

    state
        .session
        .start(size.width, size.height, &mut rand::thread_rng());
    state.arena_cache.clear();

    Task::none()
}

pub(crate) fn end_pressed(state: &mut HeadshotHaven) -> Task<Message> {
    // Idempotent; the last target stays visible, so no cache clear.
    state.session.end();
    Task::none()
}

pub(crate) fn tick(state: &mut HeadshotHaven) -> Task<Message> {
    #[cfg(debug_assertions)]
    let was_playing = state.session.is_playing();

    state.session.tick();

    #[cfg(debug_assertions)]
    if was_playing && !state.session.is_playing() {
        eprintln!("[GUI] game over, score={}", state.session.score());
    }

    Task::none()
}

pub(crate) fn arena_clicked(state: &mut HeadshotHaven, at: Point, size: Size) -> Task<Message> {
    // A click carries the freshest bounds; remember them.
    state.arena_size = Some(size);

    let hit = state
        .session
        .register_click(at.x, at.y, size.width, size.height, &mut rand::thread_rng());

    if hit {
        // Target was replaced: tell the canvas to redraw.
        state.arena_cache.clear();

        #[cfg(debug_assertions)]
        eprintln!(
            "[GUI] hit at ({:.1}, {:.1}) score={}",
            at.x,
            at.y,
            state.session.score()
        );
    }

    Task::none()
}

pub(crate) fn arena_resized(state: &mut HeadshotHaven, size: Size) -> Task<Message> {
    // The current target is NOT repositioned on resize; it may drift
    // outside the visible bounds until the next spawn. The cache keys on
    // size, so the redraw happens without an explicit clear.
    state.arena_size = Some(size);
    Task::none()
}
