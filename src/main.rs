//! Headshot Haven
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) with a sidebar of
//! mini-games and, for now, one game: Aim Training. A circular target spawns
//! on a canvas; click it to score; a 60-second clock counts down.
//!
//! # How Iced works (super simple mental model)
//! Think “video game loop”, but message-based:
//!
//! - `HeadshotHaven` = the *entire memory* of the app (all the state)
//! - `Message` = “something happened” (button clicked, canvas clicked, clock ticked)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! The app repeats this forever:
//! **Message happens -> update changes state -> view redraws**
//!
//! # Architecture constraints (on purpose)
//! - UI layer calls `game::*` for the rules (spawn/hit/countdown).
//! - `game` knows nothing about widgets, canvases, or timers.
//!
//! # Timing model (aka “who owns the clock”)
//! - The countdown is an iced subscription: one `Message::Tick` per second,
//!   and the subscription only exists while a game is playing.
//! - So there is never more than one live countdown, and ending the game
//!   (or closing the window) drops it.

mod game;
mod gui;

fn main() -> iced::Result {
    // `iced::application` glues together:
    // - initial state (HeadshotHaven::default)
    // - update function (logic)
    // - view function (UI layout)
    // - subscription (the 1-second game clock)
    iced::application(gui::HeadshotHaven::default, gui::update, gui::view)
        .subscription(gui::subscription)
        .title("Headshot Haven")
        .run()
}
