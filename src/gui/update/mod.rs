//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{HeadshotHaven, Message};

mod game;
mod nav;

pub(crate) fn update(state: &mut HeadshotHaven, message: Message) -> Task<Message> {
    match message {
        // Navigation
        Message::SelectPage(page) => nav::select_page(state, page),

        // Game controls
        Message::StartPressed => game::start_pressed(state),
        Message::EndPressed => game::end_pressed(state),
        Message::Tick => game::tick(state),

        // Arena canvas
        Message::ArenaClicked { at, size } => game::arena_clicked(state, at, size),
        Message::ArenaResized(size) => game::arena_resized(state, size),
    }
}
