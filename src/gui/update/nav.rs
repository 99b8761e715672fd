//! gui/update/nav.rs
//! Sidebar navigation. Switching pages never touches game state: a game
//! keeps running (and its clock keeps ticking) while another page shows.

use iced::Task;

use super::super::state::{HeadshotHaven, Message, Page};

pub(crate) fn select_page(state: &mut HeadshotHaven, page: Page) -> Task<Message> {
    state.page = Some(page);
    Task::none()
}
