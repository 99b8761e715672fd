//! GUI renderer (reads state, produces widgets; no mutation).

mod arena;
mod constants;
mod sidebar;

use iced::Length;
use iced::widget::{Row, container, row, text};

use super::state::{HeadshotHaven, Message, Page};
use constants::SIDEBAR_W;

pub(crate) fn view(state: &HeadshotHaven) -> Row<'_, Message> {
    let sidebar = sidebar::build_sidebar(state).width(Length::Fixed(SIDEBAR_W));

    // Page router: the sidebar picks a page by name, the shell mounts it.
    let content: iced::Element<'_, Message> = match state.page {
        Some(Page::AimTraining) => arena::build_aim_training(state).into(),
        None => text("Select a game from the navigation").into(),
    };

    let main = container(content).padding(12).width(Length::Fill);

    row![sidebar, main].spacing(12).height(Length::Fill)
}
