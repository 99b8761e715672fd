//! Left sidebar (app title + game list). Owns no game state.

use iced::Length;
use iced::widget::{button, column, container, scrollable, text};

use super::super::state::{HeadshotHaven, Message, Page};
use super::constants::{LABEL_TEXT, TITLE_TEXT};

pub(crate) fn build_sidebar(state: &HeadshotHaven) -> iced::widget::Container<'_, Message> {
    let aim_btn = if state.page == Some(Page::AimTraining) {
        button("✓ Aim Training")
    } else {
        button("Aim Training").on_press(Message::SelectPage(Page::AimTraining))
    };

    let games = column![text("Games").size(LABEL_TEXT), aim_btn].spacing(6);

    let col = column![text("Headshot Haven").size(TITLE_TEXT), games].spacing(12);

    container(scrollable(col).height(Length::Fill)).padding(12)
}
