//! Aim Training view: score/time header, the arena canvas, Start/End.
//!
//! The canvas is the game's drawing surface AND its pointer input:
//! - `draw` renders the committed target list (playing or not, so the
//!   last target stays visible after a game ends; zero targets is a
//!   clear-only frame)
//! - `update` turns raw runtime events into game messages: left clicks
//!   inside the bounds become `ArenaClicked`, and any event observed at
//!   a new layout size becomes `ArenaResized` (that is how the app
//!   learns the surface dimensions Start needs)

use iced::widget::{Column, button, canvas, column, row, space, text};
use iced::{Event, Length, Point, Rectangle, Renderer, Size, Theme, mouse};

use super::super::state::{HeadshotHaven, Message};
use super::constants::{ARENA_H, HEADER_TEXT};
use crate::game::Session;

pub(crate) fn build_aim_training(state: &HeadshotHaven) -> Column<'_, Message> {
    let header = row![
        text(format!("Score: {}", state.session.score())).size(HEADER_TEXT),
        space::horizontal(),
        text(format!("Time: {}s", state.session.time_left())).size(HEADER_TEXT),
    ]
    .width(Length::Fill);

    let arena = canvas(Arena {
        session: &state.session,
        cache: &state.arena_cache,
        known_size: state.arena_size,
    })
    .width(Length::Fill)
    .height(Length::Fixed(ARENA_H));

    // One toggle, like a range timer: End while playing, Start while idle.
    // Start stays inert until the canvas has reported its size.
    let toggle = if state.session.is_playing() {
        button("End Game").on_press(Message::EndPressed)
    } else if state.arena_size.is_some() {
        button("Start Game").on_press(Message::StartPressed)
    } else {
        button("Start Game")
    };

    column![header, arena, toggle].spacing(12)
}

/// Canvas program for the arena. Borrows the session read-only; all
/// mutation goes the long way around, through published messages.
struct Arena<'a> {
    session: &'a Session,
    cache: &'a canvas::Cache,
    known_size: Option<Size>,
}

impl canvas::Program<Message> for Arena<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(at) = cursor.position_in(bounds) {
                // Surface-local coordinates; the click doubles as a
                // fresh size report so respawns use current bounds.
                return Some(
                    canvas::Action::publish(Message::ArenaClicked {
                        at,
                        size: bounds.size(),
                    })
                    .and_capture(),
                );
            }
        }

        // Layout changed (or first layout): report the new size.
        if self.known_size != Some(bounds.size()) {
            return Some(canvas::Action::publish(Message::ArenaResized(bounds.size())));
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let arena = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = theme.extended_palette();

            frame.fill_rectangle(Point::ORIGIN, frame.size(), palette.background.weak.color);

            for target in self.session.targets() {
                frame.fill(
                    &canvas::Path::circle(Point::new(target.x, target.y), target.radius),
                    palette.danger.base.color,
                );
            }
        });

        vec![arena]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}
