//! gui/subscription.rs
//! Drive the countdown by emitting a periodic Tick message.

use iced::{Subscription, time};
use std::time::Duration;

use super::state::{HeadshotHaven, Message};

/// The interval exists only while a game is playing, so there is at most
/// one live countdown per session and ending the game drops it.
pub(crate) fn subscription(state: &HeadshotHaven) -> Subscription<Message> {
    if !state.session.is_playing() {
        return Subscription::none();
    }

    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}
