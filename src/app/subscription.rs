// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are reduced to the few the gallery reacts to. Escape closes
//! the preview, window size changes drive lazy loading, and a close request
//! triggers the diagnostics export.

use super::Message;
use crate::config::TICK_INTERVAL;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};

/// Routes Escape presses, window size changes and close requests.
///
/// Escape is forwarded even when a widget captured it, since no gallery
/// widget uses it for anything else.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::Gallery(gallery::Message::Resized(size)))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Gallery(gallery::Message::EscapePressed)),
        _ => None,
    })
}

/// Creates the periodic tick that drives copy feedback, long presses and
/// toast auto-dismiss. Idle when nothing time-dependent is pending.
pub fn create_tick_subscription(gallery_pending: bool, has_notifications: bool) -> Subscription<Message> {
    if gallery_pending || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
