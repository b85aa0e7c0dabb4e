// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes pointer, touch and window events to the top-level message and runs
//! the animation clock while a transition or the demo is in flight.

use super::message::{Message, PointerEvent};
use iced::{event, mouse, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Pointer input for gesture recognition plus window resizes for orientation.
///
/// Presses already captured by a widget (icon or button taps) do not start a
/// gesture; moves and releases always reach the recognizer.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let uncaptured = matches!(status, event::Status::Ignored);
        match event {
            Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::Pointer(PointerEvent::Moved(position)))
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if uncaptured => {
                Some(Message::Pointer(PointerEvent::Pressed(None)))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::Pointer(PointerEvent::Released(None)))
            }
            Event::Mouse(mouse::Event::CursorLeft) => Some(Message::Pointer(PointerEvent::Lost)),
            Event::Touch(touch::Event::FingerPressed { position, .. }) if uncaptured => {
                Some(Message::Pointer(PointerEvent::Pressed(Some(position))))
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                Some(Message::Pointer(PointerEvent::Moved(position)))
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                Some(Message::Pointer(PointerEvent::Released(Some(position))))
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                Some(Message::Pointer(PointerEvent::Lost))
            }
            _ => None,
        }
    })
}

/// Periodic tick that advances the shell timeline.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
