// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval of the loading spinner (about 60 frames per second).
const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Periodic tick driving the spinner, active only while a search is loading.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
