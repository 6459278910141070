mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, FRAME_INTERVAL};
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Instant;
use tracing::trace;

impl App {
    /// Runtime events always; the frame clock only while something moves.
    pub fn subscription(app: &App) -> Subscription<Message> {
        let runtime = event::listen_with(runtime::runtime_event_to_message);
        if app.needs_frames(Instant::now()) {
            Subscription::batch([runtime, time::every(FRAME_INTERVAL).map(Message::Tick)])
        } else {
            runtime
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            return Task::none();
        }
        trace!(count = effects.len(), "Running effects");
        Task::batch(
            effects
                .into_iter()
                .map(|effect| self.run_effect(effect))
                .collect::<Vec<_>>(),
        )
    }
}
