use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::media::{FetchOptions, fetch_media};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use tracing::info;

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Preload {
                generation,
                sources,
            } => {
                let options = FetchOptions {
                    timeout: self.config.preload_timeout(),
                    user_agent: self.config.user_agent.clone(),
                };
                info!(
                    generation,
                    count = sources.len(),
                    timeout_secs = options.timeout.as_secs_f32(),
                    "Preloading every slide"
                );
                Task::batch(sources.into_iter().enumerate().map(|(index, source)| {
                    let options = options.clone();
                    Task::perform(
                        async move { fetch_media(source, options).await },
                        move |result| Message::MediaLoaded {
                            generation,
                            index,
                            result: result.map_err(|err| format!("{err:#}")),
                        },
                    )
                }))
            }
            Effect::Quit => {
                info!("Quitting");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(iced::window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(iced::window::Event::FileDropped(path)) => Some(Message::ReplaceMedia(
            vec![path.to_string_lossy().into_owned()],
        )),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;
    use std::path::PathBuf;

    #[test]
    fn resize_events_become_messages() {
        let message = runtime_event_to_message(
            Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(
            message,
            Some(Message::WindowResized { width, height }) if width == 800.0 && height == 600.0
        ));
    }

    #[test]
    fn dropped_file_replaces_media() {
        let message = runtime_event_to_message(
            Event::Window(window::Event::FileDropped(PathBuf::from("/tmp/album.json"))),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(
            message,
            Some(Message::ReplaceMedia(entries)) if entries == vec!["/tmp/album.json".to_string()]
        ));
    }

    #[test]
    fn captured_events_are_skipped() {
        let message = runtime_event_to_message(
            Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
            event::Status::Captured,
            window::Id::unique(),
        );
        assert!(message.is_none());
    }
}
