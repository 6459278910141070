use crate::carousel::PointerKind;
use crate::media::LoadedMedia;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Pointer position inside the slide track, plus the track width at the time
/// of the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPointer {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    PointerPressed(TrackPointer),
    PointerMoved(TrackPointer),
    PointerReleased(TrackPointer),
    PointerLeft,
    Next,
    Previous,
    DotPressed(usize),
    ReplaceMedia(Vec<String>),
    MediaLoaded {
        generation: u64,
        index: usize,
        result: Result<LoadedMedia, String>,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
    Quit,
}
