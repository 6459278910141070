use crate::media::MediaSource;

mod core;
mod gesture;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    Preload {
        generation: u64,
        sources: Vec<MediaSource>,
    },
    Quit,
}
