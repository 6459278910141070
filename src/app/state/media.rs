use crate::media::{LoadedMedia, MediaList};
use iced::widget::image::Handle;

/// Load state of one slide.
#[derive(Debug, Clone)]
pub enum SlideStatus {
    Pending,
    Ready {
        handle: Handle,
        width: u32,
        height: u32,
    },
    Failed,
}

impl SlideStatus {
    pub(in crate::app) fn from_loaded(media: LoadedMedia) -> Self {
        SlideStatus::Ready {
            handle: Handle::from_rgba(media.width, media.height, media.rgba),
            width: media.width,
            height: media.height,
        }
    }
}

/// Media model: the mounted list plus per-slide preload results.
pub struct MediaState {
    pub(in crate::app) list: MediaList,
    pub(in crate::app) slides: Vec<SlideStatus>,
}

impl MediaState {
    pub(in crate::app) fn new(list: MediaList) -> Self {
        let slides = vec![SlideStatus::Pending; list.len()];
        Self { list, slides }
    }

    /// Store a preload result unless it belongs to an older list.
    pub(in crate::app) fn accept(&mut self, generation: u64, index: usize, status: SlideStatus) -> bool {
        if generation != self.list.generation() {
            return false;
        }
        match self.slides.get_mut(index) {
            Some(slot) => {
                *slot = status;
                true
            }
            None => false,
        }
    }

    pub(in crate::app) fn ready_count(&self) -> usize {
        self.slides
            .iter()
            .filter(|slide| matches!(slide, SlideStatus::Ready { .. }))
            .count()
    }
}
