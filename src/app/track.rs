//! Slide track drawn on a canvas.
//!
//! The canvas is the only place pointer input enters the carousel: mouse and
//! touch events are converted into [`TrackPointer`] messages in track-local
//! coordinates, and the reducer feeds them to the controller.

use super::messages::{Message, TrackPointer};
use super::state::{PLACEHOLDER_FONT_SIZE_PX, SlideStatus};
use crate::carousel::{CarouselController, GestureAxis, PointerKind};
use iced::advanced::graphics::core::Image;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::touch;
use iced::widget::canvas::{Frame, Geometry, Program, Text, event};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

pub(super) struct SlideTrack<'a> {
    pub(super) carousel: &'a CarouselController,
    pub(super) slides: &'a [SlideStatus],
    /// Animated resting position in slides.
    pub(super) position: f32,
    pub(super) background: Color,
    pub(super) foreground: Color,
}

/// Which pointer currently owns the gesture.
#[derive(Debug, Default)]
pub(super) struct TrackInput {
    mouse_down: bool,
    finger: Option<touch::Finger>,
}

impl SlideTrack<'_> {
    fn pointer(kind: PointerKind, local: Point, bounds: Rectangle) -> TrackPointer {
        TrackPointer {
            kind,
            x: local.x,
            y: local.y,
            width: bounds.width,
        }
    }

    fn local(position: Point, bounds: Rectangle) -> Point {
        Point::new(position.x - bounds.x, position.y - bounds.y)
    }

    fn on_mouse(
        &self,
        input: &mut TrackInput,
        event: mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let Some(local) = cursor.position_in(bounds) else {
                    return (event::Status::Ignored, None);
                };
                input.mouse_down = true;
                (
                    event::Status::Captured,
                    Some(Message::PointerPressed(Self::pointer(
                        PointerKind::Mouse,
                        local,
                        bounds,
                    ))),
                )
            }
            mouse::Event::CursorMoved { position } if input.mouse_down => {
                if bounds.contains(position) {
                    let local = Self::local(position, bounds);
                    (
                        event::Status::Captured,
                        Some(Message::PointerMoved(Self::pointer(
                            PointerKind::Mouse,
                            local,
                            bounds,
                        ))),
                    )
                } else {
                    input.mouse_down = false;
                    (event::Status::Captured, Some(Message::PointerLeft))
                }
            }
            mouse::Event::CursorLeft if input.mouse_down => {
                input.mouse_down = false;
                (event::Status::Captured, Some(Message::PointerLeft))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) if input.mouse_down => {
                input.mouse_down = false;
                let local = cursor
                    .position()
                    .map(|position| Self::local(position, bounds))
                    .unwrap_or(Point::ORIGIN);
                (
                    event::Status::Captured,
                    Some(Message::PointerReleased(Self::pointer(
                        PointerKind::Mouse,
                        local,
                        bounds,
                    ))),
                )
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn on_touch(
        &self,
        input: &mut TrackInput,
        event: touch::Event,
        bounds: Rectangle,
    ) -> (event::Status, Option<Message>) {
        match event {
            touch::Event::FingerPressed { id, position }
                if input.finger.is_none() && bounds.contains(position) =>
            {
                input.finger = Some(id);
                // Not captured: until the axis is known the surrounding
                // scrollable may still own this gesture.
                (
                    event::Status::Ignored,
                    Some(Message::PointerPressed(Self::pointer(
                        PointerKind::Touch,
                        Self::local(position, bounds),
                        bounds,
                    ))),
                )
            }
            touch::Event::FingerMoved { id, position } if input.finger == Some(id) => {
                let local = Self::local(position, bounds);
                let status = if self.carousel.resolve_axis(local.x, local.y)
                    == GestureAxis::Horizontal
                {
                    event::Status::Captured
                } else {
                    event::Status::Ignored
                };
                (
                    status,
                    Some(Message::PointerMoved(Self::pointer(
                        PointerKind::Touch,
                        local,
                        bounds,
                    ))),
                )
            }
            touch::Event::FingerLifted { id, position } | touch::Event::FingerLost { id, position }
                if input.finger == Some(id) =>
            {
                input.finger = None;
                (
                    event::Status::Ignored,
                    Some(Message::PointerReleased(Self::pointer(
                        PointerKind::Touch,
                        Self::local(position, bounds),
                        bounds,
                    ))),
                )
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw_placeholder(&self, frame: &mut Frame, slot: Rectangle, label: &str) {
        frame.fill_text(Text {
            content: label.to_string(),
            position: slot.center(),
            color: self.foreground,
            size: PLACEHOLDER_FONT_SIZE_PX.into(),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..Text::default()
        });
    }
}

impl Program<Message> for SlideTrack<'_> {
    type State = TrackInput;

    fn update(
        &self,
        input: &mut Self::State,
        event: event::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if self.slides.is_empty() {
            return (event::Status::Ignored, None);
        }
        match event {
            event::Event::Mouse(mouse_event) => self.on_mouse(input, mouse_event, bounds, cursor),
            event::Event::Touch(touch_event) => self.on_touch(input, touch_event, bounds),
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _input: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.background);

        let width = bounds.width;
        let track_x = self.carousel.track_offset(self.position, width);

        for (index, slide) in self.slides.iter().enumerate() {
            let left = track_x + index as f32 * width;
            if left + width <= 0.0 || left >= width {
                continue;
            }
            let slot = Rectangle::new(Point::new(left, 0.0), bounds.size());
            match slide {
                SlideStatus::Ready {
                    handle,
                    width: image_width,
                    height: image_height,
                } => {
                    frame.draw_image(
                        fit_within(slot, *image_width, *image_height),
                        Image::new(handle.clone()),
                    );
                }
                SlideStatus::Pending => self.draw_placeholder(&mut frame, slot, "Loading…"),
                SlideStatus::Failed => {
                    self.draw_placeholder(&mut frame, slot, "Image unavailable")
                }
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        input: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if input.mouse_down {
            mouse::Interaction::Grabbing
        } else if self.carousel.len() > 1 && cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Largest rectangle with the image's aspect ratio centered inside `slot`.
pub(super) fn fit_within(slot: Rectangle, image_width: u32, image_height: u32) -> Rectangle {
    if image_width == 0 || image_height == 0 || slot.width <= 0.0 || slot.height <= 0.0 {
        return slot;
    }
    let scale = (slot.width / image_width as f32).min(slot.height / image_height as f32);
    let size = Size::new(image_width as f32 * scale, image_height as f32 * scale);
    Rectangle::new(
        Point::new(
            slot.x + (slot.width - size.width) / 2.0,
            slot.y + (slot.height - size.height) / 2.0,
        ),
        size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselTuning;
    use iced::touch::Finger;

    const BOUNDS: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 300.0,
        height: 200.0,
    };

    fn slides() -> Vec<SlideStatus> {
        vec![SlideStatus::Pending; 3]
    }

    fn carousel() -> CarouselController {
        let mut carousel = CarouselController::new(3, CarouselTuning::default());
        carousel.set_viewport_width(BOUNDS.width);
        carousel
    }

    fn track<'a>(carousel: &'a CarouselController, slides: &'a [SlideStatus]) -> SlideTrack<'a> {
        SlideTrack {
            carousel,
            slides,
            position: 0.0,
            background: Color::BLACK,
            foreground: Color::WHITE,
        }
    }

    fn touch(event: touch::Event) -> event::Event {
        event::Event::Touch(event)
    }

    fn mouse(event: mouse::Event) -> event::Event {
        event::Event::Mouse(event)
    }

    #[test]
    fn finger_press_is_not_captured() {
        let carousel = carousel();
        let slides = slides();
        let track = track(&carousel, &slides);
        let mut input = TrackInput::default();

        let (status, message) = track.update(
            &mut input,
            touch(touch::Event::FingerPressed {
                id: Finger(1),
                position: Point::new(200.0, 50.0),
            }),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert_eq!(status, event::Status::Ignored);
        assert!(matches!(
            message,
            Some(Message::PointerPressed(TrackPointer {
                kind: PointerKind::Touch,
                ..
            }))
        ));
        assert_eq!(input.finger, Some(Finger(1)));
    }

    #[test]
    fn horizontal_finger_move_is_captured() {
        let mut carousel = carousel();
        carousel.gesture_start(PointerKind::Touch, 200.0, 50.0);
        let slides = slides();
        let track = track(&carousel, &slides);
        let mut input = TrackInput {
            finger: Some(Finger(1)),
            ..TrackInput::default()
        };

        let (status, message) = track.update(
            &mut input,
            touch(touch::Event::FingerMoved {
                id: Finger(1),
                position: Point::new(150.0, 52.0),
            }),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert_eq!(status, event::Status::Captured);
        assert!(matches!(message, Some(Message::PointerMoved(_))));
    }

    #[test]
    fn vertical_finger_move_passes_through() {
        let mut carousel = carousel();
        carousel.gesture_start(PointerKind::Touch, 200.0, 50.0);
        let slides = slides();
        let track = track(&carousel, &slides);
        let mut input = TrackInput {
            finger: Some(Finger(1)),
            ..TrackInput::default()
        };

        let (status, message) = track.update(
            &mut input,
            touch(touch::Event::FingerMoved {
                id: Finger(1),
                position: Point::new(198.0, 90.0),
            }),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert_eq!(status, event::Status::Ignored);
        assert!(matches!(message, Some(Message::PointerMoved(_))));
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut carousel = carousel();
        carousel.gesture_start(PointerKind::Touch, 200.0, 50.0);
        let slides = slides();
        let track = track(&carousel, &slides);
        let mut input = TrackInput {
            finger: Some(Finger(1)),
            ..TrackInput::default()
        };

        for finger_event in [
            touch::Event::FingerPressed {
                id: Finger(2),
                position: Point::new(100.0, 50.0),
            },
            touch::Event::FingerMoved {
                id: Finger(2),
                position: Point::new(20.0, 50.0),
            },
            touch::Event::FingerLifted {
                id: Finger(2),
                position: Point::new(20.0, 50.0),
            },
        ] {
            let (status, message) = track.update(
                &mut input,
                touch(finger_event),
                BOUNDS,
                mouse::Cursor::Unavailable,
            );
            assert_eq!(status, event::Status::Ignored);
            assert!(message.is_none());
        }
        assert_eq!(input.finger, Some(Finger(1)));
    }

    #[test]
    fn mouse_drag_leaving_bounds_ends_the_gesture() {
        let carousel = carousel();
        let slides = slides();
        let track = track(&carousel, &slides);
        let mut input = TrackInput::default();

        let (status, message) = track.update(
            &mut input,
            mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(200.0, 50.0)),
        );
        assert_eq!(status, event::Status::Captured);
        assert!(matches!(message, Some(Message::PointerPressed(_))));
        assert!(input.mouse_down);

        let (_, message) = track.update(
            &mut input,
            mouse(mouse::Event::CursorMoved {
                position: Point::new(400.0, 50.0),
            }),
            BOUNDS,
            mouse::Cursor::Available(Point::new(400.0, 50.0)),
        );
        assert!(matches!(message, Some(Message::PointerLeft)));
        assert!(!input.mouse_down);
    }

    #[test]
    fn cursor_leaving_the_window_ends_the_gesture() {
        let carousel = carousel();
        let slides = slides();
        let track = track(&carousel, &slides);
        let mut input = TrackInput {
            mouse_down: true,
            ..TrackInput::default()
        };

        let (_, message) = track.update(
            &mut input,
            mouse(mouse::Event::CursorLeft),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert!(matches!(message, Some(Message::PointerLeft)));
        assert!(!input.mouse_down);

        // Without a drag in progress leaving is uninteresting.
        let (status, message) = track.update(
            &mut input,
            mouse(mouse::Event::CursorLeft),
            BOUNDS,
            mouse::Cursor::Unavailable,
        );
        assert_eq!(status, event::Status::Ignored);
        assert!(message.is_none());
    }

    #[test]
    fn empty_track_ignores_input() {
        let carousel = CarouselController::new(0, CarouselTuning::default());
        let track = track(&carousel, &[]);
        let (status, message) = track.update(
            &mut TrackInput::default(),
            mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            BOUNDS,
            mouse::Cursor::Available(Point::new(10.0, 10.0)),
        );
        assert_eq!(status, event::Status::Ignored);
        assert!(message.is_none());
    }

    #[test]
    fn wide_images_letterbox_vertically() {
        let slot = Rectangle::new(Point::new(100.0, 0.0), Size::new(400.0, 400.0));
        let fitted = fit_within(slot, 800, 400);
        assert_eq!(fitted.width, 400.0);
        assert_eq!(fitted.height, 200.0);
        assert_eq!(fitted.x, 100.0);
        assert_eq!(fitted.y, 100.0);
    }

    #[test]
    fn tall_images_pillarbox_horizontally() {
        let slot = Rectangle::new(Point::ORIGIN, Size::new(300.0, 600.0));
        let fitted = fit_within(slot, 100, 400);
        assert_eq!(fitted.height, 600.0);
        assert_eq!(fitted.width, 150.0);
        assert_eq!(fitted.x, 75.0);
    }

    #[test]
    fn degenerate_images_fill_the_slot() {
        let slot = Rectangle::new(Point::ORIGIN, Size::new(300.0, 200.0));
        assert_eq!(fit_within(slot, 0, 10), slot);
    }
}
