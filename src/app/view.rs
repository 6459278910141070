use super::messages::Message;
use super::state::{
    App, ARROW_FONT_SIZE_PX, COUNTER_FONT_SIZE_PX, DOT_SIZE_PX, DOT_SPACING_PX,
    OVERLAY_PADDING_PX,
};
use super::track::SlideTrack;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Row, button, canvas, container, stack, text};
use iced::{Color, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        if self.carousel.is_empty() {
            return container(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .into();
        }

        let track = canvas(SlideTrack {
            carousel: &self.carousel,
            slides: &self.media.slides,
            position: self.track_position,
            background: self.config.background.into(),
            foreground: self.foreground(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers = stack![track];

        if self.carousel.shows_counter() {
            layers = layers.push(self.counter_badge());
        }
        if self.carousel.shows_previous_arrow() {
            layers = layers.push(Self::arrow("‹", Message::Previous, Horizontal::Left));
        }
        if self.carousel.shows_next_arrow() {
            layers = layers.push(Self::arrow("›", Message::Next, Horizontal::Right));
        }
        if self.carousel.shows_dots() {
            layers = layers.push(self.dots());
        }

        layers.width(Length::Fill).height(Length::Fill).into()
    }
}

impl App {
    fn foreground(&self) -> Color {
        if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            Color::from_rgb(0.85, 0.85, 0.85)
        } else {
            Color::from_rgb(0.15, 0.15, 0.15)
        }
    }

    pub(super) fn counter_label(&self) -> String {
        format!(
            "{} / {}",
            self.carousel.current_index() + 1,
            self.carousel.len()
        )
    }

    fn counter_badge(&self) -> Element<'_, Message> {
        let badge = container(text(self.counter_label()).size(COUNTER_FONT_SIZE_PX).color(Color::WHITE))
            .padding([4, 10])
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.55).into()),
                border: iced::Border {
                    radius: 10.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        container(badge)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(OVERLAY_PADDING_PX)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top)
            .into()
    }

    fn arrow(label: &str, message: Message, side: Horizontal) -> Element<'_, Message> {
        let control = button(
            text(label)
                .size(ARROW_FONT_SIZE_PX)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .on_press(message)
        .padding([2, 12])
        .style(|_theme: &Theme, status| {
            let alpha = match status {
                button::Status::Hovered | button::Status::Pressed => 0.75,
                _ => 0.45,
            };
            button::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, alpha).into()),
                text_color: Color::WHITE,
                border: iced::Border {
                    radius: 18.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

        container(control)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(OVERLAY_PADDING_PX)
            .align_x(side)
            .align_y(Vertical::Center)
            .into()
    }

    fn dots(&self) -> Element<'_, Message> {
        let active: Color = self.config.dot_active.into();
        let inactive: Color = self.config.dot_inactive.into();
        let current = self.carousel.current_index();

        let row = (0..self.carousel.len()).fold(
            Row::new().spacing(DOT_SPACING_PX),
            |row, index| {
                let fill = if index == current { active } else { inactive };
                row.push(
                    button(text(""))
                        .on_press(Message::DotPressed(index))
                        .width(Length::Fixed(DOT_SIZE_PX))
                        .height(Length::Fixed(DOT_SIZE_PX))
                        .padding(0)
                        .style(move |_theme: &Theme, _status| button::Style {
                            background: Some(fill.into()),
                            border: iced::Border {
                                radius: (DOT_SIZE_PX / 2.0).into(),
                                ..Default::default()
                            },
                            ..Default::default()
                        }),
                )
            },
        );

        container(row)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(OVERLAY_PADDING_PX)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .into()
    }
}
