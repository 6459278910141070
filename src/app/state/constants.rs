use std::time::Duration;

/// Frame cadence while a settle window or animation is live.
pub(crate) const FRAME_INTERVAL: Duration = Duration::from_millis(16);
pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MAX_WINDOW_WIDTH: f32 = 7680.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 240.0;
pub(crate) const MAX_WINDOW_HEIGHT: f32 = 4320.0;
pub(crate) const OVERLAY_PADDING_PX: f32 = 12.0;
pub(crate) const COUNTER_FONT_SIZE_PX: f32 = 13.0;
pub(crate) const ARROW_FONT_SIZE_PX: f32 = 22.0;
pub(crate) const DOT_SIZE_PX: f32 = 8.0;
pub(crate) const DOT_SPACING_PX: f32 = 6.0;
pub(crate) const PLACEHOLDER_FONT_SIZE_PX: f32 = 16.0;
