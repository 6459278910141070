use crate::carousel::CarouselTuning;
use serde::Deserialize;
use std::time::Duration;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_background")]
    pub background: RgbaColor,
    #[serde(default = "crate::config::defaults::default_dot_active")]
    pub dot_active: RgbaColor,
    #[serde(default = "crate::config::defaults::default_dot_inactive")]
    pub dot_inactive: RgbaColor,
    #[serde(default = "crate::config::defaults::default_settle_ms")]
    pub settle_ms: u64,
    #[serde(default = "crate::config::defaults::default_min_swipe_px")]
    pub min_swipe_px: f32,
    #[serde(default = "crate::config::defaults::default_swipe_fraction")]
    pub swipe_fraction: f32,
    #[serde(default = "crate::config::defaults::default_axis_lock_px")]
    pub axis_lock_px: f32,
    #[serde(default = "crate::config::defaults::default_edge_resistance")]
    pub edge_resistance: f32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_preload_timeout_secs")]
    pub preload_timeout_secs: f32,
    #[serde(default = "crate::config::defaults::default_user_agent")]
    pub user_agent: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_next")]
    pub key_next: String,
    #[serde(default = "crate::config::defaults::default_key_previous")]
    pub key_previous: String,
    #[serde(default = "crate::config::defaults::default_key_first")]
    pub key_first: String,
    #[serde(default = "crate::config::defaults::default_key_last")]
    pub key_last: String,
    #[serde(default = "crate::config::defaults::default_key_quit")]
    pub key_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            background: crate::config::defaults::default_background(),
            dot_active: crate::config::defaults::default_dot_active(),
            dot_inactive: crate::config::defaults::default_dot_inactive(),
            settle_ms: crate::config::defaults::default_settle_ms(),
            min_swipe_px: crate::config::defaults::default_min_swipe_px(),
            swipe_fraction: crate::config::defaults::default_swipe_fraction(),
            axis_lock_px: crate::config::defaults::default_axis_lock_px(),
            edge_resistance: crate::config::defaults::default_edge_resistance(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            preload_timeout_secs: crate::config::defaults::default_preload_timeout_secs(),
            user_agent: crate::config::defaults::default_user_agent(),
            log_level: crate::config::defaults::default_log_level(),
            key_next: crate::config::defaults::default_key_next(),
            key_previous: crate::config::defaults::default_key_previous(),
            key_first: crate::config::defaults::default_key_first(),
            key_last: crate::config::defaults::default_key_last(),
            key_quit: crate::config::defaults::default_key_quit(),
        }
    }
}

impl AppConfig {
    /// Gesture thresholds with out-of-range values pulled back to sane bounds.
    pub fn tuning(&self) -> CarouselTuning {
        let fallback = CarouselTuning::default();
        let finite_or = |value: f32, default: f32| {
            if value.is_finite() { value } else { default }
        };
        CarouselTuning {
            settle: Duration::from_millis(self.settle_ms.min(5_000)),
            min_swipe_px: finite_or(self.min_swipe_px, fallback.min_swipe_px).max(0.0),
            swipe_fraction: finite_or(self.swipe_fraction, fallback.swipe_fraction)
                .clamp(0.0, 1.0),
            axis_lock_px: finite_or(self.axis_lock_px, fallback.axis_lock_px).max(0.0),
            edge_resistance: finite_or(self.edge_resistance, fallback.edge_resistance)
                .clamp(0.0, 1.0),
        }
    }

    pub fn preload_timeout(&self) -> Duration {
        if self.preload_timeout_secs.is_finite() && self.preload_timeout_secs > 0.0 {
            Duration::from_secs_f32(self.preload_timeout_secs)
        } else {
            Duration::from_secs_f32(crate::config::defaults::default_preload_timeout_secs())
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RgbaColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<RgbaColor> for iced::Color {
    fn from(color: RgbaColor) -> Self {
        iced::Color::from_rgba(color.r, color.g, color.b, color.a)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        crate::config::defaults::default_log_level()
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
