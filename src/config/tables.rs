use super::defaults;
use super::models::{AppConfig, LogLevel, RgbaColor, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    carousel: CarouselConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    preload: PreloadConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            background: tables.appearance.background,
            dot_active: tables.appearance.dot_active,
            dot_inactive: tables.appearance.dot_inactive,
            settle_ms: tables.carousel.settle_ms,
            min_swipe_px: tables.carousel.min_swipe_px,
            swipe_fraction: tables.carousel.swipe_fraction,
            axis_lock_px: tables.carousel.axis_lock_px,
            edge_resistance: tables.carousel.edge_resistance,
            window_width: tables.window.width,
            window_height: tables.window.height,
            preload_timeout_secs: tables.preload.timeout_secs,
            user_agent: tables.preload.user_agent,
            log_level: tables.logging.log_level,
            key_next: tables.keys.next,
            key_previous: tables.keys.previous,
            key_first: tables.keys.first,
            key_last: tables.keys.last,
            key_quit: tables.keys.quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                background: config.background,
                dot_active: config.dot_active,
                dot_inactive: config.dot_inactive,
            },
            carousel: CarouselConfig {
                settle_ms: config.settle_ms,
                min_swipe_px: config.min_swipe_px,
                swipe_fraction: config.swipe_fraction,
                axis_lock_px: config.axis_lock_px,
                edge_resistance: config.edge_resistance,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
            },
            preload: PreloadConfig {
                timeout_secs: config.preload_timeout_secs,
                user_agent: config.user_agent.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                next: config.key_next.clone(),
                previous: config.key_previous.clone(),
                first: config.key_first.clone(),
                last: config.key_last.clone(),
                quit: config.key_quit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_background")]
    background: RgbaColor,
    #[serde(default = "defaults::default_dot_active")]
    dot_active: RgbaColor,
    #[serde(default = "defaults::default_dot_inactive")]
    dot_inactive: RgbaColor,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            background: defaults::default_background(),
            dot_active: defaults::default_dot_active(),
            dot_inactive: defaults::default_dot_inactive(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct CarouselConfig {
    #[serde(default = "defaults::default_settle_ms")]
    settle_ms: u64,
    #[serde(default = "defaults::default_min_swipe_px")]
    min_swipe_px: f32,
    #[serde(default = "defaults::default_swipe_fraction")]
    swipe_fraction: f32,
    #[serde(default = "defaults::default_axis_lock_px")]
    axis_lock_px: f32,
    #[serde(default = "defaults::default_edge_resistance")]
    edge_resistance: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            settle_ms: defaults::default_settle_ms(),
            min_swipe_px: defaults::default_min_swipe_px(),
            swipe_fraction: defaults::default_swipe_fraction(),
            axis_lock_px: defaults::default_axis_lock_px(),
            edge_resistance: defaults::default_edge_resistance(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PreloadConfig {
    #[serde(default = "defaults::default_preload_timeout_secs")]
    timeout_secs: f32,
    #[serde(default = "defaults::default_user_agent")]
    user_agent: String,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        PreloadConfig {
            timeout_secs: defaults::default_preload_timeout_secs(),
            user_agent: defaults::default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next")]
    next: String,
    #[serde(default = "defaults::default_key_previous")]
    previous: String,
    #[serde(default = "defaults::default_key_first")]
    first: String,
    #[serde(default = "defaults::default_key_last")]
    last: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next: defaults::default_key_next(),
            previous: defaults::default_key_previous(),
            first: defaults::default_key_first(),
            last: defaults::default_key_last(),
            quit: defaults::default_key_quit(),
        }
    }
}
