pub(crate) fn default_background() -> crate::config::RgbaColor {
    crate::config::RgbaColor {
        r: 0.06,
        g: 0.06,
        b: 0.07,
        a: 1.0,
    }
}

pub(crate) fn default_dot_active() -> crate::config::RgbaColor {
    crate::config::RgbaColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.95,
    }
}

pub(crate) fn default_dot_inactive() -> crate::config::RgbaColor {
    crate::config::RgbaColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 0.4,
    }
}

pub(crate) fn default_settle_ms() -> u64 {
    300
}

pub(crate) fn default_min_swipe_px() -> f32 {
    40.0
}

pub(crate) fn default_swipe_fraction() -> f32 {
    0.15
}

pub(crate) fn default_axis_lock_px() -> f32 {
    5.0
}

pub(crate) fn default_edge_resistance() -> f32 {
    0.3
}

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_preload_timeout_secs() -> f32 {
    20.0
}

pub(crate) fn default_user_agent() -> String {
    concat!("swipe-gallery/", env!("CARGO_PKG_VERSION")).to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_key_next() -> String {
    "arrowright".to_string()
}

pub(crate) fn default_key_previous() -> String {
    "arrowleft".to_string()
}

pub(crate) fn default_key_first() -> String {
    "home".to_string()
}

pub(crate) fn default_key_last() -> String {
    "end".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}
