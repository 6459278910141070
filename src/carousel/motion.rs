use std::time::{Duration, Instant};

/// Animated track position, measured in slides so a resize mid-animation
/// keeps the same visual progress.
#[derive(Debug, Clone)]
pub struct TrackMotion {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl TrackMotion {
    pub fn new(duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started_at: None,
            duration,
        }
    }

    /// Jump to `position` with no animation.
    pub fn snap_to(&mut self, position: f32) {
        self.from = position;
        self.to = position;
        self.started_at = None;
    }

    /// Track the controller's resting slide.
    ///
    /// While dragging the track follows the finger 1:1, so the motion snaps.
    /// Once released, `released_offset_px` is the drag displacement that was
    /// on screen when the finger lifted; the animation starts from there.
    pub fn follow(
        &mut self,
        target: usize,
        dragging: bool,
        released_offset_px: f32,
        width: f32,
        now: Instant,
    ) {
        let target = target as f32;
        if dragging {
            self.snap_to(target);
            return;
        }

        let mut from = self.position(now);
        if width > 0.0 {
            from -= released_offset_px / width;
        }
        if (from - target).abs() < f32::EPSILON {
            self.snap_to(target);
            return;
        }
        if (self.to - target).abs() < f32::EPSILON && released_offset_px == 0.0 {
            return;
        }
        self.from = from;
        self.to = target;
        self.started_at = Some(now);
    }

    pub fn position(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };
        let progress = self.progress(started_at, now);
        self.from + (self.to - self.from) * ease_out_cubic(progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .map(|started_at| self.progress(started_at, now) < 1.0)
            .unwrap_or(false)
    }

    fn progress(&self, started_at: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
