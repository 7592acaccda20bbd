use crate::core::config::ParallaxConfig;

/// Position of a strip inside its gallery (`.grid-container-N`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripSlot {
    First,
    Second,
    Third,
}

impl StripSlot {
    pub const ALL: [StripSlot; 3] = [StripSlot::First, StripSlot::Second, StripSlot::Third];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            StripSlot::First => 0,
            StripSlot::Second => 1,
            StripSlot::Third => 2,
        }
    }

    /// Sign used by neutral strips: the middle strip runs against the outer two.
    #[inline]
    pub fn neutral_sign(self) -> f64 {
        match self {
            StripSlot::Second => -1.0,
            StripSlot::First | StripSlot::Third => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Neutral,
}

impl Direction {
    /// `moving-right` wins when a strip carries both classes.
    pub fn from_flags(moving_left: bool, moving_right: bool) -> Self {
        match (moving_left, moving_right) {
            (_, true) => Direction::Right,
            (true, false) => Direction::Left,
            (false, false) => Direction::Neutral,
        }
    }
}

/// Scroll metrics sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
    pub width: f64,
}

/// Scroll offset at which a gallery whose top sits at `gallery_top` enters
/// the bottom of the viewport.
#[inline]
pub fn activation_threshold(gallery_top: f64, viewport: &Viewport) -> f64 {
    gallery_top - viewport.height
}

/// Distance scrolled past the activation threshold, or `None` while inactive.
pub fn scroll_delta(gallery_top: f64, viewport: &Viewport) -> Option<f64> {
    let threshold = activation_threshold(gallery_top, viewport);
    (viewport.scroll_y >= threshold).then(|| viewport.scroll_y - threshold)
}

/// Starting x offset for a strip, before scroll is added.
///
/// Long strips (`authored_items >= min_loop_items`) are parked off to the
/// left so the loop has room before its seam shows.
pub fn baseline_x(
    slot: StripSlot,
    direction: Direction,
    authored_items: usize,
    captured_x: f64,
    width: f64,
    cfg: &ParallaxConfig,
) -> f64 {
    if authored_items < cfg.min_loop_items {
        return captured_x;
    }
    let moving_left = direction == Direction::Left;
    let narrow = cfg.is_narrow(width);
    match slot {
        StripSlot::First | StripSlot::Third if !moving_left => {
            if narrow {
                cfg.preroll_narrow
            } else {
                cfg.preroll_wide
            }
        }
        StripSlot::Second if moving_left => cfg.preroll_wide,
        StripSlot::Second if narrow => cfg.preroll_center_narrow,
        _ => captured_x,
    }
}

/// Signed px of translation per px scrolled.
pub fn speed(slot: StripSlot, direction: Direction, width: f64, cfg: &ParallaxConfig) -> f64 {
    match direction {
        Direction::Right => cfg.directional_speed,
        Direction::Left => -cfg.directional_speed,
        Direction::Neutral => slot.neutral_sign() * cfg.neutral_speed(width),
    }
}

#[inline]
pub fn translate_x(baseline: f64, speed: f64, delta: f64) -> f64 {
    baseline + speed * delta
}
