use crate::constants::*;
use crate::core::error::GalleryError;

/// Neutral-strip speed applied from `min_width` upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedBreakpoint {
    pub min_width: f64,
    pub factor: f64,
}

/// Motion tuning for the parallax animator.
///
/// `Default` mirrors the values in `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub min_loop_items: usize,
    pub directional_speed: f64,
    /// Ordered from widest to narrowest.
    pub neutral_speeds: Vec<SpeedBreakpoint>,
    pub narrow_viewport: f64,
    pub preroll_wide: f64,
    pub preroll_narrow: f64,
    pub preroll_center_narrow: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            min_loop_items: MIN_LOOP_ITEMS,
            directional_speed: DIRECTIONAL_SPEED,
            neutral_speeds: NEUTRAL_SPEED_TABLE
                .iter()
                .map(|&(min_width, factor)| SpeedBreakpoint { min_width, factor })
                .collect(),
            narrow_viewport: NARROW_VIEWPORT_PX,
            preroll_wide: PREROLL_WIDE_PX,
            preroll_narrow: PREROLL_NARROW_PX,
            preroll_center_narrow: PREROLL_CENTER_NARROW_PX,
        }
    }
}

impl ParallaxConfig {
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.min_loop_items == 0 {
            return Err(GalleryError::ZeroLoopItems);
        }
        let ordered = self
            .neutral_speeds
            .windows(2)
            .all(|w| w[0].min_width > w[1].min_width);
        if self.neutral_speeds.is_empty() || !ordered {
            return Err(GalleryError::UnorderedBreakpoints);
        }
        Ok(())
    }

    /// Unsigned neutral speed for a viewport width.
    /// Widths under the narrowest breakpoint reuse its factor.
    pub fn neutral_speed(&self, width: f64) -> f64 {
        self.neutral_speeds
            .iter()
            .find(|bp| width >= bp.min_width)
            .or_else(|| self.neutral_speeds.last())
            .map(|bp| bp.factor)
            .unwrap_or(0.0)
    }

    #[inline]
    pub fn is_narrow(&self, width: f64) -> bool {
        width < self.narrow_viewport
    }
}
