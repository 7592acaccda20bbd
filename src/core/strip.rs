use crate::core::config::ParallaxConfig;
use crate::core::parallax::{self, Direction, StripSlot};
use crate::core::transform::translation_x;
use glam::DMat4;

/// Baseline captured the first time a strip is seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Captured {
    pub initial: DMat4,
    /// Item count before any duplication.
    pub authored_items: usize,
}

/// What the DOM layer must do to a strip this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripFrame {
    /// Number of leading items to deep-clone and append (0 once duplicated).
    pub clone_count: usize,
    pub translate_x: f64,
}

/// Per-strip animation state, owned alongside the strip element.
#[derive(Clone, Debug)]
pub struct StripState {
    slot: StripSlot,
    captured: Option<Captured>,
    duplicated: bool,
}

impl StripState {
    pub fn new(slot: StripSlot) -> Self {
        Self {
            slot,
            captured: None,
            duplicated: false,
        }
    }

    #[inline]
    pub fn slot(&self) -> StripSlot {
        self.slot
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn captured(&self) -> Option<&Captured> {
        self.captured.as_ref()
    }

    #[cfg(test)]
    #[inline]
    pub fn is_duplicated(&self) -> bool {
        self.duplicated
    }

    /// Record the initial transform. Later calls are ignored; returns whether
    /// this call did the capture.
    pub fn capture(&mut self, initial: DMat4, item_count: usize) -> bool {
        if self.captured.is_some() {
            return false;
        }
        self.captured = Some(Captured {
            initial,
            authored_items: item_count,
        });
        true
    }

    /// Plan an active frame. `live_items` is the strip's current item count,
    /// `delta` the distance scrolled past the gallery's activation threshold.
    ///
    /// Returns `None` until the strip has been captured.
    pub fn plan(
        &mut self,
        direction: Direction,
        live_items: usize,
        delta: f64,
        width: f64,
        cfg: &ParallaxConfig,
    ) -> Option<StripFrame> {
        let captured = self.captured?;

        let clone_count = if !self.duplicated && captured.authored_items < cfg.min_loop_items {
            self.duplicated = true;
            live_items
        } else {
            0
        };

        let baseline = parallax::baseline_x(
            self.slot,
            direction,
            captured.authored_items,
            translation_x(&captured.initial),
            width,
            cfg,
        );
        let speed = parallax::speed(self.slot, direction, width, cfg);
        Some(StripFrame {
            clone_count,
            translate_x: parallax::translate_x(baseline, speed, delta),
        })
    }
}
