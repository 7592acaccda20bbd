use crate::core::config::ParallaxConfig;
use crate::core::parallax::{self, Direction, StripSlot, Viewport};
use crate::core::strip::StripState;
use crate::core::transform::{parse_computed_transform, translate3d_css};
use glam::DMat4;
use smallvec::SmallVec;

/// The element-side operations a strip needs each frame.
///
/// Implemented over `web_sys` elements by the web glue and by plain structs in tests.
pub trait StripSurface {
    fn item_count(&self) -> usize;
    fn direction(&self) -> Direction;
    /// Computed-style transform before anything was written; `None` if unavailable.
    fn computed_transform(&self) -> Option<String>;
    /// Clear the hidden flag on every item image.
    fn reveal_items(&mut self);
    /// Deep-clone the first `count` items and append the copies.
    fn append_copies(&mut self, count: usize);
    fn set_transform(&mut self, css: &str);
}

pub struct Strip<S> {
    pub surface: S,
    pub state: StripState,
}

/// Result of one gallery frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Distance past the activation threshold; `None` while inactive.
    pub delta: Option<f64>,
    /// The gallery switched between active and inactive this frame.
    pub toggled: bool,
}

/// Up to three strips of one gallery block and its activation state.
pub struct GalleryModel<S> {
    strips: SmallVec<[Strip<S>; 3]>,
    active: bool,
}

impl<S: StripSurface> GalleryModel<S> {
    pub fn new(strips: impl IntoIterator<Item = (StripSlot, S)>) -> Self {
        Self {
            strips: strips
                .into_iter()
                .map(|(slot, surface)| Strip {
                    surface,
                    state: StripState::new(slot),
                })
                .collect(),
            active: false,
        }
    }

    #[inline]
    pub fn strips(&self) -> &[Strip<S>] {
        &self.strips
    }

    #[cfg(test)]
    pub fn strips_mut(&mut self) -> &mut [Strip<S>] {
        &mut self.strips
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run one frame for a gallery whose top edge sits at `top` in document
    /// coordinates: capture baselines, check activation, then reveal, pad and
    /// translate every strip.
    pub fn update(&mut self, top: f64, viewport: &Viewport, cfg: &ParallaxConfig) -> FrameReport {
        // Baselines come from the untouched computed style, so capture before any write.
        for strip in self.strips.iter_mut().filter(|s| !s.state.is_captured()) {
            capture(strip);
        }

        let delta = parallax::scroll_delta(top, viewport);
        let toggled = delta.is_some() != self.active;
        self.active = delta.is_some();

        if let Some(delta) = delta {
            for strip in self.strips.iter_mut() {
                animate(strip, delta, viewport.width, cfg);
            }
        }
        FrameReport { delta, toggled }
    }
}

fn capture<S: StripSurface>(strip: &mut Strip<S>) {
    let raw = strip.surface.computed_transform().unwrap_or_default();
    let initial = parse_computed_transform(&raw).unwrap_or_else(|e| {
        log::warn!(
            "[gallery] strip {}: {}; using identity baseline",
            strip.state.slot().index() + 1,
            e
        );
        DMat4::IDENTITY
    });
    strip.state.capture(initial, strip.surface.item_count());
}

fn animate<S: StripSurface>(strip: &mut Strip<S>, delta: f64, width: f64, cfg: &ParallaxConfig) {
    strip.surface.reveal_items();

    let direction = strip.surface.direction();
    let live_items = strip.surface.item_count();
    let Some(frame) = strip.state.plan(direction, live_items, delta, width, cfg) else {
        return;
    };

    if frame.clone_count > 0 {
        strip.surface.append_copies(frame.clone_count);
        log::debug!(
            "[gallery] strip {} padded from {} to {} items",
            strip.state.slot().index() + 1,
            strip.state.captured().map_or(live_items, |c| c.authored_items),
            live_items + frame.clone_count
        );
    }

    strip.surface.set_transform(&translate3d_css(frame.translate_x));
}
