use crate::constants::*;
use crate::core::{Direction, GalleryModel, ParallaxConfig, StripSlot, StripSurface, Viewport};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `.grid-container-N` element.
pub struct DomStrip {
    element: web::HtmlElement,
}

impl DomStrip {
    fn items(&self) -> Vec<web::Element> {
        dom::query_all(&self.element, ITEM_SELECTOR)
    }
}

impl StripSurface for DomStrip {
    fn item_count(&self) -> usize {
        self.items().len()
    }

    fn direction(&self) -> Direction {
        let classes = self.element.class_list();
        Direction::from_flags(
            classes.contains(MOVING_LEFT_CLASS),
            classes.contains(MOVING_RIGHT_CLASS),
        )
    }

    fn computed_transform(&self) -> Option<String> {
        let window = web::window()?;
        dom::computed_transform(&window, &self.element)
    }

    fn reveal_items(&mut self) {
        for item in self.items() {
            if let Some(img) = dom::query_one(&item, ITEM_IMAGE_SELECTOR) {
                _ = img.class_list().remove_1(HIDDEN_CLASS);
            }
        }
    }

    fn append_copies(&mut self, count: usize) {
        for item in self.items().iter().take(count) {
            if let Ok(copy) = item.clone_node_with_deep(true) {
                _ = self.element.append_child(&copy);
            }
        }
    }

    fn set_transform(&mut self, css: &str) {
        dom::set_transform(&self.element, css);
    }
}

/// One `.gallery-wrapper` and the strips found inside it at discovery time.
pub struct GalleryBlock {
    wrapper: web::Element,
    model: GalleryModel<DomStrip>,
}

impl GalleryBlock {
    pub fn discover(document: &web::Document) -> Vec<GalleryBlock> {
        dom::document_query_all(document, GALLERY_SELECTOR)
            .into_iter()
            .map(GalleryBlock::from_wrapper)
            .collect()
    }

    fn from_wrapper(wrapper: web::Element) -> Self {
        let strips = StripSlot::ALL.into_iter().filter_map(|slot| {
            let el = dom::query_one(&wrapper, STRIP_SELECTORS[slot.index()])?;
            let element = el.dyn_into::<web::HtmlElement>().ok()?;
            Some((slot, DomStrip { element }))
        });
        let model = GalleryModel::new(strips);
        Self { wrapper, model }
    }

    #[inline]
    pub fn strip_count(&self) -> usize {
        self.model.strips().len()
    }

    pub fn update(&mut self, viewport: &Viewport, cfg: &ParallaxConfig) {
        let top = dom::document_top(&self.wrapper, viewport.scroll_y);
        let report = self.model.update(top, viewport, cfg);
        if report.toggled {
            match report.delta {
                Some(d) => log::debug!("[gallery] block at {:.0}px active, {:.0}px past threshold", top, d),
                None => log::debug!("[gallery] block at {:.0}px inactive", top),
            }
        }
    }
}
