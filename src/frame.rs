use crate::core::ParallaxConfig;
use crate::dom;
use crate::gallery::GalleryBlock;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Animator {
    pub galleries: Vec<GalleryBlock>,
    pub config: ParallaxConfig,
}

impl Animator {
    pub fn new(galleries: Vec<GalleryBlock>, config: ParallaxConfig) -> Self {
        Self { galleries, config }
    }

    pub fn frame(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let Some(viewport) = dom::viewport(&window) else {
            return;
        };
        for gallery in self.galleries.iter_mut() {
            gallery.update(&viewport, &self.config);
        }
    }
}

/// Request the first frame now and another on every `scroll`.
///
/// Called once the document has loaded. Several requests inside one display
/// frame each run the update, which is idempotent for fixed inputs.
pub fn start_loop(animator: Rc<RefCell<Animator>>) {
    let Some(window) = web::window() else {
        return;
    };

    let tick: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::wrap(Box::new(move || {
        match animator.try_borrow_mut() {
            Ok(mut a) => a.frame(),
            Err(_) => log::debug!("[frame] animator busy; frame skipped"),
        }
    }) as Box<dyn FnMut()>));

    let tick_scroll = tick.clone();
    dom::add_window_listener(&window, "scroll", move || request_frame(&tick_scroll));

    request_frame(&tick);
}

fn request_frame(tick: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.as_ref().unchecked_ref());
    }
}
