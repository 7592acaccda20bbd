#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod gallery;
mod preview;

pub use preview::preview_image;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("scroll-gallery starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if dom::root_has_class(&document, constants::BUILDER_CLASS) {
        log::info!("[gallery] builder mode; animation disabled");
        return Ok(());
    }

    let config = crate::core::ParallaxConfig::default();
    config.validate()?;

    if dom::is_loading(&document) {
        let mut config = Some(config);
        dom::add_window_listener(&window, "DOMContentLoaded", move || {
            if let (Some(cfg), Some(doc)) = (config.take(), dom::window_document()) {
                boot(&doc, cfg);
            }
        });
    } else {
        boot(&document, config);
    }
    Ok(())
}

fn boot(document: &web::Document, config: crate::core::ParallaxConfig) {
    let galleries = gallery::GalleryBlock::discover(document);
    if galleries.is_empty() {
        log::info!("[gallery] no galleries on page");
        return;
    }
    let strips: usize = galleries.iter().map(|g| g.strip_count()).sum();
    log::info!(
        "[gallery] discovered {} galleries, {} strips",
        galleries.len(),
        strips
    );
    let animator = Rc::new(RefCell::new(frame::Animator::new(galleries, config)));
    frame::start_loop(animator);
}
