use crate::core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// True when the root `<html>` element carries `class_name`.
pub fn root_has_class(document: &web::Document, class_name: &str) -> bool {
    document
        .document_element()
        .map(|el| el.class_list().contains(class_name))
        .unwrap_or(false)
}

#[inline]
pub fn is_loading(document: &web::Document) -> bool {
    document.ready_state() == "loading"
}

/// All elements under `root` matching `selector`; an invalid selector yields none.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn document_query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_one(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn viewport(window: &web::Window) -> Option<Viewport> {
    Some(Viewport {
        scroll_y: window.scroll_y().ok()?,
        height: window.inner_height().ok()?.as_f64()?,
        width: window.inner_width().ok()?.as_f64()?,
    })
}

/// Top edge of `el` in document coordinates.
#[inline]
pub fn document_top(el: &web::Element, scroll_y: f64) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y
}

pub fn computed_transform(window: &web::Window, el: &web::Element) -> Option<String> {
    let style = window.get_computed_style(el).ok().flatten()?;
    style.get_property_value("transform").ok()
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("transform", value);
}

pub fn add_window_listener(window: &web::Window, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
