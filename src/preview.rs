use crate::constants::{PREVIEW_IMAGE_ID, PREVIEW_VISIBLE_DISPLAY};
use crate::core::data_url;
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `onchange` handler for a file input: shows the chosen image in `#preview-image`.
#[wasm_bindgen(js_name = previewImage)]
pub fn preview_image(event: web::Event) {
    let Some(file) = first_selected_file(&event) else {
        log::debug!("[preview] no file selected");
        return;
    };
    spawn_local(async move {
        if let Err(e) = show_preview(&file).await {
            log::error!("[preview] {:?}", e);
        }
    });
}

fn first_selected_file(event: &web::Event) -> Option<web::File> {
    let input = event.target()?.dyn_into::<web::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

async fn show_preview(file: &web::File) -> anyhow::Result<()> {
    let url = read_as_data_url(file).await?;
    // Shown regardless; a malformed URL is only reported.
    match data_url::parse(&url) {
        Ok(parsed) if !parsed.base64 => {
            log::warn!("[preview] `{}` is not base64 encoded", parsed.media_type);
        }
        Ok(parsed) if !parsed.is_image() => {
            log::warn!("[preview] `{}` may not render as an image", parsed.media_type);
        }
        Ok(parsed) => {
            log::info!(
                "[preview] showing {} ({} base64 chars)",
                parsed.media_type,
                parsed.payload.len()
            );
        }
        Err(e) => log::warn!("[preview] {} ({} byte file)", e, file.size()),
    }

    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let img = document
        .get_element_by_id(PREVIEW_IMAGE_ID)
        .ok_or_else(|| anyhow!("missing #{}", PREVIEW_IMAGE_ID))?
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    img.set_src(&url);
    img.style()
        .set_property("display", PREVIEW_VISIBLE_DISPLAY)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

async fn read_as_data_url(file: &web::File) -> anyhow::Result<String> {
    let reader = web::FileReader::new().map_err(|e| anyhow!("{:?}", e))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = done.result().unwrap_or(JsValue::NULL);
            _ = resolve.call1(&JsValue::NULL, &result);
        });
        let failed = reader.clone();
        let onerror = Closure::once_into_js(move || {
            let err = failed
                .error()
                .map(JsValue::from)
                .unwrap_or_else(|| JsValue::from_str("file read failed"));
            _ = reject.call1(&JsValue::NULL, &err);
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader
        .read_as_data_url(file)
        .map_err(|e| anyhow!("{:?}", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    value
        .as_string()
        .ok_or_else(|| anyhow!("reader produced a non-string result"))
}
