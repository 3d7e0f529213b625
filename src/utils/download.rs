use wasm_bindgen::JsCast;
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Hand the fetched archive bytes to the browser as a file download: wrap
/// them in a Blob, point a hidden anchor at an object URL and click it.
pub fn save_archive(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());

    let options = BlobPropertyBag::new();
    options.set_type("application/zip");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "Could not build archive blob".to_string())?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Could not create object URL".to_string())?;

    let document = window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;
    let body = document.body().ok_or("No document body")?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Could not create anchor".to_string())?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.set_attribute("style", "display: none");

    body.append_child(&anchor)
        .map_err(|_| "Could not attach anchor".to_string())?;
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    let _ = body.remove_child(&anchor);

    Ok(())
}
