// ============================================================================
// UPLOAD - multipart submission over XmlHttpRequest
// ============================================================================
// fetch() cannot observe upload progress, so this one request goes through
// XHR and reports bytes-sent as a 0..=100 percentage.

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};
use yew::Callback;

use crate::error::ApiError;
use crate::models::{ErrorBody, UploadResponse};
use crate::utils::constants::BACKEND_URL;

/// Submit one spreadsheet as `multipart/form-data` and wait for the backend
/// to finish generating labels. `on_progress` fires with the upload-leg
/// percentage as bytes go out.
pub async fn upload_spreadsheet(
    file: &File,
    on_progress: Callback<u32>,
) -> Result<UploadResponse, ApiError> {
    let xhr = XmlHttpRequest::new()
        .map_err(|_| ApiError::Network("Could not create upload request".to_string()))?;
    xhr.open_with_async("POST", &format!("{}/upload", BACKEND_URL), true)
        .map_err(|_| ApiError::Network("Could not open upload request".to_string()))?;
    xhr.set_with_credentials(true);

    let form = FormData::new()
        .map_err(|_| ApiError::Network("Could not build form data".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("Could not attach file".to_string()))?;

    if let Ok(upload) = xhr.upload() {
        let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
            if event.length_computable() && event.total() > 0.0 {
                let percent = ((event.loaded() * 100.0) / event.total()).round() as u32;
                on_progress.emit(percent.min(100));
            }
        });
        upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));
        // listener must outlive this scope; one leak per upload attempt
        progress.forget();
    }

    // Resolve once the request settles; HTTP status is read off the XHR
    // afterwards. Reject only means the transport failed.
    let settled = Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        xhr.set_onload(Some(onload.unchecked_ref()));

        let onerror = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = reject.call0(&JsValue::NULL);
        });
        xhr.set_onerror(Some(onerror.unchecked_ref()));
    });

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|_| ApiError::Network("Could not send upload".to_string()))?;

    JsFuture::from(settled)
        .await
        .map_err(|_| ApiError::Network("Upload failed before a response arrived".to_string()))?;

    let status = xhr
        .status()
        .map_err(|_| ApiError::Network("Upload status unavailable".to_string()))?;
    let body = xhr.response_text().ok().flatten().unwrap_or_default();

    if (200..300).contains(&status) {
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Network(format!("Unreadable server response: {}", e)))
    } else {
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.error);
        Err(ApiError::from_status(status, detail))
    }
}
