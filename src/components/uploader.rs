// ============================================================================
// UPLOADER - spreadsheet in, generated label sheets out
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::SheetTable;
use crate::hooks::{use_flash, use_sheets, use_upload};
use crate::utils::format_file_size;

#[function_component(Uploader)]
pub fn uploader() -> Html {
    let flash = use_flash();
    let sheets = use_sheets(flash.clone());
    let upload = use_upload(flash.clone(), {
        let refresh = sheets.refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    });

    let on_file_change = {
        let select = upload.select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let picked = input.files().and_then(|list| list.get(0));
            select.emit(picked);
        })
    };

    let on_generate = {
        let submit = upload.submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let busy = upload.phase.in_flight();
    let selected_label = upload
        .file
        .as_ref()
        .map(|file| file.name())
        .unwrap_or_else(|| "Select File".to_string());

    html! {
        <div class="uploader">
            <h1>{"Generate Labels"}</h1>

            <div class="drop-zone">
                <p class="drop-title">{"Drag and drop or browse files"}</p>
                <p class="drop-hint">
                    {"Supported formats: CSV, Excel (.xlsx, .xls). Maximum size: 50MB."}
                </p>
                <div class="file-picker">
                    <input
                        ref={upload.input_ref.clone()}
                        type="file"
                        accept=".csv,.xlsx,.xls"
                        onchange={on_file_change}
                        disabled={busy}
                    />
                    <button disabled={busy}>{ selected_label }</button>
                </div>
                if let Some(file) = &upload.file {
                    <p class="file-summary">
                        { format!("Selected: {} ({})", file.name(), format_file_size(file.size() as u64)) }
                    </p>
                }
            </div>

            <button class="btn-primary btn-generate" onclick={on_generate} disabled={busy}>
                { if busy { "Generating..." } else { "Generate Label Sheets" } }
            </button>

            if let Some(percent) = upload.phase.progress() {
                <div class="upload-progress">
                    <div class="progress-labels">
                        <span>{"Uploading file..."}</span>
                        <span>{ format!("{}%", percent) }</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style={format!("width: {}%", percent)}></div>
                    </div>
                </div>
            }

            if let Some(message) = &flash.error {
                <div class="banner banner-error">
                    <p>{ message }</p>
                </div>
            }

            if let Some(message) = &flash.success {
                <div class="banner banner-success">
                    <p>{ message }</p>
                </div>
            }

            if sheets.fetching {
                <div class="sheets-loading">
                    <div class="spinner"></div>
                    <p>{"Loading your sheets..."}</p>
                </div>
            } else if sheets.sheets.is_empty() {
                <div class="sheets-empty">
                    <p>{"No sheets generated yet. Upload a CSV file to get started!"}</p>
                </div>
            } else {
                <SheetTable
                    sheets={sheets.sheets.clone()}
                    ui_states={sheets.ui_states.clone()}
                    on_refresh={sheets.refresh.clone()}
                    on_download={sheets.download.clone()}
                    on_delete={sheets.remove.clone()}
                />
            }
        </div>
    }
}
