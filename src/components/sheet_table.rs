use yew::prelude::*;

use crate::models::{DeleteStatus, DownloadStatus, GeneratedSheet};
use crate::state::SheetStateMap;
use crate::utils::{format_file_size, format_timestamp};

#[derive(Properties, PartialEq)]
pub struct SheetTableProps {
    pub sheets: Vec<GeneratedSheet>,
    pub ui_states: SheetStateMap,
    pub on_refresh: Callback<()>,
    pub on_download: Callback<GeneratedSheet>,
    pub on_delete: Callback<String>,
}

#[function_component(SheetTable)]
pub fn sheet_table(props: &SheetTableProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <div class="sheet-list">
            <div class="sheet-list-header">
                <h2>{ format!("Your Generated Sheets ({})", props.sheets.len()) }</h2>
                <button class="btn-refresh" onclick={on_refresh}>{"Refresh"}</button>
            </div>
            <table class="sheet-table">
                <thead>
                    <tr>
                        <th>{"Filename"}</th>
                        <th>{"Labels"}</th>
                        <th>{"Sheets"}</th>
                        <th>{"Size"}</th>
                        <th>{"Created"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.sheets.iter().map(|sheet| sheet_row(props, sheet)) }
                </tbody>
            </table>
        </div>
    }
}

fn sheet_row(props: &SheetTableProps, sheet: &GeneratedSheet) -> Html {
    let state = props.ui_states.get(&sheet.id).copied().unwrap_or_default();

    let download_label = match state.download_status {
        DownloadStatus::Idle => "Download",
        DownloadStatus::Downloading => "Downloading...",
        DownloadStatus::Downloaded => "Downloaded",
    };
    let delete_label = match state.delete_status {
        DeleteStatus::Idle => "Delete",
        DeleteStatus::Deleting => "Deleting...",
    };

    let on_download = {
        let on_download = props.on_download.clone();
        let sheet = sheet.clone();
        Callback::from(move |_: MouseEvent| on_download.emit(sheet.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = sheet.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <tr key={sheet.id.clone()}>
            <td class="sheet-filename">{ &sheet.original_filename }</td>
            <td>{ sheet.label_count }</td>
            <td>{ sheet.sheet_count }</td>
            <td>{ format_file_size(sheet.total_size_bytes) }</td>
            <td>{ format_timestamp(&sheet.created_at) }</td>
            <td>
                <div class="sheet-actions">
                    <button
                        class={classes!("link-action", download_class(state.download_status))}
                        onclick={on_download}
                        disabled={state.download_disabled()}
                    >
                        { download_label }
                    </button>
                    <button
                        class="link-action action-delete"
                        onclick={on_delete}
                        disabled={state.delete_disabled()}
                    >
                        { delete_label }
                    </button>
                </div>
            </td>
        </tr>
    }
}

fn download_class(status: DownloadStatus) -> &'static str {
    match status {
        DownloadStatus::Idle => "action-download",
        DownloadStatus::Downloading => "action-download-busy",
        DownloadStatus::Downloaded => "action-downloaded",
    }
}
