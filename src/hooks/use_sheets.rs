// ============================================================================
// SHEETS - authoritative list + per-row download/delete actions
// ============================================================================

use std::collections::HashSet;

use web_sys::window;
use yew::prelude::*;

use crate::hooks::use_flash::FlashHandle;
use crate::models::{DeleteStatus, DownloadStatus, GeneratedSheet};
use crate::services::ApiClient;
use crate::state::sheet_states::{
    prune_to_ids, with_delete_status, with_download_status, without_sheet, SheetStateMap,
};
use crate::state::SheetStateStore;
use crate::utils::{download_file_name, save_archive};

#[derive(Clone)]
pub struct UseSheetsHandle {
    pub sheets: Vec<GeneratedSheet>,
    pub fetching: bool,
    pub ui_states: SheetStateMap,
    pub refresh: Callback<()>,
    pub download: Callback<GeneratedSheet>,
    pub remove: Callback<String>,
}

#[hook]
pub fn use_sheets(flash: FlashHandle) -> UseSheetsHandle {
    let store = use_context::<SheetStateStore>()
        .expect("SheetStateStore missing from the component tree");
    let sheets = use_state(Vec::<GeneratedSheet>::new);
    let fetching = use_state(|| true);
    let ui_states = {
        let store = store.clone();
        use_state(move || store.load())
    };

    let refresh = {
        let sheets = sheets.clone();
        let fetching = fetching.clone();
        let ui_states = ui_states.clone();
        let store = store.clone();
        let flash = flash.clone();
        Callback::from(move |_| {
            let sheets = sheets.clone();
            let fetching = fetching.clone();
            let ui_states = ui_states.clone();
            let store = store.clone();
            let flash = flash.clone();
            wasm_bindgen_futures::spawn_local(async move {
                fetching.set(true);
                match ApiClient::new().my_sheets().await {
                    Ok(list) => {
                        // reconcile, never merge: entries for ids the server
                        // no longer reports are dropped
                        let known: HashSet<String> =
                            list.iter().map(|sheet| sheet.id.clone()).collect();
                        let cleaned = prune_to_ids(&ui_states, &known);
                        store.save(&cleaned);
                        ui_states.set(cleaned);
                        sheets.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Fetching sheets failed: {}", e);
                        flash.show_error.emit("Failed to load your saved sheets".to_string());
                    }
                }
                fetching.set(false);
            });
        })
    };

    // Load the list once on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let download = {
        let ui_states = ui_states.clone();
        let store = store.clone();
        let flash = flash.clone();
        Callback::from(move |sheet: GeneratedSheet| {
            let entry = ui_states.get(&sheet.id).copied().unwrap_or_default();
            if entry.download_disabled() {
                return;
            }

            let marked =
                with_download_status(&ui_states, &sheet.id, DownloadStatus::Downloading);
            store.save(&marked);
            ui_states.set(marked.clone());

            let ui_states = ui_states.clone();
            let store = store.clone();
            let flash = flash.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let saved = match ApiClient::new().download_sheet(&sheet.id).await {
                    Ok(bytes) => {
                        let filename = download_file_name(&sheet.original_filename);
                        save_archive(&bytes, &filename).map_err(|e| {
                            log::error!("❌ Browser download failed: {}", e);
                        })
                    }
                    Err(e) => {
                        log::error!("❌ Downloading sheet {} failed: {}", sheet.id, e);
                        Err(())
                    }
                };

                let next = match saved {
                    // downloaded is sticky; it does not fall back to idle
                    Ok(()) => with_download_status(&marked, &sheet.id, DownloadStatus::Downloaded),
                    Err(()) => {
                        flash.show_error.emit("Failed to download sheet".to_string());
                        with_download_status(&marked, &sheet.id, DownloadStatus::Idle)
                    }
                };
                store.save(&next);
                ui_states.set(next);
            });
        })
    };

    let remove = {
        let sheets = sheets.clone();
        let ui_states = ui_states.clone();
        let store = store.clone();
        let flash = flash.clone();
        Callback::from(move |sheet_id: String| {
            let entry = ui_states.get(&sheet_id).copied().unwrap_or_default();
            if entry.delete_disabled() {
                return;
            }

            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message(
                        "Are you sure you want to delete this sheet? This cannot be undone.",
                    )
                    .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let marked = with_delete_status(&ui_states, &sheet_id, DeleteStatus::Deleting);
            store.save(&marked);
            ui_states.set(marked.clone());

            let sheets = sheets.clone();
            let ui_states = ui_states.clone();
            let store = store.clone();
            let flash = flash.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().delete_sheet(&sheet_id).await {
                    Ok(()) => {
                        let remaining: Vec<GeneratedSheet> = sheets
                            .iter()
                            .filter(|sheet| sheet.id != sheet_id)
                            .cloned()
                            .collect();
                        sheets.set(remaining);

                        let next = without_sheet(&marked, &sheet_id);
                        store.save(&next);
                        ui_states.set(next);

                        flash.show_success.emit("Sheet deleted successfully".to_string());
                    }
                    Err(e) => {
                        log::error!("❌ Deleting sheet {} failed: {}", sheet_id, e);
                        let next = with_delete_status(&marked, &sheet_id, DeleteStatus::Idle);
                        store.save(&next);
                        ui_states.set(next);
                        flash.show_error.emit("Failed to delete sheet".to_string());
                    }
                }
            });
        })
    };

    UseSheetsHandle {
        sheets: (*sheets).clone(),
        fetching: *fetching,
        ui_states: (*ui_states).clone(),
        refresh,
        download,
        remove,
    }
}
