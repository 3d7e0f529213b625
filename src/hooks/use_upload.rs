// ============================================================================
// UPLOAD - one file at a time, validated locally before anything is sent
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_flash::FlashHandle;
use crate::services::upload_spreadsheet;
use crate::utils::constants::BANNER_CLEAR_MS;
use crate::utils::validate_spreadsheet;

/// Where the single-file workflow currently stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum UploadPhase {
    #[default]
    Empty,
    Selected,
    Validating,
    Uploading(u32),
    Succeeded,
    Failed,
}

impl UploadPhase {
    /// True from validation until the request settles; the submit button and
    /// file picker are locked meanwhile.
    pub fn in_flight(&self) -> bool {
        matches!(self, UploadPhase::Validating | UploadPhase::Uploading(_))
    }

    pub fn progress(&self) -> Option<u32> {
        match self {
            UploadPhase::Uploading(percent) => Some(*percent),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct UseUploadHandle {
    pub file: Option<File>,
    pub phase: UploadPhase,
    /// Attach to the file input so a finished upload can clear its value.
    pub input_ref: NodeRef,
    pub select: Callback<Option<File>>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_upload(flash: FlashHandle, on_uploaded: Callback<()>) -> UseUploadHandle {
    let file = use_state(|| None::<File>);
    let phase = use_state(UploadPhase::default);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let input_ref = use_node_ref();

    let select = {
        let file = file.clone();
        let phase = phase.clone();
        Callback::from(move |picked: Option<File>| {
            phase.set(if picked.is_some() {
                UploadPhase::Selected
            } else {
                UploadPhase::Empty
            });
            file.set(picked);
        })
    };

    let submit = {
        let file = file.clone();
        let phase = phase.clone();
        let reset_timer = reset_timer.clone();
        let input_ref = input_ref.clone();
        let flash = flash.clone();
        Callback::from(move |_| {
            if phase.in_flight() {
                return;
            }

            let Some(picked) = (*file).clone() else {
                flash.show_error.emit("Please select a file first.".to_string());
                return;
            };

            phase.set(UploadPhase::Validating);
            if let Err(rejection) =
                validate_spreadsheet(&picked.type_(), picked.size() as u64)
            {
                // terminal: nothing goes over the wire
                log::warn!("⚠️ Rejected before upload: {}", rejection);
                flash.show_error.emit(rejection.message().to_string());
                phase.set(UploadPhase::Failed);
                arm_reset(&reset_timer, phase.clone(), UploadPhase::Selected);
                return;
            }

            phase.set(UploadPhase::Uploading(0));
            let on_progress = {
                let phase = phase.clone();
                Callback::from(move |percent: u32| phase.set(UploadPhase::Uploading(percent)))
            };

            let file = file.clone();
            let phase = phase.clone();
            let reset_timer = reset_timer.clone();
            let input_ref = input_ref.clone();
            let flash = flash.clone();
            let on_uploaded = on_uploaded.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match upload_spreadsheet(&picked, on_progress).await {
                    Ok(response) => {
                        log::info!(
                            "✅ Upload finished: {} labels across {} sheets",
                            response.label_count,
                            response.sheet_count
                        );
                        phase.set(UploadPhase::Succeeded);
                        flash.show_success.emit(response.message);
                        // the new sheet shows up via a full re-fetch, not a
                        // local insert
                        on_uploaded.emit(());

                        file.set(None);
                        if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                        arm_reset(&reset_timer, phase, UploadPhase::Empty);
                    }
                    Err(e) => {
                        log::error!("❌ Upload failed: {}", e);
                        flash.show_error.emit(e.upload_message());
                        phase.set(UploadPhase::Failed);
                        arm_reset(&reset_timer, phase, UploadPhase::Selected);
                    }
                }
            });
        })
    };

    UseUploadHandle {
        file: (*file).clone(),
        phase: *phase,
        input_ref,
        select,
        submit,
    }
}

/// Schedule the phase reset that follows a terminal banner. Replacing the
/// slot drops (cancels) any earlier timer.
fn arm_reset(
    slot: &Rc<RefCell<Option<Timeout>>>,
    phase: UseStateHandle<UploadPhase>,
    next: UploadPhase,
) {
    let timer = Timeout::new(BANNER_CLEAR_MS, move || phase.set(next));
    *slot.borrow_mut() = Some(timer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_and_transfer_count_as_in_flight() {
        assert!(UploadPhase::Validating.in_flight());
        assert!(UploadPhase::Uploading(42).in_flight());
        for phase in [
            UploadPhase::Empty,
            UploadPhase::Selected,
            UploadPhase::Succeeded,
            UploadPhase::Failed,
        ] {
            assert!(!phase.in_flight());
        }
    }

    #[test]
    fn progress_is_only_reported_while_uploading() {
        assert_eq!(UploadPhase::Uploading(73).progress(), Some(73));
        assert_eq!(UploadPhase::Selected.progress(), None);
        assert_eq!(UploadPhase::Succeeded.progress(), None);
    }
}
