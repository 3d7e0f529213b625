use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::constants::BANNER_CLEAR_MS;

/// Transient banner state. Messages clear themselves after a fixed delay;
/// showing a new one cancels the previous timer instead of racing it.
#[derive(Clone, PartialEq)]
pub struct FlashHandle {
    pub error: Option<String>,
    pub success: Option<String>,
    pub show_error: Callback<String>,
    pub show_success: Callback<String>,
}

#[hook]
pub fn use_flash() -> FlashHandle {
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    // Dropping a Timeout cancels it, so replacing the slot kills the old timer
    let error_timer = use_mut_ref(|| None::<Timeout>);
    let success_timer = use_mut_ref(|| None::<Timeout>);

    let show_error = {
        let error = error.clone();
        let error_timer = error_timer.clone();
        Callback::from(move |message: String| {
            error.set(Some(message));
            let clear = {
                let error = error.clone();
                Timeout::new(BANNER_CLEAR_MS, move || error.set(None))
            };
            *error_timer.borrow_mut() = Some(clear);
        })
    };

    let show_success = {
        let success = success.clone();
        let success_timer = success_timer.clone();
        Callback::from(move |message: String| {
            success.set(Some(message));
            let clear = {
                let success = success.clone();
                Timeout::new(BANNER_CLEAR_MS, move || success.set(None))
            };
            *success_timer.borrow_mut() = Some(clear);
        })
    };

    FlashHandle {
        error: (*error).clone(),
        success: (*success).clone(),
        show_error,
        show_success,
    }
}
