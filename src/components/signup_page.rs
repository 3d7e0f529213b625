use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Header;
use crate::hooks::{use_navigator, use_session, Route, SessionStatus};
use crate::services::ApiClient;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let navigator = navigator.clone();
        use_effect_with(session.status, move |status| {
            if *status == SessionStatus::Authenticated {
                navigator.go.emit(Route::Dashboard);
            }
            || ()
        });
    }

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input), Some(confirm_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
                confirm_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();
            let confirm = confirm_input.value();

            // all checks are local; nothing is sent until they pass
            if email.is_empty() || password.is_empty() || confirm.is_empty() {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }
            if password != confirm {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if password.len() < 6 {
                error.set(Some(
                    "Password must be at least 6 characters long".to_string(),
                ));
                return;
            }

            let submitting = submitting.clone();
            let error = error.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                match ApiClient::new().signup(&email, &password).await {
                    Ok(response) if response.success => {
                        log::info!("✅ Account created");
                        error.set(None);
                        session.refresh.emit(());
                        navigator.go.emit(Route::Dashboard);
                    }
                    Ok(response) => {
                        error.set(Some(
                            response
                                .message
                                .unwrap_or_else(|| "Sign up failed".to_string()),
                        ));
                    }
                    Err(e) => {
                        log::error!("❌ Sign up failed: {}", e);
                        let message = e.detail().unwrap_or("Sign up failed").to_string();
                        error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go_login = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.go.emit(Route::Login);
        })
    };

    if session.status == SessionStatus::Checking {
        return html! {
            <div class="page-loading">
                <div class="spinner"></div>
            </div>
        };
    }

    html! {
        <div class="page">
            <Header />
            <div class="auth-container">
                <h2>{"Create Account"}</h2>

                if let Some(message) = &*error {
                    <div class="banner banner-error">
                        <p>{ message }</p>
                    </div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <label>
                        <p>{"Email"}</p>
                        <input
                            type="text"
                            placeholder="Enter your email"
                            ref={email_ref}
                            disabled={*submitting}
                        />
                    </label>
                    <label>
                        <p>{"Password"}</p>
                        <input
                            type="password"
                            placeholder="Enter your password"
                            ref={password_ref}
                            disabled={*submitting}
                        />
                    </label>
                    <label>
                        <p>{"Verify Password"}</p>
                        <input
                            type="password"
                            placeholder="Re-enter your password"
                            ref={confirm_ref}
                            disabled={*submitting}
                        />
                    </label>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Signing Up..." } else { "Sign Up" } }
                    </button>
                </form>

                <p class="auth-footer">
                    {"Already have an account? "}
                    <a href="/login" onclick={go_login}>{"Login"}</a>
                </p>
            </div>
        </div>
    }
}
