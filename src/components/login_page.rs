use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::Header;
use crate::hooks::{use_navigator, use_session, Route, SessionStatus};
use crate::services::ApiClient;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Already signed in: straight to the dashboard
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
        let submitting = submitting.clone();
        let error = error.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };
            let email = email_input.value();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Email and password required".to_string()));
                return;
            }

            let submitting = submitting.clone();
            let error = error.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                match ApiClient::new().login(&email, &password).await {
                    Ok(response) if response.success => {
                        log::info!("✅ Login successful");
                        error.set(None);
                        session.refresh.emit(());
                        navigator.go.emit(Route::Dashboard);
                    }
                    Ok(_) => {
                        error.set(Some("Login failed".to_string()));
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        let message = e
                            .detail()
                            .unwrap_or("Login failed")
                            .to_string();
                        error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go_signup = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.go.emit(Route::Signup);
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
                <h2>{"Welcome back"}</h2>

                if let Some(message) = &*error {
                    <div class="banner banner-error">
                        <p>{ message }</p>
                    </div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <label>
                        <p>{"Username"}</p>
                        <input
                            type="text"
                            placeholder="Enter your username"
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
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Logging in..." } else { "Login" } }
                    </button>
                </form>

                <p class="auth-footer">
                    {"Need an account? "}
                    <a href="/signup" onclick={go_signup}>{"Sign Up"}</a>
                </p>
            </div>
        </div>
    }
}
