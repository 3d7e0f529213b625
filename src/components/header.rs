use yew::prelude::*;

use crate::hooks::{use_navigator, use_session, Navigator, Route, SessionStatus};

/// Top bar shown on every page. The link set is one of two explicit variants
/// picked by the shared session status; there is no per-header auth check.
#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout.emit(());
            // leave for the login screen whether or not the call lands
            navigator.go.emit(Route::Login);
        })
    };

    let nav = match session.status {
        SessionStatus::Authenticated => {
            authenticated_nav(&navigator, on_logout)
        }
        _ => anonymous_nav(&navigator),
    };

    html! {
        <header class="app-header">
            <div class="brand">
                <span class="brand-mark">{"◆"}</span>
                <a href="/" onclick={nav_link(&navigator, Route::Landing)} class="brand-name">
                    {"LabelGenius"}
                </a>
            </div>
            <nav class="main-nav">{ nav }</nav>
        </header>
    }
}

fn nav_link(navigator: &Navigator, route: Route) -> Callback<MouseEvent> {
    let navigator = navigator.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        navigator.go.emit(route);
    })
}

fn authenticated_nav(navigator: &Navigator, on_logout: Callback<MouseEvent>) -> Html {
    html! {
        <>
            <a href="/dashboard" onclick={nav_link(navigator, Route::Dashboard)}>{"Dashboard"}</a>
            <a href="/help" onclick={nav_link(navigator, Route::Help)}>{"Help"}</a>
            <button class="nav-logout" onclick={on_logout}>{"Logout"}</button>
        </>
    }
}

fn anonymous_nav(navigator: &Navigator) -> Html {
    html! {
        <>
            <a href="/help" onclick={nav_link(navigator, Route::Help)}>{"Help"}</a>
            <a href="/login" onclick={nav_link(navigator, Route::Login)}>{"Login"}</a>
        </>
    }
}
