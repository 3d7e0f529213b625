use yew::prelude::*;

use crate::hooks::{use_navigator, use_session, Route, SessionStatus};

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Gate in front of signed-in pages. While the session check runs nothing
/// guarded renders; an anonymous result leads to the login page, never to
/// the children.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();

    {
        let navigator = navigator.clone();
        use_effect_with(session.status, move |status| {
            if *status == SessionStatus::Anonymous {
                navigator.go.emit(Route::Login);
            }
            || ()
        });
    }

    match session.status {
        SessionStatus::Checking => html! {
            <div class="page-loading">
                <div class="spinner"></div>
            </div>
        },
        SessionStatus::Authenticated => html! { <>{ props.children.clone() }</> },
        // the redirect effect is about to fire
        SessionStatus::Anonymous => Html::default(),
    }
}
