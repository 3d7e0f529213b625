use yew::prelude::*;

use super::{DashboardPage, HelpPage, LandingPage, LoginPage, RequireAuth, SignupPage};
use crate::hooks::{Navigator, Route, SessionProvider};
use crate::state::SheetStateStore;

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(|| Route::Landing);

    let navigator = {
        let route = route.clone();
        Navigator {
            go: Callback::from(move |next: Route| route.set(next)),
        }
    };

    // One store instance for the whole tree; components receive it instead
    // of touching localStorage themselves
    let store = use_state(SheetStateStore::browser);

    let page = match *route {
        Route::Landing => html! { <LandingPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Help => html! { <HelpPage /> },
        Route::Dashboard => html! {
            <RequireAuth>
                <DashboardPage />
            </RequireAuth>
        },
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            <SessionProvider>
                <ContextProvider<SheetStateStore> context={(*store).clone()}>
                    { page }
                </ContextProvider<SheetStateStore>>
            </SessionProvider>
        </ContextProvider<Navigator>>
    }
}
