use yew::prelude::*;

/// The app's pages. Views are switched by state at the root; the browser URL
/// never changes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Help,
    Dashboard,
}

/// Navigation handle provided from the app root.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub go: Callback<Route>,
}

#[hook]
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator context missing from the component tree")
}
