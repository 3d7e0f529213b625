use yew::prelude::*;

use super::{Header, Uploader};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    html! {
        <div class="page">
            <Header />
            <Uploader />
        </div>
    }
}
