use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let navigator = use_navigator().expect("no navigator (not under BrowserRouter?)");
    let onclick = Callback::from(move |_: MouseEvent| navigator.push(&Route::Login));

    html! {
        <div class="card centered">
            <h1>{ "404" }</h1>
            <p class="muted">{ "Page not found" }</p>
            <button class="btn" {onclick}>{ "Go to Login" }</button>
        </div>
    }
}
