use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::{login_target, Route};

/// Unauthenticated lookup-by-id, presented as a login form. Any input is
/// accepted; the password field is shown but never read. No server
/// round-trip happens here.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let navigator = use_navigator().expect("no navigator (not under BrowserRouter?)");
    let username = use_state(String::new);

    let oninput = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let onsubmit = {
        let username = username.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id = login_target(&username);
            navigator.push(&Route::ProfileFor { id });
        })
    };

    html! {
        <div class="card">
            <h1>{ "Employee Profile Login" }</h1>
            <form {onsubmit}>
                <label class="field">
                    <span>{ "Employee ID" }</span>
                    <input type="text" value={(*username).clone()} {oninput} />
                </label>
                <label class="field">
                    <span>{ "Password --not used--" }</span>
                    <input type="password" />
                </label>
                <button type="submit" class="btn">{ "Login" }</button>
            </form>
        </div>
    }
}
