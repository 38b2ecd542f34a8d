mod api;
mod components;
mod config;
mod pages;
mod route;
mod types;

use yew::prelude::*;
use yew_router::prelude::*;

use config::ApiBase;
use pages::login::LoginPage;
use pages::not_found::NotFoundPage;
use pages::profile::ProfilePage;
use route::{Route, DEFAULT_EMPLOYEE_ID};

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Login => html! { <LoginPage /> },
        // /profile with no segment looks up the default employee
        Route::Profile => html! { <ProfilePage id={DEFAULT_EMPLOYEE_ID.to_string()} /> },
        Route::ProfileFor { id } => html! { <ProfilePage {id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    // Resolved once at startup; pages take it from context instead of
    // reading ambient globals.
    let api_base = ApiBase::from_env();

    html! {
        <BrowserRouter>
            <ContextProvider<ApiBase> context={api_base}>
                <main class="shell">
                    <Switch<Route> render={switch} />
                </main>
            </ContextProvider<ApiBase>>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
