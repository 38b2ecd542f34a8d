use yew_router::prelude::*;

/// Employee looked up when a route or the login form gives us nothing.
pub const DEFAULT_EMPLOYEE_ID: &str = "1";

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/profile")]
    Profile,
    #[at("/profile/:id")]
    ProfileFor { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Resolves the login form's free-text input into the profile id to
/// navigate to. Any non-empty string passes through untouched; empty
/// falls back to the default employee. No validation on purpose.
pub fn login_target(input: &str) -> String {
    if input.is_empty() {
        DEFAULT_EMPLOYEE_ID.to_string()
    } else {
        input.to_string()
    }
}
