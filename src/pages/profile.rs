use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_employee, FetchError};
use crate::components::radar::RadarChart;
use crate::config::ApiBase;
use crate::types::Employee;

/// Per-navigation lifecycle of the profile view. Exactly one of these at
/// any time; discarded and rebuilt whenever the id in the route changes.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Loaded(Employee),
}

impl FetchState {
    fn settle(result: Result<Employee, FetchError>) -> Self {
        match result {
            Ok(employee) => Self::Loaded(employee),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// A response only lands if it still carries the latest issued tag. A
/// fetch that was superseded by a newer navigation lost the race and its
/// result is dropped, so id 1's reply can never overwrite id 2's view.
fn response_lands(issued: u64, latest: u64) -> bool {
    issued == latest
}

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub id: String,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfileProps) -> Html {
    let base = use_context::<ApiBase>().unwrap_or_default();
    let state = use_state(|| FetchState::Loading);
    // Monotonic tag for the newest fetch this view instance has issued.
    let seq = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        let seq = seq.clone();
        use_effect_with(props.id.clone(), move |id| {
            let issued = {
                let mut s = seq.borrow_mut();
                *s += 1;
                *s
            };
            state.set(FetchState::Loading);

            let id = id.clone();
            spawn_local(async move {
                let result = fetch_employee(&base, &id).await;
                if !response_lands(issued, *seq.borrow()) {
                    log::debug!("dropping stale response for employee {id}");
                    return;
                }
                state.set(FetchState::settle(result));
            });
            || ()
        });
    }

    match &*state {
        FetchState::Loading => html! {
            <div class="centered">
                <div class="spinner"></div>
                <p class="muted">{ "Loading profile…" }</p>
            </div>
        },
        FetchState::Error(msg) => html! {
            <p class="err">{ format!("Error: {msg}") }</p>
        },
        FetchState::Loaded(employee) => view_employee(employee),
    }
}

fn view_employee(employee: &Employee) -> Html {
    let avatar = employee.avatar_url.as_ref().map(|url| {
        html! {
            <img class="avatar" src={url.clone()} alt={employee.full_name.clone()} />
        }
    });

    html! {
        <div class="card">
            <div class="header">
                { avatar }
                <div>
                    <h2>{ employee.full_name.clone() }</h2>
                    <p class="position">{ employee.position.clone() }</p>
                </div>
            </div>

            <hr class="divider" />

            <h3 class="section-title">{ "Skill Radar" }</h3>
            <RadarChart skills={employee.skills.clone()} />

            <h3 class="section-title">{ "My Skills" }</h3>
            <ul class="skills">
                { for employee.skills.iter().map(|s| html! {
                    <li key={s.id.to_string()}>
                        { s.name.clone() }
                        <span class="level">{ format!("Level: {}", s.level) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
