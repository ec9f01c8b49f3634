use incident_client::{Incident, IncidentClient};
use leptos::*;
use leptos_router::A;
use wasm_bindgen_futures::spawn_local;

use crate::display::{severity_category, status_category};
use crate::list::{ListState, ListView};

pub fn detail_href(id: &str) -> String {
    format!("/incidents/all-incidents/{id}")
}

#[component]
pub fn IncidentListPage() -> impl IntoView {
    let client = store_value(expect_context::<IncidentClient>());
    let state = create_rw_signal(ListState::new());

    let load_incidents = move || {
        let Some(ticket) = state.try_update(ListState::begin) else {
            return;
        };
        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.fetch_all().await;
            state.update(|s| {
                s.resolve(ticket, outcome);
            });
        });
    };

    load_incidents();

    view! {
      <section class="panel">
        <div class="row">
          <h2>"Incidents"</h2>
          <button on:click=move |_| load_incidents()>"Refresh"</button>
        </div>
        {move || state.with(|s| match s.view() {
            ListView::Loading => view! { <p class="meta">"Loading incidents..."</p> }.into_view(),
            ListView::Error { message } => {
                let message = message.to_string();
                view! { <pre class="error">{message}</pre> }.into_view()
            }
            ListView::Empty => view! { <p class="meta">"No incidents reported."</p> }.into_view(),
            ListView::Loaded(incidents) => view! {
              <ul>
                {incidents
                    .iter()
                    .map(|i| view! { <IncidentRow incident=i.clone()/> })
                    .collect_view()}
              </ul>
            }
            .into_view(),
        })}
      </section>
    }
}

#[component]
fn IncidentRow(incident: Incident) -> impl IntoView {
    view! {
      <li>
        <A href=detail_href(&incident.id)>
          <div><b>{incident.title.clone()}</b></div>
        </A>
        <div>
          <span class=status_category(&incident.status).css_class()>{incident.status.clone()}</span>
          " "
          <span class=severity_category(&incident.severity).css_class()>{incident.severity.clone()}</span>
        </div>
        <div class="meta">{incident.location.clone()}</div>
      </li>
    }
}
