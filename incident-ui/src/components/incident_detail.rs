use incident_client::{Incident, IncidentClient};
use leptos::*;
use leptos_router::use_params_map;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::detail::{DetailState, DetailView};
use crate::display::{
    format_timestamp, image_slot, severity_category, status_category, ImageSlot,
};

pub(crate) fn go_back() {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        warn!("history not available");
        return;
    };
    if let Err(err) = history.back() {
        warn!(?err, "history.back failed");
    }
}

#[component]
pub fn IncidentDetailPage() -> impl IntoView {
    let client = store_value(expect_context::<IncidentClient>());
    let params = use_params_map();
    let state = create_rw_signal(DetailState::new());

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        let Some(ticket) = state.try_update(|s| s.begin(&id)).flatten() else {
            return;
        };
        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.fetch_by_id(&id).await;
            state.update(|s| {
                s.resolve(ticket, outcome);
            });
        });
    });

    view! {
      <div class="incident-page">
        {move || state.with(|s| match s.view() {
            DetailView::Loading => view! {
              <div class="loading">
                <p>"Loading incident details..."</p>
              </div>
            }
            .into_view(),
            DetailView::Error { message } => {
                let message = message.to_string();
                view! {
                  <div class="error-panel">
                    <h2>"Error Loading Incident"</h2>
                    <p>{message}</p>
                    <button on:click=move |_| go_back()>"← Go Back"</button>
                  </div>
                }
                .into_view()
            }
            DetailView::NotFound { id } => view! {
              <p class="meta">{format!("No incident found for ID: {id}")}</p>
            }
            .into_view(),
            DetailView::Loaded(incident) => view! {
              <IncidentDetails incident=incident.clone()/>
            }
            .into_view(),
        })}
      </div>
    }
}

#[component]
fn IncidentDetails(incident: Incident) -> impl IntoView {
    let status_class = status_category(&incident.status).css_class();
    let severity_class = severity_category(&incident.severity).css_class();
    let image = match image_slot(&incident) {
        ImageSlot::Attached(url) => view! {
          <img src=url.to_string() alt="Incident evidence"/>
        }
        .into_view(),
        ImageSlot::Placeholder => view! {
          <div class="image-placeholder">
            <span>"No image available"</span>
          </div>
        }
        .into_view(),
    };

    view! {
      <div class="detail">
        <header class="row">
          <div>
            <button class="link" on:click=move |_| go_back()>"← Back to Incidents"</button>
            <h1>{incident.title.clone()}</h1>
            <p class="meta">{format!("ID: {}", incident.id)}</p>
          </div>
          <div class="row">
            <span class=status_class>{format!("Status: {}", incident.status)}</span>
            <span class=severity_class>{format!("Severity: {}", incident.severity)}</span>
          </div>
        </header>

        <div class="layout">
          <section class="panel">
            <h2>"Description"</h2>
            <p class="description">{incident.description.clone()}</p>
          </section>

          <section class="panel">
            <h2>"Details"</h2>
            <dl>
              <dt>"Location"</dt>
              <dd>{incident.location.clone()}</dd>
              <dt>"Reported On"</dt>
              <dd>{format_timestamp(&incident.created_at)}</dd>
              <dt>"Last Updated"</dt>
              <dd>{format_timestamp(&incident.updated_at)}</dd>
            </dl>
          </section>

          <section class="panel">
            <h3>"Attached Image"</h3>
            {image}
          </section>
        </div>
      </div>
    }
}
