use incident_client::{ClientError, ConfigError, IncidentClient, Settings};
use leptos::*;
use leptos_router::{Route, Router, Routes};
use thiserror::Error;
use tracing::{error, info};

use crate::components::incident_detail::IncidentDetailPage;
use crate::components::incident_list::IncidentListPage;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to resolve settings: {0}")]
    Settings(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Resolves the base URL once and builds the single client the pages share.
pub fn build_client(settings: &Settings) -> Result<IncidentClient, StartupError> {
    let client = IncidentClient::new(&settings.api)?;
    info!(base_url = %client.base_url(), "incident client ready");
    Ok(client)
}

#[component]
pub fn App() -> impl IntoView {
    let client = Settings::from_build_env()
        .map_err(StartupError::from)
        .and_then(|settings| build_client(&settings));

    match client {
        Ok(client) => {
            provide_context(client);
            view! {
              <Router>
                <main>
                  <Routes>
                    <Route path="/" view=IncidentListPage/>
                    <Route path="/incidents/all-incidents" view=IncidentListPage/>
                    <Route path="/incidents/all-incidents/:id" view=IncidentDetailPage/>
                  </Routes>
                </main>
              </Router>
            }
            .into_view()
        }
        Err(err) => {
            error!(error = %err, "unable to start incident ui");
            view! { <pre class="error">{err.to_string()}</pre> }.into_view()
        }
    }
}
