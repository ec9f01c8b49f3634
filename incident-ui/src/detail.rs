//! State behind the incident detail page.
//!
//! The page owns one [`DetailState`]. Every identifier change calls
//! [`DetailState::begin`], and the completion of the matching request is
//! fed back through [`DetailState::resolve`]. Completions of superseded
//! requests are dropped.

use std::fmt::Display;

use incident_client::{Incident, IncidentResponse};
use tracing::debug;

use crate::fetch::{failure_message, FetchTicket, Generations};

pub const NOT_FOUND_MESSAGE: &str = "Incident not found.";

#[derive(Clone, Debug)]
pub struct DetailState {
    id: String,
    loading: bool,
    error: Option<String>,
    incident: Option<Incident>,
    generations: Generations,
}

/// What the page renders. Exactly one of these at a time.
#[derive(Debug, PartialEq)]
pub enum DetailView<'a> {
    Loading,
    Error { message: &'a str },
    NotFound { id: &'a str },
    Loaded(&'a Incident),
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            id: String::new(),
            loading: true,
            error: None,
            incident: None,
            generations: Generations::default(),
        }
    }

    /// Starts a fetch for `id`. An empty id issues nothing and leaves the
    /// page in `Loading`.
    pub fn begin(&mut self, id: &str) -> Option<FetchTicket> {
        let id = id.trim();
        if id.is_empty() {
            debug!("no incident id, nothing to fetch");
            return None;
        }

        self.id = id.to_string();
        self.loading = true;
        self.error = None;
        self.incident = None;
        Some(self.generations.issue())
    }

    /// Applies the outcome of the fetch behind `ticket`. Returns `false`
    /// when a newer fetch has started since, in which case nothing changes.
    pub fn resolve<E: Display>(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<IncidentResponse, E>,
    ) -> bool {
        if !self.generations.is_current(&ticket) {
            debug!(
                generation = ticket.generation(),
                latest = self.generations.latest(),
                "discarding stale incident response"
            );
            return false;
        }

        match outcome {
            Ok(IncidentResponse {
                success: true,
                data: Some(incident),
            }) => self.incident = Some(incident),
            Ok(_) => self.error = Some(NOT_FOUND_MESSAGE.to_string()),
            Err(err) => {
                let message = failure_message(&err);
                debug!(id = %self.id, error = %message, "incident details failed to load");
                self.error = Some(message);
            }
        }
        self.loading = false;
        true
    }

    pub fn view(&self) -> DetailView<'_> {
        if self.loading {
            return DetailView::Loading;
        }
        if let Some(message) = &self.error {
            return DetailView::Error { message };
        }
        match &self.incident {
            Some(incident) => DetailView::Loaded(incident),
            None => DetailView::NotFound { id: &self.id },
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn incident(&self) -> Option<&Incident> {
        self.incident.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generations.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FALLBACK_ERROR_MESSAGE;

    fn fire() -> Incident {
        Incident {
            id: "abc123".into(),
            title: "Fire".into(),
            severity: "high".into(),
            status: "open".into(),
            ..Incident::default()
        }
    }

    fn found(incident: Incident) -> Result<IncidentResponse, String> {
        Ok(IncidentResponse {
            success: true,
            data: Some(incident),
        })
    }

    #[test]
    fn starts_loading() {
        let state = DetailState::new();
        assert!(state.is_loading());
        assert_eq!(state.view(), DetailView::Loading);
    }

    #[test]
    fn success_with_data_loads_incident() {
        let mut state = DetailState::new();
        let ticket = state.begin("abc123").expect("ticket");
        assert_eq!(state.view(), DetailView::Loading);

        assert!(state.resolve(ticket, found(fire())));
        assert!(!state.is_loading());
        assert_eq!(state.view(), DetailView::Loaded(&fire()));
    }

    #[test]
    fn unsuccessful_or_empty_response_is_not_found_error() {
        let cases = [
            IncidentResponse {
                success: false,
                data: None,
            },
            IncidentResponse {
                success: true,
                data: None,
            },
            IncidentResponse {
                success: false,
                data: Some(fire()),
            },
        ];
        for response in cases {
            let mut state = DetailState::new();
            let ticket = state.begin("abc123").expect("ticket");
            assert!(state.resolve(ticket, Ok::<_, String>(response)));
            assert_eq!(
                state.view(),
                DetailView::Error {
                    message: NOT_FOUND_MESSAGE
                }
            );
        }
    }

    #[test]
    fn rejection_surfaces_its_message() {
        let mut state = DetailState::new();
        let ticket = state.begin("abc123").expect("ticket");
        state.resolve(ticket, Err::<IncidentResponse, _>("Network Error"));
        assert_eq!(state.error(), Some("Network Error"));
        assert!(!state.is_loading());
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let mut state = DetailState::new();
        let ticket = state.begin("abc123").expect("ticket");
        state.resolve(ticket, Err::<IncidentResponse, _>(""));
        assert_eq!(
            state.view(),
            DetailView::Error {
                message: FALLBACK_ERROR_MESSAGE
            }
        );
    }

    #[test]
    fn begin_clears_previous_result_and_error() {
        let mut state = DetailState::new();
        let ticket = state.begin("abc123").expect("ticket");
        state.resolve(ticket, Err::<IncidentResponse, _>("Network Error"));

        let ticket = state.begin("def456").expect("ticket");
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.incident(), None);
        assert_eq!(state.id(), "def456");

        state.resolve(ticket, found(fire()));
        let _pending = state.begin("ghi789").expect("ticket");
        assert_eq!(state.incident(), None);
    }

    #[test]
    fn empty_id_stalls_in_loading() {
        let mut state = DetailState::new();
        assert!(state.begin("").is_none());
        assert!(state.begin("   ").is_none());
        assert_eq!(state.view(), DetailView::Loading);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = DetailState::new();
        let first = state.begin("old").expect("ticket");
        let second = state.begin("new").expect("ticket");

        let newer = Incident {
            id: "new".into(),
            ..fire()
        };
        assert!(state.resolve(second, found(newer.clone())));
        assert!(!state.resolve(first, Err::<IncidentResponse, _>("Network Error")));

        assert_eq!(state.view(), DetailView::Loaded(&newer));
    }

    #[test]
    fn stale_completion_does_not_end_loading_early() {
        let mut state = DetailState::new();
        let first = state.begin("old").expect("ticket");
        let _second = state.begin("new").expect("ticket");

        assert!(!state.resolve(first, found(fire())));
        assert!(state.is_loading());
        assert_eq!(state.incident(), None);
    }

    #[test]
    fn not_found_view_when_settled_without_record_or_error() {
        let mut state = DetailState::new();
        state.id = "abc123".into();
        state.loading = false;
        assert_eq!(state.view(), DetailView::NotFound { id: "abc123" });
    }
}
