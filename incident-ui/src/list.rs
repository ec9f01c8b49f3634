use std::fmt::Display;

use incident_client::{Incident, IncidentListResponse};
use tracing::debug;

use crate::fetch::{failure_message, FetchTicket, Generations};

pub const LIST_FAILED_MESSAGE: &str = "Failed to load incidents.";

/// State behind the incident list page.
#[derive(Clone, Debug)]
pub struct ListState {
    loading: bool,
    error: Option<String>,
    incidents: Vec<Incident>,
    generations: Generations,
}

#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Error { message: &'a str },
    Empty,
    Loaded(&'a [Incident]),
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListState {
    pub fn new() -> Self {
        Self {
            loading: true,
            error: None,
            incidents: Vec::new(),
            generations: Generations::default(),
        }
    }

    pub fn begin(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        self.generations.issue()
    }

    pub fn resolve<E: Display>(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<IncidentListResponse, E>,
    ) -> bool {
        if !self.generations.is_current(&ticket) {
            debug!(generation = ticket.generation(), "discarding stale incident list");
            return false;
        }

        match outcome {
            Ok(IncidentListResponse {
                success: true,
                data,
            }) => self.incidents = data,
            Ok(_) => {
                self.incidents.clear();
                self.error = Some(LIST_FAILED_MESSAGE.to_string());
            }
            Err(err) => {
                let message = failure_message(&err);
                debug!(error = %message, "incident list failed to load");
                self.incidents.clear();
                self.error = Some(message);
            }
        }
        self.loading = false;
        true
    }

    pub fn view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if let Some(message) = &self.error {
            ListView::Error { message }
        } else if self.incidents.is_empty() {
            ListView::Empty
        } else {
            ListView::Loaded(&self.incidents)
        }
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FALLBACK_ERROR_MESSAGE;

    fn incident(id: &str) -> Incident {
        Incident {
            id: id.into(),
            title: format!("incident {id}"),
            ..Incident::default()
        }
    }

    #[test]
    fn loads_incidents() {
        let mut state = ListState::new();
        let ticket = state.begin();
        let response = IncidentListResponse {
            success: true,
            data: vec![incident("1"), incident("2")],
        };
        assert!(state.resolve(ticket, Ok::<_, String>(response)));
        match state.view() {
            ListView::Loaded(list) => assert_eq!(list.len(), 2),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn empty_success_is_empty_view() {
        let mut state = ListState::new();
        let ticket = state.begin();
        let response = IncidentListResponse {
            success: true,
            data: Vec::new(),
        };
        state.resolve(ticket, Ok::<_, String>(response));
        assert_eq!(state.view(), ListView::Empty);
    }

    #[test]
    fn unsuccessful_response_is_error() {
        let mut state = ListState::new();
        let ticket = state.begin();
        state.resolve(ticket, Ok::<_, String>(IncidentListResponse::default()));
        assert_eq!(
            state.view(),
            ListView::Error {
                message: LIST_FAILED_MESSAGE
            }
        );
    }

    #[test]
    fn rejection_uses_message_or_fallback() {
        let mut state = ListState::new();
        let ticket = state.begin();
        state.resolve(ticket, Err::<IncidentListResponse, _>("Network Error"));
        assert_eq!(
            state.view(),
            ListView::Error {
                message: "Network Error"
            }
        );

        let ticket = state.begin();
        state.resolve(ticket, Err::<IncidentListResponse, _>(""));
        assert_eq!(
            state.view(),
            ListView::Error {
                message: FALLBACK_ERROR_MESSAGE
            }
        );
    }

    #[test]
    fn refresh_keeps_stale_list_out() {
        let mut state = ListState::new();
        let first = state.begin();
        let second = state.begin();
        let fresh = IncidentListResponse {
            success: true,
            data: vec![incident("new")],
        };
        let stale = IncidentListResponse {
            success: true,
            data: vec![incident("old")],
        };
        assert!(state.resolve(second, Ok::<_, String>(fresh)));
        assert!(!state.resolve(first, Ok::<_, String>(stale)));
        assert_eq!(state.incidents()[0].id, "new");
    }
}
