//! HTTP client for the incident backend.
//!
//! `GET {base}/incidents/all` and `GET {base}/incidents/{id}`, decoded into
//! the types in [`dto`]. Bodies are handed back as the backend sent them.

pub mod client;
pub mod dto;
pub mod error;
pub mod settings;

pub use client::IncidentClient;
pub use dto::{Incident, IncidentListResponse, IncidentResponse};
pub use error::ClientError;
pub use settings::{ApiSettings, ConfigError, Settings, DEFAULT_BASE_URL};
