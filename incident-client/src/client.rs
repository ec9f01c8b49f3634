use crate::dto::{IncidentListResponse, IncidentResponse};
use crate::error::ClientError;
use crate::settings::ApiSettings;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Single-shot reads against the incident backend. No retries, no caching.
#[derive(Clone, Debug)]
pub struct IncidentClient {
    http: reqwest::Client,
    base_url: Url,
}

impl IncidentClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ClientError> {
        let base_url = Url::parse(&settings.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ClientError::InvalidBaseUrl(settings.base_url.clone()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn fetch_all(&self) -> Result<IncidentListResponse, ClientError> {
        let url = self.endpoint(&["incidents", "all"])?;
        let body: IncidentListResponse = self
            .get(url)
            .await
            .inspect_err(|err| error!(error = %err, "error fetching incidents"))?;
        debug!(success = body.success, count = body.data.len(), "fetched incidents");
        Ok(body)
    }

    pub async fn fetch_by_id(&self, id: &str) -> Result<IncidentResponse, ClientError> {
        let id = id.trim();
        if id.is_empty() {
            error!("refusing to fetch incident without an id");
            return Err(ClientError::MissingId);
        }

        let url = self.endpoint(&["incidents", id])?;
        let body: IncidentResponse = self
            .get(url)
            .await
            .inspect_err(|err| error!(id, error = %err, "error fetching incident"))?;
        debug!(id, success = body.success, found = body.data.is_some(), "fetched incident");
        Ok(body)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        response.json::<T>().await.map_err(ClientError::Decode)
    }
}
