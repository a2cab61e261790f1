//! HTTP implementation of [`TicketApi`] on top of reqwest.
//!
//! The client is cheap to clone (reqwest pools connections behind an `Arc`),
//! so async handlers take their own copy. No retries and no caching: every
//! transport or status failure is returned to the caller as-is.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{HelpdeskError, Result};
use crate::types::{
    Classification, ClassifyRequest, NewTicket, StatusUpdate, Ticket, TicketId, TicketStats,
    TicketStatus,
};

use super::{TicketApi, TicketQuery, error_from_response};

/// Origin used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("helpdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `<base>/<segments...>/` with each segment percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                HelpdeskError::Config(format!("API URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    /// URL for the ticket list, carrying only the constrained filter fields
    pub fn tickets_url(&self, query: &TicketQuery) -> Result<Url> {
        let mut url = self.endpoint(&["api", "tickets"])?;
        let pairs = query.to_pairs();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in &pairs {
                serializer.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "ticket service request");
        self.http.request(method, url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url =
        Url::parse(trimmed).map_err(|e| HelpdeskError::InvalidUrl(trimmed.to_string(), e))?;
    if url.cannot_be_a_base() {
        return Err(HelpdeskError::Config(format!(
            "API URL '{trimmed}' must be an http(s) origin"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Decode a success body, or turn a failure status into an error
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let text = String::from_utf8_lossy(&body);
        let err = error_from_response(status, &text);
        tracing::debug!(%status, error = %err, "ticket service rejected request");
        return Err(err);
    }

    Ok(serde_json::from_slice(&body)?)
}

impl TicketApi for ApiClient {
    async fn list_tickets(&self, query: &TicketQuery) -> Result<Vec<Ticket>> {
        let url = self.tickets_url(query)?;
        let response = self.request(Method::GET, url).send().await?;
        decode(response).await
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket> {
        let url = self.endpoint(&["api", "tickets"])?;
        let response = self.request(Method::POST, url).json(ticket).send().await?;
        decode(response).await
    }

    async fn update_status(&self, id: &TicketId, status: TicketStatus) -> Result<Ticket> {
        let url = self.endpoint(&["api", "tickets", id.as_str()])?;
        let response = self
            .request(Method::PATCH, url)
            .json(&StatusUpdate { status })
            .send()
            .await?;
        decode(response).await
    }

    async fn classify(&self, description: &str) -> Result<Classification> {
        let url = self.endpoint(&["api", "tickets", "classify"])?;
        let response = self
            .request(Method::POST, url)
            .json(&ClassifyRequest { description })
            .send()
            .await?;
        decode(response).await
    }

    async fn stats(&self) -> Result<TicketStats> {
        let url = self.endpoint(&["api", "tickets", "stats"])?;
        let response = self.request(Method::GET, url).send().await?;
        decode(response).await
    }
}
