use async_trait::async_trait;
use inbox_digest_core::types::Credential;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api-prod.omnivore.app/api/graphql";
const USER_AGENT: &str = "inbox-digest";

#[derive(Debug, Error)]
pub enum OmnivoreError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("query rejected: {}", .0.join(", "))]
    QueryRejected(Vec<String>),
    #[error("empty result: missing {0}")]
    EmptyResult(&'static str),
    #[error("unexpected response shape: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Sends one GraphQL document and hands back the decoded JSON envelope
/// without inspecting its shape.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn send(&self, document: &str, variables: Value) -> Result<Value, OmnivoreError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    credential: Credential,
}

impl HttpTransport {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, credential: Credential) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            credential,
        }
    }
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn send(&self, document: &str, variables: Value) -> Result<Value, OmnivoreError> {
        debug!(endpoint = %self.endpoint, "posting graphql document");
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.credential.expose())
            .header("User-Agent", USER_AGENT)
            .json(&GraphqlRequest {
                query: document,
                variables,
            })
            .send()
            .await?;
        let status = response.status();
        let envelope: Value = response.json().await?;
        debug!(%status, "graphql response decoded");
        Ok(envelope)
    }
}
