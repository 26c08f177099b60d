use std::sync::Arc;

use inbox_digest_infra::omnivore::{GraphqlTransport, HttpTransport, OmnivoreClient};
use reqwest::Client;
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub fn build_transport(config: &AppConfig) -> Result<Arc<dyn GraphqlTransport>, WiringError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    let http = builder.build()?;
    Ok(Arc::new(HttpTransport::new(
        http,
        config.endpoint.clone(),
        config.credential.clone(),
    )))
}

pub fn build_client(config: &AppConfig, transport: Arc<dyn GraphqlTransport>) -> OmnivoreClient {
    OmnivoreClient::new(transport, config.page_size)
}
