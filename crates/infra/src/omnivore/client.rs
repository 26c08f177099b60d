use std::sync::Arc;

use inbox_digest_core::domain::{ArchiveOutcome, SearchResult};
use inbox_digest_core::types::SearchFilter;
use tracing::{debug, warn};

use crate::omnivore::documents::{
    ARCHIVE_DOCUMENT, COUNT_DOCUMENT, SEARCH_DOCUMENT, archive_variables, count_variables,
    search_variables,
};
use crate::omnivore::mapper::{map_archive, map_count, map_search};
use crate::omnivore::transport::{GraphqlTransport, OmnivoreError};

/// Typed operations over a shared transport. Cloning shares the transport.
#[derive(Clone)]
pub struct OmnivoreClient {
    transport: Arc<dyn GraphqlTransport>,
    page_size: u32,
}

impl OmnivoreClient {
    pub fn new(transport: Arc<dyn GraphqlTransport>, page_size: u32) -> Self {
        Self {
            transport,
            page_size,
        }
    }

    /// Fetches the first page of matches for `filter`.
    pub async fn search(&self, filter: &SearchFilter) -> Result<SearchResult, OmnivoreError> {
        let envelope = self
            .transport
            .send(SEARCH_DOCUMENT, search_variables(filter, self.page_size))
            .await?;
        let result = map_search(envelope)?;
        let fetched = result.articles.len() as u64;
        if result.total_count > fetched {
            warn!(
                filter = %filter,
                fetched,
                total = result.total_count,
                "search result exceeds page size; remaining items not fetched"
            );
        }
        debug!(filter = %filter, fetched, "search complete");
        Ok(result)
    }

    pub async fn count(&self, filter: &SearchFilter) -> Result<u64, OmnivoreError> {
        let envelope = self
            .transport
            .send(COUNT_DOCUMENT, count_variables(filter))
            .await?;
        map_count(envelope)
    }

    pub async fn archive(&self, link_id: &str) -> Result<ArchiveOutcome, OmnivoreError> {
        let envelope = self
            .transport
            .send(ARCHIVE_DOCUMENT, archive_variables(link_id))
            .await?;
        map_archive(envelope)
    }
}
