use inbox_digest_core::domain::{ArchiveOutcome, Article, Highlight, SearchResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::omnivore::transport::OmnivoreError;

/// Maps a search envelope. A service error variant is a `QueryRejected`
/// failure; zero edges with a valid page is a successful empty result.
pub fn map_search(envelope: Value) -> Result<SearchResult, OmnivoreError> {
    let data: SearchData = unwrap_envelope(envelope)?;
    match data.search.ok_or(OmnivoreError::EmptyResult("search"))? {
        SearchPayload::Rejected { error_codes } => Err(OmnivoreError::QueryRejected(error_codes)),
        SearchPayload::Success { edges, page_info } => {
            let total_count = total_count(page_info)?;
            let articles = edges
                .into_iter()
                .map(|edge| edge.node.into_article())
                .collect();
            Ok(SearchResult {
                articles,
                total_count,
            })
        }
    }
}

pub fn map_count(envelope: Value) -> Result<u64, OmnivoreError> {
    let data: SearchData = unwrap_envelope(envelope)?;
    match data.search.ok_or(OmnivoreError::EmptyResult("search"))? {
        SearchPayload::Rejected { error_codes } => Err(OmnivoreError::QueryRejected(error_codes)),
        SearchPayload::Success { page_info, .. } => total_count(page_info),
    }
}

pub fn map_archive(envelope: Value) -> Result<ArchiveOutcome, OmnivoreError> {
    let data: ArchiveData = unwrap_envelope(envelope)?;
    let payload = data
        .set_link_archived
        .ok_or(OmnivoreError::EmptyResult("setLinkArchived"))?;
    Ok(match payload {
        ArchivePayload::Rejected {
            message,
            error_codes,
        } => ArchiveOutcome::Rejected {
            message,
            error_codes,
        },
        ArchivePayload::Archived { link_id, message } => {
            ArchiveOutcome::Archived { link_id, message }
        }
    })
}

fn unwrap_envelope<T: DeserializeOwned>(envelope: Value) -> Result<T, OmnivoreError> {
    let payload: GraphqlResponse<T> = serde_json::from_value(envelope)?;
    if let Some(errors) = payload.errors.filter(|errors| !errors.is_empty()) {
        let messages = errors.into_iter().map(|err| err.message).collect();
        return Err(OmnivoreError::QueryRejected(messages));
    }
    payload.data.ok_or(OmnivoreError::EmptyResult("data"))
}

fn total_count(page_info: Option<PageInfoNode>) -> Result<u64, OmnivoreError> {
    page_info
        .and_then(|info| info.total_count)
        .ok_or(OmnivoreError::EmptyResult("search.pageInfo.totalCount"))
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlErrorItem>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorItem {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: Option<SearchPayload>,
}

// Untagged: the error variant is tried first since every success field is optional.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchPayload {
    Rejected {
        #[serde(rename = "errorCodes")]
        error_codes: Vec<String>,
    },
    Success {
        #[serde(default)]
        edges: Vec<EdgeNode>,
        #[serde(rename = "pageInfo")]
        page_info: Option<PageInfoNode>,
    },
}

#[derive(Debug, Deserialize)]
struct EdgeNode {
    node: ArticleNode,
}

#[derive(Debug, Deserialize)]
struct ArticleNode {
    id: String,
    title: String,
    url: String,
    author: Option<String>,
    #[serde(rename = "wordsCount")]
    words_count: u64,
    highlights: Option<Vec<HighlightNode>>,
}

#[derive(Debug, Deserialize)]
struct HighlightNode {
    annotation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageInfoNode {
    #[serde(rename = "totalCount")]
    total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ArchiveData {
    #[serde(rename = "setLinkArchived")]
    set_link_archived: Option<ArchivePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArchivePayload {
    Rejected {
        message: String,
        #[serde(rename = "errorCodes")]
        error_codes: Vec<String>,
    },
    Archived {
        #[serde(rename = "linkId")]
        link_id: String,
        message: String,
    },
}

impl ArticleNode {
    fn into_article(self) -> Article {
        Article {
            id: self.id,
            title: self.title,
            url: self.url,
            author: self.author,
            words_count: self.words_count,
            // Highlights without a note carry nothing to render.
            highlights: self
                .highlights
                .unwrap_or_default()
                .into_iter()
                .filter_map(|node| node.annotation)
                .filter(|annotation| !annotation.trim().is_empty())
                .map(|annotation| Highlight { annotation })
                .collect(),
        }
    }
}
