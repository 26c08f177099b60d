use inbox_digest_core::types::SearchFilter;
use serde_json::{Value, json};

/// Page size used when none is configured. There is no cursor handling, so
/// anything past the first page is dropped.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub const SEARCH_DOCUMENT: &str = r#"
    query Search($after: String, $first: Int, $query: String) {
      search(first: $first, after: $after, query: $query) {
        ... on SearchSuccess {
          edges {
            node {
              id
              title
              url
              author
              wordsCount
              highlights {
                annotation
              }
            }
          }
          pageInfo {
            totalCount
          }
        }
        ... on SearchError {
          errorCodes
        }
      }
    }
"#;

pub const COUNT_DOCUMENT: &str = r#"
    query Search($after: String, $first: Int, $query: String) {
      search(first: $first, after: $after, query: $query) {
        ... on SearchSuccess {
          pageInfo {
            totalCount
          }
        }
        ... on SearchError {
          errorCodes
        }
      }
    }
"#;

pub const ARCHIVE_DOCUMENT: &str = r#"
    mutation SetLinkArchived($input: ArchiveLinkInput!) {
      setLinkArchived(input: $input) {
        ... on ArchiveLinkSuccess {
          linkId
          message
        }
        ... on ArchiveLinkError {
          message
          errorCodes
        }
      }
    }
"#;

pub fn search_variables(filter: &SearchFilter, first: u32) -> Value {
    json!({
        "query": filter.as_str(),
        "first": first,
    })
}

pub fn count_variables(filter: &SearchFilter) -> Value {
    json!({ "query": filter.as_str() })
}

pub fn archive_variables(link_id: &str) -> Value {
    json!({
        "input": {
            "linkId": link_id,
            "archived": true,
        }
    })
}
