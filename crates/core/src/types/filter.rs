use std::fmt;

use crate::error::CoreError;

/// Inbox items carrying the newsletter label.
pub const NEWSLETTER_FILTER: &str = "in:inbox label:newsletter";
/// Default filter for the totals report: unlabeled inbox items.
pub const UNLABELED_INBOX_FILTER: &str = "in:inbox no:label";

/// Search expression in the service's own filter syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter(String);

impl SearchFilter {
    pub fn newsletters() -> Self {
        SearchFilter(NEWSLETTER_FILTER.to_string())
    }

    pub fn unlabeled_inbox() -> Self {
        SearchFilter(UNLABELED_INBOX_FILTER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for SearchFilter {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidFilter("empty filter".to_string()));
        }
        Ok(SearchFilter(trimmed.to_string()))
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
