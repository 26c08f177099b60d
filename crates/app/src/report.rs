use inbox_digest_core::domain::{Article, DigestSummary, summarize};
use inbox_digest_core::types::SearchFilter;
use inbox_digest_infra::omnivore::{OmnivoreClient, OmnivoreError};
use tracing::info;

pub async fn fetch_newsletters(client: &OmnivoreClient) -> Result<Vec<Article>, OmnivoreError> {
    let filter = SearchFilter::newsletters();
    let result = client.search(&filter).await?;
    info!(
        fetched = result.articles.len(),
        total = result.total_count,
        "newsletters fetched"
    );
    Ok(result.articles)
}

/// Builds the `--total` line. Word and time figures cover the fetched page.
pub async fn totals(
    client: &OmnivoreClient,
    filter: &SearchFilter,
    count_only: bool,
) -> Result<String, OmnivoreError> {
    info!(filter = %filter, count_only, "counting articles");
    if count_only {
        let total = client.count(filter).await?;
        return Ok(totals_line(total, None));
    }
    let result = client.search(filter).await?;
    let summary = summarize(&result.articles);
    Ok(totals_line(result.total_count, Some(&summary)))
}

pub fn totals_line(total: u64, summary: Option<&DigestSummary>) -> String {
    match summary {
        Some(summary) => format!(
            "{total} articles found ({} words, {} of reading)",
            summary.words, summary.reading_time
        ),
        None => format!("{total} articles found"),
    }
}
