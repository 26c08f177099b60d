use inbox_digest_core::domain::{ArchiveOutcome, ArchiveReport, Article};
use inbox_digest_infra::omnivore::OmnivoreClient;
use tokio::task::JoinSet;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArchiveMode {
    /// Report first; requests are drained only once the command is done.
    #[default]
    Detached,
    /// Await every request and aggregate the outcomes before returning.
    Wait,
}

impl ArchiveMode {
    pub fn from_wait_flag(wait: bool) -> Self {
        if wait {
            ArchiveMode::Wait
        } else {
            ArchiveMode::Detached
        }
    }
}

/// In-flight archive requests. Dropping this aborts whatever is still running,
/// so the owner must `finish` it before the runtime goes away.
#[derive(Debug)]
pub struct PendingArchive {
    tasks: JoinSet<Option<ArchiveOutcome>>,
}

impl PendingArchive {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub async fn finish(mut self) -> ArchiveReport {
        let mut report = ArchiveReport::default();
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(Some(outcome)) => report.record(&outcome),
                Ok(None) => report.record_failure(),
                Err(err) => {
                    warn!(error = %err, "archive task aborted");
                    report.record_failure();
                }
            }
        }
        info!(
            archived = report.archived,
            rejected = report.rejected,
            failed = report.failed,
            "archive batch complete"
        );
        report
    }
}

#[derive(Debug)]
pub enum ArchiveBatch {
    Pending(PendingArchive),
    Finished(ArchiveReport),
}

/// Spawns one archive request per article. Individual failures are logged
/// and never abort the batch.
pub fn dispatch(client: &OmnivoreClient, articles: &[Article]) -> PendingArchive {
    let mut tasks = JoinSet::new();
    for article in articles {
        let client = client.clone();
        let link_id = article.id.clone();
        tasks.spawn(async move { archive_one(&client, &link_id).await });
    }
    PendingArchive { tasks }
}

pub async fn archive_all(
    client: &OmnivoreClient,
    articles: &[Article],
    mode: ArchiveMode,
) -> ArchiveBatch {
    info!(count = articles.len(), ?mode, "archiving newsletter articles");
    let pending = dispatch(client, articles);
    match mode {
        ArchiveMode::Detached => {
            info!(dispatched = pending.len(), "archive requests dispatched");
            ArchiveBatch::Pending(pending)
        }
        ArchiveMode::Wait => ArchiveBatch::Finished(pending.finish().await),
    }
}

async fn archive_one(client: &OmnivoreClient, link_id: &str) -> Option<ArchiveOutcome> {
    match client.archive(link_id).await {
        Ok(outcome) => {
            match &outcome {
                ArchiveOutcome::Archived { link_id, message } => {
                    info!(%link_id, %message, "article archived");
                }
                ArchiveOutcome::Rejected {
                    message,
                    error_codes,
                } => {
                    warn!(%link_id, %message, ?error_codes, "archive rejected");
                }
            }
            Some(outcome)
        }
        Err(err) => {
            warn!(error = %err, %link_id, "archive request failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::{FakeTransport, article};

    fn finished(batch: ArchiveBatch) -> ArchiveReport {
        match batch {
            ArchiveBatch::Finished(report) => report,
            ArchiveBatch::Pending(_) => panic!("expected a finished batch"),
        }
    }

    #[tokio::test]
    async fn one_request_per_article_including_duplicates() {
        let fake = FakeTransport::new();
        let client = OmnivoreClient::new(fake.clone(), 100);
        let articles = vec![article("a", 10), article("b", 10), article("a", 10)];

        let report = finished(archive_all(&client, &articles, ArchiveMode::Wait).await);

        assert_eq!(report.archived, 3);
        assert_eq!(fake.calls(), 3);
        let mut ids = fake.archived_ids();
        ids.sort();
        assert_eq!(ids, vec!["a", "a", "b"]);
    }

    #[tokio::test]
    async fn failures_are_counted_not_fatal() {
        let fake = FakeTransport::default()
            .failing_archive("bad")
            .rejecting_archive("gone")
            .shared();
        let client = OmnivoreClient::new(fake.clone(), 100);
        let articles = vec![article("ok", 1), article("bad", 1), article("gone", 1)];

        let report = finished(archive_all(&client, &articles, ArchiveMode::Wait).await);

        assert_eq!(
            report,
            ArchiveReport {
                archived: 1,
                rejected: 1,
                failed: 1,
            }
        );
    }

    #[tokio::test]
    async fn detached_returns_before_completion() {
        let fake = FakeTransport::default()
            .archive_delay(Duration::from_millis(20))
            .shared();
        let client = OmnivoreClient::new(fake.clone(), 100);
        let articles = vec![article("x", 1), article("y", 1)];

        let ArchiveBatch::Pending(pending) =
            archive_all(&client, &articles, ArchiveMode::Detached).await
        else {
            panic!("expected a pending batch");
        };
        assert_eq!(pending.len(), 2);
        assert_eq!(fake.completed(), 0);

        let report = pending.finish().await;
        assert_eq!(report.archived, 2);
        assert_eq!(fake.completed(), 2);
    }

    #[tokio::test]
    async fn empty_batch() {
        let fake = FakeTransport::new();
        let client = OmnivoreClient::new(fake.clone(), 100);
        let report = finished(archive_all(&client, &[], ArchiveMode::Wait).await);
        assert_eq!(report.total(), 0);
        assert_eq!(fake.calls(), 0);
    }
}
