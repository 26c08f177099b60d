use clap::Parser;
use inbox_digest_core::CoreError;
use inbox_digest_core::render::HighlightDetail;
use inbox_digest_core::types::SearchFilter;

use crate::archive::ArchiveMode;

/// Render newsletter-labeled inbox articles as a Markdown digest.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Report the number of matching articles and their reading time.
    #[arg(long, default_value_t = false)]
    pub total: bool,
    /// Search filter for --total.
    #[arg(long, requires = "total")]
    pub query: Option<String>,
    /// With --total, only ask for the count.
    #[arg(long, default_value_t = false, requires = "total")]
    pub count_only: bool,
    /// Include every highlight annotation in the digest.
    #[arg(long, default_value_t = false)]
    pub complete: bool,
    /// Archive the digested articles.
    #[arg(long, default_value_t = false)]
    pub archive: bool,
    /// With --archive, wait for every archive request and report the outcome.
    #[arg(long, default_value_t = false, requires = "archive")]
    pub wait: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Totals {
        filter: SearchFilter,
        count_only: bool,
    },
    Digest {
        detail: HighlightDetail,
        archive: Option<ArchiveMode>,
    },
}

impl Cli {
    /// Totals mode takes precedence over everything else.
    pub fn mode(&self) -> Result<Mode, CoreError> {
        if self.total {
            let filter = match self.query.as_deref() {
                Some(raw) => SearchFilter::try_from(raw)?,
                None => SearchFilter::unlabeled_inbox(),
            };
            return Ok(Mode::Totals {
                filter,
                count_only: self.count_only,
            });
        }
        Ok(Mode::Digest {
            detail: HighlightDetail::from_complete_flag(self.complete),
            archive: self
                .archive
                .then(|| ArchiveMode::from_wait_flag(self.wait)),
        })
    }
}
