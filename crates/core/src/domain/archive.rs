#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    Archived { link_id: String, message: String },
    Rejected { message: String, error_codes: Vec<String> },
}

/// Aggregate of an archive batch the caller waited on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub archived: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl ArchiveReport {
    pub fn record(&mut self, outcome: &ArchiveOutcome) {
        match outcome {
            ArchiveOutcome::Archived { .. } => self.archived += 1,
            ArchiveOutcome::Rejected { .. } => self.rejected += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn total(&self) -> usize {
        self.archived + self.rejected + self.failed
    }
}
