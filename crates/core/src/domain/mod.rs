pub mod archive;
pub mod article;
pub mod stats;

pub use archive::{ArchiveOutcome, ArchiveReport};
pub use article::{Article, Highlight, SearchResult};
pub use stats::{DigestSummary, ReadingTime, reading_time, summarize};
