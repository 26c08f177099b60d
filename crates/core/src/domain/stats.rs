use std::fmt;

use crate::domain::article::Article;

pub const WORDS_PER_MINUTE: u64 = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingTime {
    pub hours: u64,
    pub minutes: u64,
}

/// Rounds up to a whole minute before splitting into hours and minutes.
pub fn reading_time(words: u64) -> ReadingTime {
    let total_minutes = words.div_ceil(WORDS_PER_MINUTE);
    ReadingTime {
        hours: total_minutes / 60,
        minutes: total_minutes % 60,
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours and {} minutes", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestSummary {
    pub articles: usize,
    pub words: u64,
    pub reading_time: ReadingTime,
}

pub fn summarize(articles: &[Article]) -> DigestSummary {
    let words = articles.iter().map(|article| article.words_count).sum();
    DigestSummary {
        articles: articles.len(),
        words,
        reading_time: reading_time(words),
    }
}

impl fmt::Display for DigestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total articles: {}", self.articles)?;
        writeln!(f, "Total words: {}", self.words)?;
        write!(f, "Total reading time: {}", self.reading_time)
    }
}
