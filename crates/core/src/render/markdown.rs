use crate::domain::article::Article;
use crate::domain::stats::summarize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightDetail {
    /// First annotation only.
    Summary,
    /// Every annotation, comma separated.
    Complete,
}

impl HighlightDetail {
    pub fn from_complete_flag(complete: bool) -> Self {
        if complete {
            HighlightDetail::Complete
        } else {
            HighlightDetail::Summary
        }
    }
}

/// Renders the bullet list followed by the statistics footer.
///
/// Article order is preserved. With no articles only the footer is emitted.
pub fn render(articles: &[Article], detail: HighlightDetail) -> String {
    let summary = summarize(articles);
    if articles.is_empty() {
        return summary.to_string();
    }
    let bullets = articles
        .iter()
        .map(|article| render_bullet(article, detail))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{bullets}\n\n{summary}")
}

pub fn render_bullet(article: &Article, detail: HighlightDetail) -> String {
    let mut line = format!("- [{}", article.title);
    if let Some(author) = article
        .author
        .as_deref()
        .filter(|author| !author.trim().is_empty())
    {
        line.push_str(" by ");
        line.push_str(author);
    }
    line.push_str("](");
    line.push_str(&article.url);
    line.push(')');

    let notes = match detail {
        HighlightDetail::Summary => article
            .highlights
            .first()
            .map(|highlight| highlight.annotation.clone()),
        HighlightDetail::Complete if article.highlights.is_empty() => None,
        HighlightDetail::Complete => Some(
            article
                .highlights
                .iter()
                .map(|highlight| highlight.annotation.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
    };
    if let Some(notes) = notes {
        line.push_str(": ");
        line.push_str(&notes);
    }
    line
}
