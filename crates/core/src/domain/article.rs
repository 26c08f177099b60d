#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: Option<String>,
    pub words_count: u64,
    pub highlights: Vec<Highlight>,
}

/// One page of search results. `total_count` is the server-side total and
/// may exceed `articles.len()` when the result set is larger than a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub articles: Vec<Article>,
    pub total_count: u64,
}
