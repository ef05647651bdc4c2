use crate::types::{Article, SourceKind};

/// Search/filter view over an aggregated article list.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    /// Case-insensitive substring matched against title or summary
    pub search: Option<String>,
    /// `None` matches every source
    pub source: Option<SourceKind>,
}

impl ArticleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_source(mut self, source: SourceKind) -> Self {
        self.source = Some(source);
        self
    }

    pub fn matches(&self, article: &Article) -> bool {
        let matches_source = self.source.map_or(true, |source| article.source == source);

        let matches_search = match self.search.as_deref().map(str::to_lowercase) {
            Some(needle) if !needle.is_empty() => {
                article.title.to_lowercase().contains(&needle)
                    || article.summary.to_lowercase().contains(&needle)
            }
            _ => true,
        };

        matches_source && matches_search
    }

    /// Matching articles, order preserved
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}
