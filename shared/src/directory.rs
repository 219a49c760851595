//! Client-side article directory: the in-memory page of articles plus its
//! pagination metadata.
//!
//! The directory is always replaced wholesale after a successful fetch —
//! never merged field by field — so read-after-write consistency reduces
//! to "the refetch after a mutation has completed". Mutating operations
//! must await their refetch before reporting success.

use serde::{Deserialize, Serialize};

use crate::article::{Article, ArticleStatus, Category};

/// Pagination metadata of the current server page. Replaced as a unit on
/// every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Default for PageInfo {
    fn default() -> Self {
        PageInfo {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page: ArticleQuery::DEFAULT_LIMIT,
            has_next: false,
            has_prev: false,
        }
    }
}

/// Server-side list parameters: page, page size and free-text search.
/// Everything else is filtered client-side, see [`ArticleFilters`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub page: usize,
    pub limit: usize,
    pub search: Option<String>,
}

impl ArticleQuery {
    /// Page size used when the caller does not specify one.
    pub const DEFAULT_LIMIT: usize = 10;

    /// Query for one page with the default page size.
    pub fn page(page: usize) -> Self {
        ArticleQuery {
            page: page.max(1),
            limit: Self::DEFAULT_LIMIT,
            search: None,
        }
    }

    /// Attach a free-text search term; blank input clears it.
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() { None } else { Some(trimmed.to_string()) };
        self
    }
}

/// One page of articles as delivered by `GET /articles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub page_info: PageInfo,
}

/// Client-side narrowing applied to the already-fetched page.
///
/// These filters only ever narrow within the current server page; they do
/// not request a different page. Filtering that must span pages has to go
/// through [`ArticleQuery::with_search`] instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilters {
    pub status: Option<ArticleStatus>,
    pub category: Option<Category>,
    pub tag: Option<String>,
}

impl ArticleFilters {
    /// Filter to one publish state.
    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Does `article` pass every active filter?
    pub fn accepts(&self, article: &Article) -> bool {
        if let Some(status) = self.status {
            if article.status != status {
                return false;
            }
        }
        if let Some(category) = self.category {
            if article.category != category {
                return false;
            }
        }
        if let Some(tag) = self.tag.as_deref() {
            let tag = tag.trim();
            if !tag.is_empty() && !article.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                return false;
            }
        }
        true
    }
}

/// The in-memory article cache: the last fetched page plus its metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleDirectory {
    articles: Vec<Article>,
    page_info: PageInfo,
}

impl ArticleDirectory {
    /// Replace the whole cache with a freshly fetched page.
    pub fn apply(&mut self, page: ArticlePage) {
        self.articles = page.articles;
        self.page_info = page.page_info;
    }

    /// Synchronous cache lookup by id. Never reaches for the network; a
    /// miss is simply `None` and the caller decides whether to fetch.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Synchronous cache lookup by slug, used by the public detail page
    /// before it falls back to a by-slug network fetch.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }

    /// The articles of the current page that pass `filters`.
    pub fn narrow(&self, filters: &ArticleFilters) -> Vec<&Article> {
        self.articles.iter().filter(|article| filters.accepts(article)).collect()
    }

    /// All cached articles of the current page.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Pagination metadata of the current page.
    pub fn page_info(&self) -> &PageInfo {
        &self.page_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, status: ArticleStatus) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Articol {}", id),
            slug: format!("articol-{}", id),
            content: "<p>corp</p>".to_string(),
            excerpt: None,
            category: Category::LegalUpdates,
            tags: vec!["fiscal".to_string()],
            cover_image: None,
            status,
            author: "Ana Vălean".to_string(),
            created_at: "2024-03-01T09:00:00Z".to_string(),
            updated_at: "2024-03-01T09:00:00Z".to_string(),
            published_at: None,
        }
    }

    fn page(articles: Vec<Article>) -> ArticlePage {
        let total = articles.len();
        ArticlePage {
            articles,
            page_info: PageInfo {
                current_page: 1,
                total_pages: 1,
                total_items: total,
                items_per_page: 10,
                has_next: false,
                has_prev: false,
            },
        }
    }

    #[test]
    fn lookup_on_empty_cache_misses_without_fetching() {
        let directory = ArticleDirectory::default();
        assert!(directory.get("1").is_none());
        assert!(directory.find_by_slug("articol-1").is_none());
    }

    #[test]
    fn apply_replaces_the_cache_wholesale() {
        let mut directory = ArticleDirectory::default();
        directory.apply(page(vec![article("1", ArticleStatus::Draft)]));
        assert!(directory.get("1").is_some());

        // A refetch that no longer contains the article removes it: there
        // is no partial merge that could resurrect stale entries.
        directory.apply(page(vec![article("2", ArticleStatus::Published)]));
        assert!(directory.get("1").is_none());
        assert!(directory.get("2").is_some());
        assert_eq!(directory.page_info().total_items, 1);
    }

    #[test]
    fn toggle_reaches_the_cache_only_through_a_refetch() {
        let mut directory = ArticleDirectory::default();
        directory.apply(page(vec![article("1", ArticleStatus::Published)]));

        // The toggle is computed locally but the cache stays untouched
        // until the server confirms and the refetched page is applied.
        let next = directory.get("1").map(|a| a.status.toggled());
        assert_eq!(next, Some(ArticleStatus::Draft));
        assert_eq!(directory.get("1").map(|a| a.status), Some(ArticleStatus::Published));

        directory.apply(page(vec![article("1", ArticleStatus::Draft)]));
        assert_eq!(directory.get("1").map(|a| a.status), Some(ArticleStatus::Draft));
    }

    #[test]
    fn narrowing_only_sees_the_current_page() {
        let mut directory = ArticleDirectory::default();
        directory.apply(page(vec![
            article("1", ArticleStatus::Draft),
            article("2", ArticleStatus::Published),
            article("3", ArticleStatus::Published),
        ]));

        let published = ArticleFilters::default().with_status(ArticleStatus::Published);
        let ids: Vec<_> = directory.narrow(&published).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);

        let by_tag = ArticleFilters {
            tag: Some("FISCAL".to_string()),
            ..ArticleFilters::default()
        };
        assert_eq!(directory.narrow(&by_tag).len(), 3);

        let no_match = ArticleFilters {
            category: Some(Category::Publications),
            ..ArticleFilters::default()
        };
        assert!(directory.narrow(&no_match).is_empty());
    }

    #[test]
    fn query_normalizes_page_and_search() {
        let query = ArticleQuery::page(0).with_search("  contract  ");
        assert_eq!(query.page, 1);
        assert_eq!(query.search.as_deref(), Some("contract"));
        assert_eq!(ArticleQuery::page(3).with_search("   ").search, None);
    }
}
