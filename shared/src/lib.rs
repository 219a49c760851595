//! Platform-neutral core of the Vălean & Asociații website: article data
//! model and lifecycle, slug derivation, the bilingual route map, the
//! client-side article directory cache and the API error taxonomy.
//!
//! Nothing in this crate touches the browser; everything is unit-testable
//! on the host target. The WASM frontend consumes it for its routing guard,
//! its HTTP client and its admin workflow.

pub mod article;
pub mod directory;
pub mod error;
pub mod locale;
pub mod slug;

pub use article::{validate_required, Article, ArticleDraft, ArticleStatus, ArticleUpdate, Category};
pub use directory::{ArticleDirectory, ArticleFilters, ArticlePage, ArticleQuery, PageInfo};
pub use error::ApiError;
pub use locale::{Lang, RoutePair, ROUTE_PAIRS};
pub use slug::slugify;
