//! Article data model and publish-state machine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Publish state of one article. `Draft` articles are only visible in the
/// admin area; `Published` articles appear on the public news pages.
///
/// There is no implicit default: the author picks the initial state at
/// creation time through one of two distinct save actions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Work in progress, hidden from the public site.
    Draft,
    /// Live on the public news pages.
    Published,
}

impl ArticleStatus {
    /// Lowercase wire form, matching the API's JSON representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    /// The opposite state. Toggling is the only transition besides the
    /// explicit choice at creation time.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Draft => Self::Published,
            Self::Published => Self::Draft,
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(format!("invalid article status: {}", s)),
        }
    }
}

/// Fixed editorial categories for firm news.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Legislative and case-law changes relevant to clients.
    LegalUpdates,
    /// Announcements about the firm itself.
    FirmNews,
    /// Commentary on notable cases.
    CaseAnalysis,
    /// Longer-form articles and studies by the firm's lawyers.
    Publications,
}

impl Category {
    /// Every category, in display order. Used for filter dropdowns and the
    /// editor's category selector.
    pub const ALL: [Category; 4] = [
        Category::LegalUpdates,
        Category::FirmNews,
        Category::CaseAnalysis,
        Category::Publications,
    ];

    /// Kebab-case wire form, matching the API's JSON representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegalUpdates => "legal-updates",
            Self::FirmNews => "firm-news",
            Self::CaseAnalysis => "case-analysis",
            Self::Publications => "publications",
        }
    }

    /// Romanian/English display labels.
    pub fn label(&self) -> (&'static str, &'static str) {
        match self {
            Self::LegalUpdates => ("Noutăți legislative", "Legal updates"),
            Self::FirmNews => ("Noutăți despre firmă", "Firm news"),
            Self::CaseAnalysis => ("Analize de caz", "Case analysis"),
            Self::Publications => ("Publicații", "Publications"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legal-updates" => Ok(Self::LegalUpdates),
            "firm-news" => Ok(Self::FirmNews),
            "case-analysis" => Ok(Self::CaseAnalysis),
            "publications" => Ok(Self::Publications),
            _ => Err(format!("invalid category: {}", s)),
        }
    }
}

/// One news article as delivered by the content API.
///
/// `id` is server-assigned and immutable. Timestamps are RFC 3339 strings;
/// the frontend only ever displays their date part, so they are kept as
/// strings instead of parsed datetimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Rich HTML body. Sanitised before being injected into the DOM.
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    /// URL or `data:` URI.
    #[serde(default)]
    pub cover_image: Option<String>,
    pub status: ArticleStatus,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Payload for creating a brand-new article. The slug is derived from the
/// title client-side; the server assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub status: ArticleStatus,
}

/// Partial update: only the present fields are replaced server-side.
/// A status-only value implements the Draft⇄Published toggle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
}

impl ArticleUpdate {
    /// The status-only patch used by the admin list's toggle button.
    pub fn status_only(status: ArticleStatus) -> Self {
        ArticleUpdate {
            status: Some(status),
            ..ArticleUpdate::default()
        }
    }
}

/// Check the fields every persist operation requires, before any network
/// call is made. Title and content must both be non-blank.
pub fn validate_required(title: &str, content: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }
    if content.trim().is_empty() {
        return Err(ApiError::Validation("content is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!("draft".parse::<ArticleStatus>(), Ok(ArticleStatus::Draft));
        assert_eq!("Published".parse::<ArticleStatus>(), Ok(ArticleStatus::Published));
        assert!("archived".parse::<ArticleStatus>().is_err());
        assert_eq!(ArticleStatus::Draft.to_string(), "draft");
    }

    #[test]
    fn toggle_is_a_pure_flip() {
        assert_eq!(ArticleStatus::Published.toggled(), ArticleStatus::Draft);
        assert_eq!(ArticleStatus::Published.toggled().toggled(), ArticleStatus::Published);
    }

    #[test]
    fn status_only_update_serializes_nothing_else() {
        let patch = ArticleUpdate::status_only(ArticleStatus::Published);
        let json = serde_json::to_value(&patch).expect("serialize patch");
        assert_eq!(json, serde_json::json!({ "status": "published" }));
    }

    #[test]
    fn validation_requires_title_and_content() {
        assert!(validate_required("Titlu", "<p>text</p>").is_ok());
        assert!(matches!(validate_required("  ", "<p>text</p>"), Err(ApiError::Validation(_))));
        assert!(matches!(validate_required("Titlu", ""), Err(ApiError::Validation(_))));
    }

    #[test]
    fn category_wire_form_is_kebab_case() {
        let json = serde_json::to_string(&Category::LegalUpdates).expect("serialize category");
        assert_eq!(json, "\"legal-updates\"");
        assert_eq!("case-analysis".parse::<Category>(), Ok(Category::CaseAnalysis));
    }
}
