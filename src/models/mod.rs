use serde::{Deserialize, Serialize};

/// One record of the article dataset.
///
/// Only `url` and `thumbnails` are meaningful here; every other field the
/// dataset carries (title, tags, dates, ...) is kept in `extra` so a
/// load/save round trip leaves it untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ArticleRecord {
    /// An empty-string thumbnail counts as missing, same as the original
    /// dataset convention.
    pub fn needs_thumbnail(&self) -> bool {
        self.thumbnails.as_deref().map_or(true, str::is_empty)
    }
}

/// A resolved thumbnail URL, owned by the caller once returned.
///
/// `Verified` passed the accessibility probe. `LowConfidence` is the
/// last-resort fallback: the decoded meta content returned as-is when no
/// candidate could be verified. It may point at a non-image or dead URL and
/// callers should treat it accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedThumbnail {
    Verified(String),
    LowConfidence(String),
}

impl ResolvedThumbnail {
    pub fn url(&self) -> &str {
        match self {
            ResolvedThumbnail::Verified(u) | ResolvedThumbnail::LowConfidence(u) => u,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            ResolvedThumbnail::Verified(u) | ResolvedThumbnail::LowConfidence(u) => u,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, ResolvedThumbnail::Verified(_))
    }
}
