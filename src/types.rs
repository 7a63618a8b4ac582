//! Core data types for the adapter's output schema.
//!
//! This module defines the records produced by the five operations:
//!
//! - [`MangaTile`] - Minimal listing record used in search results and home sections
//! - [`SearchPage`] - One page of search results with a pagination cursor
//! - [`Manga`] - Full manga metadata
//! - [`Chapter`] - One chapter row from a manga's chapter list
//! - [`ChapterPages`] - Page image URLs for one chapter
//! - [`HomeSection`] - One home-page section of tiles
//! - [`SearchQuery`] - Input parameters for searching
//!
//! All records are constructed fresh per call from parsed markup; nothing
//! is cached or mutated after construction.
//!
//! # Examples
//!
//! ```rust
//! use manhuafast::types::*;
//!
//! let tile = MangaTile {
//!     id: "manga/one-piece".to_string(),
//!     title: "One Piece".to_string(),
//!     image_url: "https://example.com/cover.jpg".to_string(),
//! };
//! ```

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Minimal listing record used in search results and home sections.
///
/// # Fields
///
/// * `id` - Site-relative path identifying the manga, unique per manga.
///   Feeding it back into a details call resolves it against the base URL.
/// * `title` - Display title
/// * `image_url` - Cover thumbnail URL, possibly empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MangaTile {
    /// Site-relative path identifying the manga
    pub id: String,

    /// Display title
    pub title: String,

    /// Cover thumbnail URL (may be empty)
    pub image_url: String,
}

/// One page of search results.
///
/// `next_page` is a best-effort pagination cursor: it is set to the next
/// page number whenever the current page produced at least one tile, and
/// absent otherwise. The site exposes no precise "has next page" signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// Result tiles in document order
    pub tiles: Vec<MangaTile>,

    /// Page number to request next, absent at the end of results
    pub next_page: Option<u32>,
}

/// Publication status of a manga.
///
/// Classified from the site's status text by case-insensitive substring
/// match; anything that mentions neither "ongoing" nor "completed" maps to
/// [`Unknown`](MangaStatus::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MangaStatus {
    Ongoing,
    Completed,
    #[default]
    Unknown,
}

/// Full metadata for one manga.
///
/// Every field degrades to an empty value when the page does not provide
/// it; only `titles` is guaranteed non-empty (a placeholder title is used
/// as a last resort).
///
/// # Examples
///
/// ```rust
/// use manhuafast::types::{Manga, MangaStatus};
///
/// let manga = Manga {
///     id: "manga/one-piece".to_string(),
///     titles: vec!["One Piece".to_string()],
///     cover_url: "https://example.com/cover.jpg".to_string(),
///     authors: vec!["Oda Eiichiro".to_string()],
///     description: "A story about pirates".to_string(),
///     status: MangaStatus::Ongoing,
///     tags: vec!["Action".to_string(), "Adventure".to_string()],
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manga {
    /// Identifier the manga was requested with
    pub id: String,

    /// Known titles, never empty
    pub titles: Vec<String>,

    /// Cover image URL (may be empty)
    pub cover_url: String,

    /// List of authors (may be empty)
    #[serde(default)]
    pub authors: Vec<String>,

    /// Description/summary (may be empty)
    pub description: String,

    /// Publication status
    pub status: MangaStatus,

    /// Tags/genres in document order, duplicates preserved
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One chapter row from a manga's chapter list.
///
/// The chapter number is parsed from the display name and supports decimal
/// numbers for special chapters ("Chapter 5.5"); rows without a usable
/// number fall back to their 1-based position in the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    /// Site-relative path or absolute URL identifying the chapter
    pub id: String,

    /// ID of the manga this chapter belongs to
    pub manga_id: String,

    /// Display name as shown on the site
    pub title: String,

    /// Language code, always "en" for this site
    pub language: String,

    /// Chapter number (can be decimal for .5 chapters)
    pub number: f64,

    /// Publication time in epoch milliseconds, 0 when unknown
    pub published_at: i64,
}

/// Page image URLs for one chapter, in reading order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterPages {
    /// Chapter these pages belong to
    pub chapter_id: String,

    /// Manga the chapter belongs to
    pub manga_id: String,

    /// Absolute image URLs in reading order
    pub pages: Vec<String>,

    /// Whether the chapter renders as one continuous strip; always false
    /// for this site
    pub long_strip: bool,
}

/// One home-page section of tiles.
///
/// This adapter produces exactly one section per home-page call, with the
/// fixed id `"latest"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeSection {
    /// Section identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Whether the host can page for more entries
    pub has_more: bool,

    /// Tiles in document order
    pub items: Vec<MangaTile>,
}

/// Input parameters for a search call.
///
/// Uses the builder pattern (via `derive_builder`) for a fluent API, and
/// converts from plain strings for the common case of a first-page query.
///
/// # Examples
///
/// ```rust
/// use manhuafast::types::{SearchQuery, SearchQueryBuilder};
///
/// let query = SearchQueryBuilder::default()
///     .query("one piece".to_string())
///     .page(Some(2))
///     .build()
///     .unwrap();
///
/// let first_page: SearchQuery = "one piece".into();
/// assert_eq!(first_page.page, None);
/// ```
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct SearchQuery {
    /// Free-text query
    pub query: String,

    /// Page to request; `None` means page 1
    #[builder(default)]
    pub page: Option<u32>,
}

impl From<String> for SearchQuery {
    fn from(query: String) -> Self {
        SearchQuery { query, page: None }
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        SearchQuery {
            query: query.to_string(),
            page: None,
        }
    }
}
