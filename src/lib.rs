//! # ManhuaFast - site adapter for manga-reading hosts
//!
//! This crate implements a single source adapter for manhuafast.net: given
//! the site's HTML, it extracts search results, manga metadata, chapter
//! lists, and page-image URLs into a fixed output schema. Every operation
//! is a stateless, single-pass transformation of fetched markup; request
//! scheduling (rate limiting, header injection, retries) is handled by the
//! built-in HTTP client, and hosts own any cross-call policy beyond that.
//!
//! ## Features
//!
//! - **Five operations**: search, manga details, chapter list, chapter
//!   pages, and home sections, behind one [`Source`] trait
//! - **Selector fallback chains**: ordered CSS-selector lists tried until
//!   one matches, covering the site's mix of theme versions
//! - **Best-effort extraction**: malformed listing nodes are skipped
//!   individually and missing fields degrade to empty values; a partial
//!   parse never fails a call
//! - **Rate Limiting**: built-in per-source request spacing with a fixed
//!   User-Agent and Referer on every request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use manhuafast::prelude::*;
//! use manhuafast::error::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = ManhuaFastSource::new();
//!
//!     // Search the catalog
//!     let page = source.search("solo leveling".into()).await?;
//!     println!("Found {} results", page.tiles.len());
//!
//!     // Walk a manga's chapters
//!     if let Some(tile) = page.tiles.first() {
//!         let manga = source.get_manga_details(&tile.id).await?;
//!         let chapters = source.get_chapters(&tile.id).await?;
//!         println!("{}: {} chapters", manga.titles[0], chapters.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`source`]: the [`Source`] trait defining the adapter surface
//! - [`sources`]: the [`ManhuaFastSource`] implementation
//! - [`types`]: output schema for tiles, manga, chapters, and sections
//! - [`net`]: HTTP client, rate limiting, and HTML parsing utilities
//! - [`error`]: error handling

pub mod error;
pub mod net;
pub mod source;
pub mod sources;
pub mod types;

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and traits, allowing a single
/// `use manhuafast::prelude::*;` statement.
pub mod prelude {
    pub use crate::{
        source::Source,
        sources::ManhuaFastSource,
        types::{
            Chapter, ChapterPages, HomeSection, Manga, MangaStatus, MangaTile, SearchPage,
            SearchQuery,
        },
    };
}

// Re-export main types at crate root for direct access
pub use error::{Error, Result};
pub use source::Source;
pub use sources::ManhuaFastSource;
pub use types::{
    Chapter, ChapterPages, HomeSection, Manga, MangaStatus, MangaTile, SearchPage, SearchQuery,
};
