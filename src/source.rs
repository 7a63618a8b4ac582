//! The `Source` trait: the adapter surface a host application consumes.
//!
//! A source exposes fixed identity metadata (id, name, version,
//! description, author, base URL) and five operations: search, manga
//! details, chapter list, chapter pages, and home sections. Each operation
//! performs one fetch through the source's HTTP client and one synchronous
//! parse-and-map pass; no state is shared between calls.
//!
//! # Examples
//!
//! ```rust
//! use manhuafast::prelude::*;
//! use manhuafast::error::Result;
//!
//! # async fn example() -> Result<()> {
//! let source = ManhuaFastSource::new();
//!
//! let page = source.search("solo leveling".into()).await?;
//! for tile in &page.tiles {
//!     println!("{} ({})", tile.title, tile.id);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{Chapter, ChapterPages, HomeSection, Manga, SearchPage, SearchQuery},
};

/// Trait implemented by site adapters.
///
/// The trait defines the full surface a host sees: static metadata plus the
/// five extraction operations. Identifiers returned by one operation
/// (`MangaTile::id`, `Chapter::id`) are accepted by the later operations
/// and resolved against [`base_url()`](Source::base_url) when they are not
/// already absolute.
///
/// # Implementation Guidelines
///
/// - Route all fetches through [`net::HttpClient`](crate::net::HttpClient)
///   so rate limiting and header injection apply uniformly
/// - Degrade missing fields to empty values instead of failing the call
/// - Skip individual malformed listing nodes; never abort a whole parse
///   pass for one bad node
#[async_trait]
pub trait Source: Send + Sync {
    /// Returns the unique identifier for this source.
    ///
    /// A short lowercase string used for rate-limit bookkeeping and error
    /// context.
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of this source.
    fn name(&self) -> &'static str;

    /// Returns the adapter version string.
    fn version(&self) -> &'static str;

    /// Returns a short description of the source.
    fn description(&self) -> &'static str;

    /// Returns the adapter author.
    fn author(&self) -> &'static str;

    /// Returns the base URL of the site, without a trailing slash.
    fn base_url(&self) -> &str;

    /// Searches the site's catalog.
    ///
    /// Returns one page of result tiles plus a best-effort pagination
    /// cursor: `next_page` is present whenever the current page produced
    /// at least one tile.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`](crate::Error::Network) - network/connection issues
    /// * [`Error::Source`](crate::Error::Source) - HTTP-level failures
    ///
    /// Malformed result nodes are dropped silently and never fail the call.
    async fn search(&self, query: SearchQuery) -> Result<SearchPage>;

    /// Retrieves full metadata for a manga.
    ///
    /// `manga_id` may be a site-relative path (as produced by
    /// [`search`](Source::search)) or an absolute URL. Missing fields
    /// degrade to empty values; the call only fails when the fetch itself
    /// fails.
    async fn get_manga_details(&self, manga_id: &str) -> Result<Manga>;

    /// Retrieves the chapter list for a manga.
    ///
    /// Chapters are returned in document order as listed on the site,
    /// which for this site is newest first. No re-sort by chapter number
    /// is performed.
    async fn get_chapters(&self, manga_id: &str) -> Result<Vec<Chapter>>;

    /// Retrieves the page image URLs for a chapter.
    ///
    /// All returned URLs are absolute regardless of how the markup
    /// referenced them. The list may be empty when the page holds no
    /// recognizable images.
    async fn get_chapter_pages(&self, manga_id: &str, chapter_id: &str) -> Result<ChapterPages>;

    /// Builds the home-page sections and delivers each through `sink`.
    ///
    /// The sink models hosts that render sections incrementally as they
    /// arrive. This adapter produces exactly one section per call.
    async fn get_home_sections(
        &self,
        sink: &mut (dyn FnMut(HomeSection) + Send),
    ) -> Result<()>;
}
