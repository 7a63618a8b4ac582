use crate::{
    error::Result,
    net::{self, HttpClient, html},
    source::Source,
    types::{
        Chapter, ChapterPages, HomeSection, Manga, MangaStatus, MangaTile, SearchPage, SearchQuery,
    },
};
use async_trait::async_trait;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const BASE_URL: &str = "https://manhuafast.net";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120 Safari/537.36";

/// Listing containers on search result pages. A comma list matches the
/// union of all variants in document order; the site mixes theme versions
/// so no single class is reliable.
const SEARCH_TILE_CONTAINERS: &str =
    ".c-tabs-item__content, .page-item-detail, .dpost, .bs, .post, .item, .top-item, article";

/// Listing containers on the home page. Narrower than the search set and
/// with `src`-only image lookup (home tiles are not lazy-loaded).
const HOME_TILE_CONTAINERS: &str =
    ".update_list, .page-item-detail, .latest .post, .latest-manga .item, .bs, .post, .item";

const COVER_IMAGE: &[&str] = &["img.wp-manga-cover", ".summary_image img", ".thumb img"];
const AUTHOR: &[&str] = &[".author-content", ".author a"];
const DESCRIPTION: &[&str] = &[
    ".description-summary",
    ".summary__content",
    "#chapter-content",
    ".entry-content",
];
const STATUS: &[&str] = &[".post-status", ".manga-status", ".status", ".post-meta"];
const TAG_ANCHORS: &str = ".genres-content a, .post-content_item a, .genres a, .tags a";

const CHAPTER_ROWS: &str =
    ".wp-manga-chapter, .chapter-list li, .chapters li, .listing-chapters_wrap li";
const CHAPTER_DATE: &str = ".chapter-release-date, .date, .post-date";

const PAGE_IMAGES: &str =
    ".reading-content img, .chapter-content img, .wp-manga-image img, .text-left img";
const FALLBACK_PAGE_IMAGES: &str = "figure img";

static CHAPTER_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(\.\d+)?").expect("valid regex"));
static CHAPTER_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)chapter").expect("valid regex"));

/// Reason a listing node was dropped during tile extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileSkip {
    MissingTitle,
    MissingLink,
}

/// Source implementation for manhuafast.net, a Madara WordPress theme site.
///
/// Each operation issues exactly one request through the shared
/// [`HttpClient`] and maps the returned markup in a single pass. The
/// `parse_*` methods hold the mapping logic and take an already-parsed
/// document, so extraction behavior can be exercised without network I/O.
pub struct ManhuaFastSource {
    client: HttpClient,
}

impl ManhuaFastSource {
    /// Create a new ManhuaFast source.
    pub fn new() -> Self {
        let client = HttpClient::new("mfn")
            .with_rate_limit(500) // the site tolerates 2 requests per second
            .with_max_retries(3)
            .with_header("User-Agent", USER_AGENT)
            .with_header("Referer", BASE_URL);

        Self { client }
    }

    /// Normalizes an anchor href into a site-relative manga id.
    ///
    /// Absolute links into the site lose the base-URL prefix and any
    /// trailing slash; everything else is passed through untouched.
    fn relative_id(&self, href: &str) -> String {
        match href.strip_prefix(&format!("{}/", BASE_URL)) {
            Some(rest) => rest.trim_end_matches('/').to_string(),
            None => href.to_string(),
        }
    }

    /// Resolves a manga or chapter id back into a fetchable URL.
    fn absolute_url(&self, id: &str) -> String {
        if id.starts_with("http") {
            id.to_string()
        } else {
            format!("{}/{}", BASE_URL, id)
        }
    }

    /// Absolutizes a page-image path.
    fn absolute_page_url(&self, src: &str) -> String {
        if src.starts_with("http") {
            src.to_string()
        } else if src.starts_with('/') {
            format!("{}{}", BASE_URL, src)
        } else {
            format!("{}/{}", BASE_URL, src)
        }
    }

    /// Maps one listing container to a tile.
    ///
    /// Title comes from the first anchor's `title` attribute, else its
    /// trimmed text; the id from its href. The image is read from the
    /// first `<img>` using the caller's attribute priority. Nodes without
    /// a usable title or link are rejected with a typed skip reason.
    fn tile_from_element(
        &self,
        element: ElementRef<'_>,
        image_attrs: &[&str],
    ) -> std::result::Result<MangaTile, TileSkip> {
        let anchor = html::first_in(element, "a").ok_or(TileSkip::MissingLink)?;

        let title = anchor
            .value()
            .attr("title")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| anchor.text().collect::<String>().trim().to_string());
        if title.is_empty() {
            return Err(TileSkip::MissingTitle);
        }

        let href = anchor.value().attr("href").unwrap_or("");
        let id = self.relative_id(href);
        if id.is_empty() {
            return Err(TileSkip::MissingLink);
        }

        let image_url = html::first_in(element, "img")
            .and_then(|img| html::attr_any(img, image_attrs))
            .unwrap_or_default();

        Ok(MangaTile {
            id,
            title,
            image_url,
        })
    }

    /// Maps a search results document into one page of tiles.
    ///
    /// `next_page` is a heuristic: present whenever this page produced at
    /// least one tile, since the site exposes no reliable end-of-results
    /// marker.
    pub fn parse_search_page(&self, document: &Html, page: u32) -> SearchPage {
        let tiles = html::parse_items(document, SEARCH_TILE_CONTAINERS, |element| {
            match self.tile_from_element(element, &["data-src", "src"]) {
                Ok(tile) => Some(tile),
                Err(skip) => {
                    log::debug!("Dropping search node: {:?}", skip);
                    None
                }
            }
        });

        let next_page = if tiles.is_empty() { None } else { Some(page + 1) };

        SearchPage { tiles, next_page }
    }

    /// Maps a manga page document into full metadata.
    ///
    /// Every field runs through an ordered selector fallback chain and
    /// degrades to an empty value when nothing matches; only the title has
    /// a placeholder of last resort.
    pub fn parse_manga_details(&self, document: &Html, manga_id: &str) -> Manga {
        let title = html::select_text(document, "h1")
            .filter(|t| !t.is_empty())
            .or_else(|| html::select_attr(document, r#"meta[property="og:title"]"#, "content"))
            .unwrap_or_else(|| "No title".to_string());

        let cover_url = html::select_first_attr(document, COVER_IMAGE, "src")
            .or_else(|| html::select_attr(document, r#"meta[property="og:image"]"#, "content"))
            .unwrap_or_default();

        let authors = html::select_first_text(document, AUTHOR)
            .map(|author| vec![author])
            .unwrap_or_default();

        let description = html::select_first_text(document, DESCRIPTION)
            .or_else(|| html::select_text(document, "div.description"))
            .unwrap_or_default();

        let status_text = html::select_first_text(document, STATUS)
            .unwrap_or_default()
            .to_lowercase();
        // "ongoing" is checked first; some status strings contain both words
        let status = if status_text.contains("ongoing") {
            MangaStatus::Ongoing
        } else if status_text.contains("completed") {
            MangaStatus::Completed
        } else {
            MangaStatus::Unknown
        };

        let tags = html::select_all_text(document, TAG_ANCHORS)
            .into_iter()
            .filter(|tag| !tag.is_empty())
            .collect();

        Manga {
            id: manga_id.to_string(),
            titles: vec![title],
            cover_url,
            authors,
            description,
            status,
            tags,
        }
    }

    /// Maps a manga page document into its chapter list.
    ///
    /// The primary pass walks the chapter-row selectors; when it finds
    /// nothing at all, a whole-page anchor scan takes over. Document order
    /// is preserved in both cases.
    pub fn parse_chapters(&self, document: &Html, manga_id: &str) -> Vec<Chapter> {
        let mut chapters = Vec::new();

        if let Ok(row_sel) = Selector::parse(CHAPTER_ROWS) {
            for (index, row) in document.select(&row_sel).enumerate() {
                let anchor = html::first_in(row, "a");

                let name = anchor
                    .map(|a| a.text().collect::<String>().trim().to_string())
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| row.text().collect::<String>().trim().to_string());

                let Some(href) = anchor.and_then(|a| a.value().attr("href")) else {
                    log::debug!("Dropping chapter row without link: {:?}", name);
                    continue;
                };

                let number = parse_chapter_number(&name).unwrap_or((index + 1) as f64);

                let published_at = html::first_in(row, CHAPTER_DATE)
                    .map(|el| el.text().collect::<String>().trim().to_string())
                    .map(|text| parse_release_date(&text))
                    .unwrap_or(0);

                chapters.push(Chapter {
                    id: href.to_string(),
                    manga_id: manga_id.to_string(),
                    title: name,
                    language: "en".to_string(),
                    number,
                    published_at,
                });
            }
        }

        if chapters.is_empty() {
            log::debug!("Primary chapter selectors matched nothing, scanning all anchors");
            chapters = self.scan_chapter_anchors(document, manga_id);
            if chapters.is_empty() {
                log::warn!("No chapters found for {}", manga_id);
            }
        }

        chapters
    }

    /// Fallback chapter pass: treat any anchor as a chapter when its href
    /// contains "/chapter-" or its text mentions a chapter. Numbers come
    /// from the 1-based anchor position since the names rarely carry any.
    fn scan_chapter_anchors(&self, document: &Html, manga_id: &str) -> Vec<Chapter> {
        let Ok(a_sel) = Selector::parse("a") else {
            return Vec::new();
        };

        let mut chapters = Vec::new();
        for (index, anchor) in document.select(&a_sel).enumerate() {
            let href = anchor.value().attr("href").unwrap_or("");
            let text = anchor.text().collect::<String>().trim().to_string();

            if href.contains("/chapter-") || CHAPTER_WORD_RE.is_match(&text) {
                let title = if text.is_empty() {
                    format!("Chapter {}", index + 1)
                } else {
                    text
                };

                chapters.push(Chapter {
                    id: href.to_string(),
                    manga_id: manga_id.to_string(),
                    title,
                    language: "en".to_string(),
                    number: (index + 1) as f64,
                    published_at: 0,
                });
            }
        }

        chapters
    }

    /// Maps a chapter page document into its page-image URLs.
    ///
    /// Reading-content images are preferred, with per-image attribute
    /// priority `data-src`, `src`, `data-original` to cover lazy loading;
    /// `figure img` is a last resort when the reader markup is absent.
    /// Every collected path is absolutized. The result may be empty.
    pub fn parse_chapter_pages(
        &self,
        document: &Html,
        manga_id: &str,
        chapter_id: &str,
    ) -> ChapterPages {
        let mut pages = Vec::new();

        if let Ok(img_sel) = Selector::parse(PAGE_IMAGES) {
            for img in document.select(&img_sel) {
                if let Some(src) = html::attr_any(img, &["data-src", "src", "data-original"]) {
                    let src = src.trim();
                    if !src.is_empty() {
                        pages.push(self.absolute_page_url(src));
                    }
                }
            }
        }

        if pages.is_empty() {
            log::debug!("No reading-content images, falling back to figure images");
            if let Ok(img_sel) = Selector::parse(FALLBACK_PAGE_IMAGES) {
                for img in document.select(&img_sel) {
                    if let Some(src) = img.value().attr("src") {
                        let src = src.trim();
                        if !src.is_empty() {
                            pages.push(self.absolute_page_url(src));
                        }
                    }
                }
            }
        }

        ChapterPages {
            chapter_id: chapter_id.to_string(),
            manga_id: manga_id.to_string(),
            pages,
            long_strip: false,
        }
    }

    /// Maps the site root document into the single "Latest" section.
    pub fn parse_home_page(&self, document: &Html) -> HomeSection {
        let items = html::parse_items(document, HOME_TILE_CONTAINERS, |element| {
            match self.tile_from_element(element, &["src"]) {
                Ok(tile) => Some(tile),
                Err(skip) => {
                    log::debug!("Dropping home node: {:?}", skip);
                    None
                }
            }
        });

        HomeSection {
            id: "latest".to_string(),
            title: "Latest".to_string(),
            has_more: true,
            items,
        }
    }
}

impl Default for ManhuaFastSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for ManhuaFastSource {
    fn id(&self) -> &'static str {
        "mfn"
    }

    fn name(&self) -> &'static str {
        "ManhuaFast (NET)"
    }

    fn version(&self) -> &'static str {
        "1.0.0"
    }

    fn description(&self) -> &'static str {
        "ManhuaFast.net mirror"
    }

    fn author(&self) -> &'static str {
        "LuMiSxh"
    }

    fn base_url(&self) -> &str {
        BASE_URL
    }

    async fn search(&self, query: SearchQuery) -> Result<SearchPage> {
        let page = query.page.unwrap_or(1);
        let url = format!(
            "{}/?s={}&post_type=wp-manga&page={}",
            BASE_URL,
            urlencoding::encode(&query.query),
            page
        );

        let html_str = self.client.get_text(&url).await?;
        let document = net::html::parse(&html_str);

        Ok(self.parse_search_page(&document, page))
    }

    async fn get_manga_details(&self, manga_id: &str) -> Result<Manga> {
        let url = self.absolute_url(manga_id);
        let html_str = self.client.get_text(&url).await?;
        let document = net::html::parse(&html_str);

        Ok(self.parse_manga_details(&document, manga_id))
    }

    async fn get_chapters(&self, manga_id: &str) -> Result<Vec<Chapter>> {
        let url = self.absolute_url(manga_id);
        let html_str = self.client.get_text(&url).await?;
        let document = net::html::parse(&html_str);

        Ok(self.parse_chapters(&document, manga_id))
    }

    async fn get_chapter_pages(&self, manga_id: &str, chapter_id: &str) -> Result<ChapterPages> {
        let url = self.absolute_url(chapter_id);
        let html_str = self.client.get_text(&url).await?;
        let document = net::html::parse(&html_str);

        Ok(self.parse_chapter_pages(&document, manga_id, chapter_id))
    }

    async fn get_home_sections(
        &self,
        sink: &mut (dyn FnMut(HomeSection) + Send),
    ) -> Result<()> {
        let html_str = self.client.get_text(BASE_URL).await?;
        let document = net::html::parse(&html_str);

        sink(self.parse_home_page(&document));
        Ok(())
    }
}

/// Extracts the first decimal number from a chapter display name.
///
/// Returns `None` when the name carries no digits or the number parses to
/// zero, so callers can fall back to the positional index.
fn parse_chapter_number(name: &str) -> Option<f64> {
    let number = CHAPTER_NUMBER_RE
        .find(name)?
        .as_str()
        .parse::<f64>()
        .ok()?;

    if number == 0.0 { None } else { Some(number) }
}

/// Parses a release-date string into epoch milliseconds.
///
/// The site renders dates in a handful of formats depending on theme
/// version; each is tried in turn and anything unparseable (including
/// relative dates like "2 days ago") maps to 0, meaning unknown.
fn parse_release_date(text: &str) -> i64 {
    const FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%Y-%m-%d", "%d/%m/%Y"];

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp_millis())
        .unwrap_or(0)
}
