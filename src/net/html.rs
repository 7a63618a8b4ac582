//! HTML parsing utilities built on CSS selectors.
//!
//! Thin helpers over the `scraper` crate: first-match and all-match
//! text/attribute extraction, ordered selector fallback chains, and a
//! rayon-parallel per-element item parser for listing pages.
//!
//! Site markup varies between theme versions, so most lookups here take a
//! *chain* of selectors tried in order, first non-empty result wins.
//!
//! # Examples
//!
//! ```rust
//! use manhuafast::net::html;
//!
//! let document = html::parse(r#"<h1 class="title">One Piece</h1>"#);
//! let title = html::select_text(&document, ".title");
//! assert_eq!(title, Some("One Piece".to_string()));
//! ```

use rayon::prelude::*;
use scraper::{ElementRef, Html, Selector};

/// Parses an HTML document from a string.
pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// Extracts trimmed text from the first element matching a CSS selector.
///
/// Returns `None` if no element matches or the selector is invalid.
pub fn select_text(html: &Html, selector: &str) -> Option<String> {
    Selector::parse(selector).ok().and_then(|sel| {
        html.select(&sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    })
}

/// Extracts an attribute value from the first element matching a CSS
/// selector.
///
/// Returns `None` if no element matches, the selector is invalid, or the
/// attribute is absent.
pub fn select_attr(html: &Html, selector: &str, attr: &str) -> Option<String> {
    Selector::parse(selector).ok().and_then(|sel| {
        html.select(&sel)
            .next()
            .and_then(|el| el.value().attr(attr).map(String::from))
    })
}

/// Extracts trimmed text from all elements matching a CSS selector.
pub fn select_all_text(html: &Html, selector: &str) -> Vec<String> {
    Selector::parse(selector)
        .ok()
        .map(|sel| {
            html.select(&sel)
                .map(|el| el.text().collect::<String>().trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Extracts attribute values from all elements matching a CSS selector.
pub fn select_all_attr(html: &Html, selector: &str, attr: &str) -> Vec<String> {
    Selector::parse(selector)
        .ok()
        .map(|sel| {
            html.select(&sel)
                .filter_map(|el| el.value().attr(attr).map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// Tries each selector in order and returns the first non-empty text match.
///
/// This is the ordered fallback chain used for single-valued fields whose
/// placement differs between theme versions.
///
/// # Examples
///
/// ```rust
/// use manhuafast::net::html;
///
/// let document = html::parse(r#"<div class="summary">A story</div>"#);
/// let text = html::select_first_text(&document, &[".missing", ".summary"]);
/// assert_eq!(text, Some("A story".to_string()));
/// ```
pub fn select_first_text(html: &Html, selectors: &[&str]) -> Option<String> {
    selectors
        .iter()
        .filter_map(|sel| select_text(html, sel))
        .find(|text| !text.is_empty())
}

/// Tries each selector in order and returns the first present attribute.
pub fn select_first_attr(html: &Html, selectors: &[&str], attr: &str) -> Option<String> {
    selectors
        .iter()
        .filter_map(|sel| select_attr(html, sel, attr))
        .find(|value| !value.is_empty())
}

/// Returns the first descendant of an element matching a CSS selector.
///
/// Element-scoped variant of [`select_text`]/[`select_attr`] for callers
/// iterating listing containers. Returns `None` if nothing matches or the
/// selector is invalid.
pub fn first_in<'a>(element: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let sel = Selector::parse(selector).ok()?;
    element.select(&sel).next()
}

/// Returns the first attribute present on an element, tried in priority
/// order.
///
/// Lazy-loading themes move the real image URL between `data-src`, `src`
/// and `data-original`, so callers pass the priority list that matches the
/// page being parsed.
pub fn attr_any(element: ElementRef, attrs: &[&str]) -> Option<String> {
    attrs
        .iter()
        .find_map(|attr| element.value().attr(attr))
        .map(String::from)
}

/// Parses listing items from HTML in parallel using rayon.
///
/// Finds all elements matching the selector (selector lists with commas are
/// supported and match in document order), converts each to an HTML
/// fragment, and runs the parser over the fragments concurrently. Elements
/// the parser rejects (returns `None` for) are dropped from the output.
///
/// # Examples
///
/// ```rust
/// use manhuafast::net::html;
///
/// let document = html::parse(r#"
///     <div class="item"><a href="/a">A</a></div>
///     <div class="item"><a href="/b">B</a></div>
/// "#);
///
/// let hrefs = html::parse_items(&document, ".item", |element| {
///     html::select_attr(&html::parse(&element.html()), "a", "href")
/// });
/// assert_eq!(hrefs, vec!["/a", "/b"]);
/// ```
///
/// # Performance
///
/// Elements are first collected into HTML strings to avoid borrowing issues
/// with parallel processing; order is preserved.
pub fn parse_items<T, F>(html: &Html, selector: &str, parser: F) -> Vec<T>
where
    T: Send,
    F: Fn(ElementRef) -> Option<T> + Sync,
{
    Selector::parse(selector)
        .ok()
        .map(|sel| {
            // Convert ElementRef to HTML strings which can be processed in parallel
            let elements: Vec<String> = html.select(&sel).map(|el| el.html()).collect();

            elements
                .into_par_iter()
                .filter_map(|html_str| {
                    let doc = Html::parse_fragment(&html_str);
                    let element = doc.root_element();
                    parser(element)
                })
                .collect()
        })
        .unwrap_or_default()
}
