use manhuafast::prelude::*;
use manhuafast::types::SearchQueryBuilder;
use manhuafast::Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_builder() {
        let query = SearchQueryBuilder::default()
            .query("martial peak".to_string())
            .page(Some(3))
            .build()
            .unwrap();

        assert_eq!(query.query, "martial peak");
        assert_eq!(query.page, Some(3));
    }

    #[test]
    fn test_search_query_from_string() {
        let query: SearchQuery = "test query".into();
        assert_eq!(query.query, "test query");
        assert!(query.page.is_none());

        let query: SearchQuery = "another query".to_string().into();
        assert_eq!(query.query, "another query");
        assert!(query.page.is_none());
    }

    #[test]
    fn test_manga_tile_struct() {
        let tile = MangaTile {
            id: "manga/test-manga".to_string(),
            title: "Test Manga".to_string(),
            image_url: "https://example.com/cover.jpg".to_string(),
        };

        assert_eq!(tile.id, "manga/test-manga");
        assert_eq!(tile.title, "Test Manga");
        assert!(!tile.image_url.is_empty());
    }

    #[test]
    fn test_manga_struct() {
        let manga = Manga {
            id: "manga/test-manga".to_string(),
            titles: vec!["Test Manga".to_string()],
            cover_url: "https://example.com/cover.jpg".to_string(),
            authors: vec!["Author 1".to_string()],
            description: "A test manga description".to_string(),
            status: MangaStatus::Ongoing,
            tags: vec!["Action".to_string(), "Adventure".to_string()],
        };

        assert_eq!(manga.id, "manga/test-manga");
        assert_eq!(manga.titles.len(), 1);
        assert_eq!(manga.authors.len(), 1);
        assert_eq!(manga.status, MangaStatus::Ongoing);
        assert_eq!(manga.tags.len(), 2);
    }

    #[test]
    fn test_manga_status_default() {
        assert_eq!(MangaStatus::default(), MangaStatus::Unknown);
    }

    #[test]
    fn test_chapter_struct() {
        let chapter = Chapter {
            id: "/manga/test/chapter-1/".to_string(),
            manga_id: "manga/test".to_string(),
            title: "Chapter 1: The Beginning".to_string(),
            language: "en".to_string(),
            number: 1.0,
            published_at: 1704412800000,
        };

        assert_eq!(chapter.language, "en");
        assert_eq!(chapter.number, 1.0);
        assert!(chapter.published_at > 0);
    }

    #[test]
    fn test_chapter_decimal_numbers() {
        let chapter = Chapter {
            id: "/manga/test/chapter-5-5/".to_string(),
            manga_id: "manga/test".to_string(),
            title: "Chapter 5.5: Special".to_string(),
            language: "en".to_string(),
            number: 5.5,
            published_at: 0,
        };

        assert_eq!(chapter.number, 5.5);
        assert!(chapter.title.contains("5.5"));
    }

    #[test]
    fn test_chapter_pages_struct() {
        let pages = ChapterPages {
            chapter_id: "/manga/test/chapter-1/".to_string(),
            manga_id: "manga/test".to_string(),
            pages: vec![
                "https://example.com/page1.jpg".to_string(),
                "https://example.com/page2.jpg".to_string(),
            ],
            long_strip: false,
        };

        assert_eq!(pages.pages.len(), 2);
        assert!(!pages.long_strip);
    }

    #[test]
    fn test_home_section_struct() {
        let section = HomeSection {
            id: "latest".to_string(),
            title: "Latest".to_string(),
            has_more: true,
            items: vec![],
        };

        assert_eq!(section.id, "latest");
        assert!(section.has_more);
        assert!(section.items.is_empty());
    }

    #[test]
    fn test_empty_collections() {
        let manga = Manga {
            id: "manga/test".to_string(),
            titles: vec!["No title".to_string()],
            cover_url: String::new(),
            authors: vec![],
            description: String::new(),
            status: MangaStatus::Unknown,
            tags: vec![],
        };

        assert!(manga.authors.is_empty());
        assert!(manga.tags.is_empty());
        assert!(manga.description.is_empty());
        assert!(!manga.titles.is_empty());
    }

    #[test]
    fn test_error_handling() {
        // Test that our error type can be created and displayed
        let error = Error::parse("Test parse error");
        let error_string = format!("{}", error);
        assert!(error_string.contains("Test parse error"));

        let error = Error::not_found("Test not found error");
        let error_string = format!("{}", error);
        assert!(error_string.contains("Test not found error"));

        let error = Error::source("mfn", "HTTP 503");
        let error_string = format!("{}", error);
        assert!(error_string.contains("mfn"));
        assert!(error_string.contains("HTTP 503"));
    }

    #[test]
    fn test_source_metadata() {
        let source = ManhuaFastSource::new();

        assert_eq!(source.id(), "mfn");
        assert_eq!(source.name(), "ManhuaFast (NET)");
        assert_eq!(source.version(), "1.0.0");
        assert!(!source.description().is_empty());
        assert!(!source.author().is_empty());
        assert_eq!(source.base_url(), "https://manhuafast.net");
        assert!(!source.base_url().ends_with('/'));
    }
}
