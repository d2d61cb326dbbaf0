//! End-to-end pipeline tests: load from disk, map to card views,
//! filter, and open the lightbox from a card's index.

use divlib_core::{
    filter_books, BookCardView, DataLoader, FsFetcher, GalleryCardView, Lightbox, SiteError,
};

fn write_data(dir: &std::path::Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).unwrap();
}

#[tokio::test]
async fn test_catalog_load_render_search() {
    let dir = tempfile::tempdir().unwrap();
    write_data(
        dir.path(),
        "books.json",
        r#"[{"title":"Мастер и Маргарита","author":"М. Булгаков"}]"#,
    );

    let loader = DataLoader::new(FsFetcher::new(dir.path()));
    let books = loader.load_books().await.unwrap();
    assert_eq!(books.len(), 1);

    // One card showing both fields
    let card = BookCardView::from_record(&books[0]);
    assert_eq!(card.title, "Мастер и Маргарита");
    assert_eq!(card.author, "М. Булгаков");

    // Searching "булгаков" retains it
    let hits = filter_books("булгаков", &books).unwrap();
    assert_eq!(hits.len(), 1);

    // Searching "толстой" yields an empty rendered collection
    let misses = filter_books("толстой", &books).unwrap();
    assert!(misses.is_empty());
}

#[tokio::test]
async fn test_non_array_body_renders_empty() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), "books.json", r#"{"error":"maintenance"}"#);

    let loader = DataLoader::new(FsFetcher::new(dir.path()));
    let books = loader.load_books().await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_missing_resource_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let loader = DataLoader::new(FsFetcher::new(dir.path()));
    let err = loader.load_books().await.unwrap_err();
    assert!(matches!(err, SiteError::Unavailable(_)));
}

#[tokio::test]
async fn test_malformed_json_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), "employees.json", "not json at all {");

    let loader = DataLoader::new(FsFetcher::new(dir.path()));
    let err = loader.load_staff().await.unwrap_err();
    assert!(matches!(err, SiteError::Json(_)));
}

#[tokio::test]
async fn test_sections_fail_independently() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), "photos.json", r#"[{"src":"images/hall.jpg"}]"#);

    let loader = DataLoader::new(FsFetcher::new(dir.path()));
    assert!(loader.load_books().await.is_err());
    assert_eq!(loader.load_gallery().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_gallery_card_index_drives_lightbox() {
    let dir = tempfile::tempdir().unwrap();
    write_data(
        dir.path(),
        "photos.json",
        r#"[
            {"src":"images/hall.jpg","caption":"Зал"},
            {"type":"video","src":"video/tour.mp4","caption":"Экскурсия"},
            {"src":"images/yard.jpg"}
        ]"#,
    );

    let loader = DataLoader::new(FsFetcher::new(dir.path()));
    let photos = loader.load_gallery().await.unwrap();

    // Cards carry their original-sequence index
    let cards: Vec<_> = photos
        .iter()
        .enumerate()
        .map(|(i, p)| GalleryCardView::from_record(p, i))
        .collect();
    assert_eq!(cards[1].index, 1);
    assert!(cards[1].is_video);

    // Activating a card opens the lightbox at that index; navigation
    // wraps over the full sequence
    let mut lightbox = Lightbox::new();
    assert!(lightbox.open(cards[1].index, photos.len()));
    assert_eq!(lightbox.show_next(photos.len()), Some(2));
    assert_eq!(lightbox.show_next(photos.len()), Some(0));
    assert_eq!(lightbox.show_prev(photos.len()), Some(2));
}
