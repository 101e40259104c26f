// tests/test_bookmark_service.rs
use std::sync::Arc;

use tempfile::TempDir;

use bmark::application::services::bookmark_service::BookmarkService;
use bmark::application::BookmarkServiceImpl;
use bmark::infrastructure::storage::file_storage::FileStorage;

fn service_over(dir: &TempDir) -> BookmarkServiceImpl {
    let storage = Arc::new(FileStorage::new(dir.path()).unwrap());
    let mut service = BookmarkServiceImpl::new(storage);
    service.initialize().unwrap();
    service
}

#[test]
fn given_fresh_store_dir_when_initialize_then_seeds_and_persists() {
    let dir = TempDir::new().unwrap();

    let service = service_over(&dir);

    assert_eq!(service.bookmarks().len(), 12);
    assert_eq!(service.categories().len(), 6);
    assert!(dir.path().join("bookmarks").exists());
    assert!(dir.path().join("categories").exists());
}

#[test]
fn given_mutations_when_restarted_then_state_round_trips_exactly() {
    let dir = TempDir::new().unwrap();

    let mut service = service_over(&dir);
    service
        .add_bookmark("Rust Blog", "blog.rust-lang.org", "开发")
        .unwrap();
    service.add_category("阅读").unwrap();
    let victim = service.bookmarks()[0].id.clone();
    service.delete_bookmark(&victim).unwrap();

    let restarted = service_over(&dir);

    assert_eq!(restarted.bookmarks(), service.bookmarks());
    assert_eq!(restarted.categories(), service.categories());
    assert!(restarted
        .bookmarks()
        .iter()
        .any(|b| b.url == "https://blog.rust-lang.org"));
}

#[test]
fn given_cascading_delete_when_restarted_then_category_and_members_gone() {
    let dir = TempDir::new().unwrap();

    let mut service = service_over(&dir);
    let removed = service.delete_category("AI工具").unwrap();
    assert_eq!(removed, 3);

    let restarted = service_over(&dir);

    assert_eq!(restarted.bookmarks().len(), 9);
    assert!(restarted.categories().iter().all(|c| c.value() != "AI工具"));
    assert!(restarted
        .grouped_view()
        .iter()
        .all(|g| g.category.value() != "AI工具"));
}

#[test]
fn given_seeded_store_when_grouped_then_first_five_categories_in_order() {
    let dir = TempDir::new().unwrap();

    let service = service_over(&dir);
    let view = service.grouped_view();

    let order: Vec<&str> = view.iter().map(|g| g.category.value()).collect();
    assert_eq!(order, vec!["开发", "新闻", "视频", "AI工具", "设计"]);
    assert_eq!(view[0].bookmarks.len(), 3);
    assert_eq!(view[1].bookmarks.len(), 2);
}
