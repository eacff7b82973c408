use crate::errors::WikiError;
use crate::services::PageService;
use crate::types::Page;

fn service() -> (tempfile::TempDir, PageService) {
    let dir = tempfile::tempdir().unwrap();
    let service = PageService::new(dir.path().to_path_buf());
    (dir, service)
}

// save followed by load must return the exact bytes, even when they are not UTF-8
#[test]
fn test_save_then_load_round_trip() {
    let (_dir, pages) = service();
    let page = Page::new("Binary", vec![0u8, 159, 146, 150, b'\n', b'x']);

    pages.save(&page).unwrap();
    let loaded = pages.load("Binary").unwrap();

    assert_eq!(loaded, page);
}

#[test]
fn test_file_is_raw_body_without_header() {
    let (dir, pages) = service();
    pages.save(&Page::new("Foo", "Hello")).unwrap();

    let on_disk = std::fs::read(dir.path().join("Foo.txt")).unwrap();
    assert_eq!(on_disk, b"Hello");
}

// saving twice with the same content leaves the same content as saving once
#[test]
fn test_save_is_idempotent() {
    let (dir, pages) = service();
    let page = Page::new("Twice", "same body");

    pages.save(&page).unwrap();
    pages.save(&page).unwrap();

    assert_eq!(std::fs::read(dir.path().join("Twice.txt")).unwrap(), b"same body");
}

#[test]
fn test_save_truncates_previous_content() {
    let (_dir, pages) = service();
    pages.save(&Page::new("Shrink", "a much longer first version")).unwrap();
    pages.save(&Page::new("Shrink", "short")).unwrap();

    assert_eq!(pages.load("Shrink").unwrap().body, b"short");
}

#[test]
fn test_load_missing_page_is_not_found() {
    let (_dir, pages) = service();
    assert!(matches!(pages.load("Nope"), Err(WikiError::NotFound)));
}

// read failures of any kind collapse into NotFound
#[test]
fn test_load_directory_is_not_found() {
    let (dir, pages) = service();
    std::fs::create_dir(dir.path().join("Folder.txt")).unwrap();
    assert!(matches!(pages.load("Folder"), Err(WikiError::NotFound)));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let pages = PageService::new(dir.path().join("missing"));
    assert!(matches!(pages.save(&Page::new("Foo", "x")), Err(WikiError::Io(_))));
}

#[cfg(unix)]
#[test]
fn test_new_page_is_owner_read_write_only() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, pages) = service();
    pages.save(&Page::new("Private", "secret")).unwrap();

    let mode = std::fs::metadata(dir.path().join("Private.txt")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
