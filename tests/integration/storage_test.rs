// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::PRODUCT_PAGE;
use specscrape::domain::models::fetch_result::{FetchMethod, FetchResult};
use specscrape::domain::models::record::Category;
use specscrape::domain::repositories::record_repository::{RecordRepository, StorageError};
use specscrape::domain::services::extraction_service::Extractor;
use specscrape::infrastructure::storage::LocalJsonStorage;
use tempfile::TempDir;

#[tokio::test]
async fn test_record_round_trip_through_json_file() {
    let fetched = FetchResult::new(PRODUCT_PAGE.to_string(), FetchMethod::Rendered);
    let record = Extractor::new()
        .extract("https://www.xbox.com/en-AU/handhelds/rog-xbox-ally", &fetched)
        .unwrap();

    let dir = TempDir::new().unwrap();
    let storage = LocalJsonStorage::new(dir.path().join("nested").join("record.json"));
    storage.save(&record).await.unwrap();

    let loaded = storage.load().await.unwrap();
    assert_eq!(loaded, record);
    for category in Category::ALL {
        assert_eq!(loaded.item_count(category), record.item_count(category));
    }

    let text = std::fs::read_to_string(storage.path()).unwrap();
    assert!(text.starts_with("{\n  \"url\""));
}

#[tokio::test]
async fn test_save_overwrites_previous_record() {
    let dir = TempDir::new().unwrap();
    let storage = LocalJsonStorage::new(dir.path().join("record.json"));
    let extractor = Extractor::new();

    let first = extractor
        .extract(
            "https://example.com/a",
            &FetchResult::new(PRODUCT_PAGE.to_string(), FetchMethod::Rendered),
        )
        .unwrap();
    let second = extractor
        .extract(
            "https://example.com/b",
            &FetchResult::new("<p>second</p>".to_string(), FetchMethod::HttpFallback),
        )
        .unwrap();

    storage.save(&first).await.unwrap();
    storage.save(&second).await.unwrap();

    let loaded = storage.load().await.unwrap();
    assert_eq!(loaded.url, "https://example.com/b");
    assert!(loaded.comprehensive_specifications.is_empty());
}

#[tokio::test]
async fn test_load_errors() {
    let dir = TempDir::new().unwrap();

    let missing = LocalJsonStorage::new(dir.path().join("missing.json"));
    assert!(matches!(missing.load().await, Err(StorageError::Io(_))));

    let corrupt_path = dir.path().join("corrupt.json");
    std::fs::write(&corrupt_path, "{\"url\": \"https://example.com\"}").unwrap();
    let corrupt = LocalJsonStorage::new(corrupt_path);
    assert!(matches!(
        corrupt.load().await,
        Err(StorageError::Serialization(_))
    ));
}

#[tokio::test]
async fn test_save_into_unwritable_location_fails() {
    let dir = TempDir::new().unwrap();
    // A regular file cannot act as a parent directory
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let storage = LocalJsonStorage::new(blocker.join("record.json"));

    let record = Extractor::new()
        .extract(
            "https://example.com",
            &FetchResult::new("<p>x</p>".to_string(), FetchMethod::HttpFallback),
        )
        .unwrap();

    assert!(matches!(
        storage.save(&record).await,
        Err(StorageError::Io(_))
    ));
}

#[tokio::test]
async fn test_save_leaves_only_the_record_file() {
    let dir = TempDir::new().unwrap();
    let storage = LocalJsonStorage::new(dir.path().join("record.json"));
    let record = Extractor::new()
        .extract(
            "https://example.com",
            &FetchResult::new(PRODUCT_PAGE.to_string(), FetchMethod::Rendered),
        )
        .unwrap();

    storage.save(&record).await.unwrap();
    storage.save(&record).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["record.json".to_string()]);
    assert!(!storage.staging_path().exists());
}

#[tokio::test]
async fn test_failed_save_keeps_previous_record() {
    let dir = TempDir::new().unwrap();
    let storage = LocalJsonStorage::new(dir.path().join("record.json"));
    let extractor = Extractor::new();

    let first = extractor
        .extract(
            "https://example.com/a",
            &FetchResult::new(PRODUCT_PAGE.to_string(), FetchMethod::Rendered),
        )
        .unwrap();
    storage.save(&first).await.unwrap();

    // A directory in the staging location makes the next write fail
    std::fs::create_dir(storage.staging_path()).unwrap();
    let second = extractor
        .extract(
            "https://example.com/b",
            &FetchResult::new("<p>second</p>".to_string(), FetchMethod::HttpFallback),
        )
        .unwrap();

    assert!(matches!(
        storage.save(&second).await,
        Err(StorageError::Io(_))
    ));
    assert_eq!(storage.load().await.unwrap(), first);
}
