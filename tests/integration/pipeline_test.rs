// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{serve_page, test_settings, PRODUCT_PAGE};
use serde_json::Value;
use specscrape::application::usecases::scrape_product::ScrapeProductUseCase;
use specscrape::domain::models::fetch_result::FetchMethod;
use specscrape::domain::models::record::{Category, InteractiveEntry, ListItem, SpecEntry};
use specscrape::engines::fetcher::Fetcher;
use specscrape::infrastructure::storage::LocalJsonStorage;
use specscrape::utils::errors::PipelineError;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn use_case(settings: &specscrape::config::settings::Settings) -> ScrapeProductUseCase {
    let fetcher = Arc::new(Fetcher::from_settings(settings).unwrap());
    let storage = Arc::new(LocalJsonStorage::from_settings(&settings.storage));
    ScrapeProductUseCase::new(fetcher, storage)
}

#[tokio::test]
async fn test_pipeline_extracts_and_persists_product_page() {
    let server = serve_page("/handhelds/ally", PRODUCT_PAGE).await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out").join("record.json");
    let settings = test_settings(&output);
    let url = format!("{}/handhelds/ally", server.uri());

    let outcome = use_case(&settings).execute(&url).await.unwrap();
    let record = &outcome.record;

    assert!(outcome.persisted);
    assert_eq!(record.url, url);
    assert_eq!(record.scraping_method, FetchMethod::HttpFallback);

    assert_eq!(record.page_metadata.title, "ROG Xbox Ally | Xbox");
    assert_eq!(record.page_metadata.language, "en-AU");
    assert_eq!(record.page_metadata.meta_keywords, "xbox, handheld, rog");

    match record.comprehensive_specifications.get("table_specs_0") {
        Some(SpecEntry::Pairs(pairs)) => {
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs["Processor"], "AMD Ryzen Z2 A");
            assert_eq!(pairs["Memory"], "16GB LPDDR5X-6400");
        }
        other => panic!("unexpected table entry {:?}", other),
    }
    match record.comprehensive_specifications.get("definition_list_0") {
        Some(SpecEntry::Pairs(pairs)) => {
            assert_eq!(pairs.len(), 2);
            assert_eq!(pairs["Weight"], "670g");
        }
        other => panic!("unexpected definition list entry {:?}", other),
    }
    match record.comprehensive_specifications.get("structured_list_0") {
        Some(SpecEntry::List(items)) => assert_eq!(
            items[0],
            ListItem::KeyValue {
                key: "Connectivity".to_string(),
                value: "WiFi 6E and Bluetooth 5.4".to_string(),
            }
        ),
        other => panic!("unexpected structured list entry {:?}", other),
    }

    match record.interactive_elements.get("button_2") {
        Some(InteractiveEntry::Button(b)) => {
            assert_eq!(b.id, "buy-now");
            assert_eq!(b.text, "Buy now");
            assert_eq!(b.onclick, "buy()");
        }
        other => panic!("unexpected button entry {:?}", other),
    }
    assert!(record.interactive_elements.contains_key("form_0"));

    assert!(record.gaming_features.contains_key("game_pass"));
    assert!(!record.model_comparisons.is_empty());
    // The inline script also mentions "price" but script text is not visible
    assert_eq!(
        record.pricing_and_availability["price"],
        "Available at participating retailers, check the price in your region today."
    );

    assert_eq!(record.scripts, vec!["/js/bundle.js".to_string()]);
    assert_eq!(record.stylesheets, vec!["/css/site.css".to_string()]);
    assert_eq!(
        record.inline_styles,
        vec![".hero { color: #107c10 }".to_string()]
    );

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    for category in Category::ALL {
        assert!(saved.get(category.key()).is_some(), "missing {}", category.key());
    }
    assert_eq!(saved["scraping_method"], "HTTP only");
}

#[tokio::test]
async fn test_pipeline_retries_transient_http_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PRODUCT_PAGE))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let settings = test_settings(&dir.path().join("record.json"));

    let outcome = use_case(&settings)
        .execute(&format!("{}/flaky", server.uri()))
        .await
        .unwrap();

    assert_eq!(outcome.record.page_metadata.title, "ROG Xbox Ally | Xbox");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_pipeline_fails_without_content_and_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("record.json");
    let settings = test_settings(&output);

    let result = use_case(&settings)
        .execute(&format!("{}/down", server.uri()))
        .await;

    assert!(matches!(result, Err(PipelineError::NoContent { .. })));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
    assert!(!output.exists());
}
