// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::domain::models::record::ExtractedRecord;
use crate::domain::repositories::record_repository::RecordRepository;
use crate::domain::services::extraction_service::Extractor;
use crate::engines::fetcher::Fetcher;
use crate::utils::errors::PipelineError;

// === Section: Use Case Definition ===

/// 一次运行的结果
///
/// 记录始终有效；`persisted` 为假表示写入存储失败（部分失败）
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub record: ExtractedRecord,
    pub persisted: bool,
}

pub struct ScrapeProductUseCase {
    fetcher: Arc<Fetcher>,
    extractor: Extractor,
    repository: Arc<dyn RecordRepository>,
}

// === Section: Implementation ===

impl ScrapeProductUseCase {
    pub fn new(fetcher: Arc<Fetcher>, repository: Arc<dyn RecordRepository>) -> Self {
        Self {
            fetcher,
            extractor: Extractor::new(),
            repository,
        }
    }

    /// 获取、提取并保存
    ///
    /// 只有 `NoContent`/`InvalidUrl` 会作为错误返回；存储失败记录日志后
    /// 通过 `persisted = false` 报告
    pub async fn execute(&self, url: &str) -> Result<ScrapeOutcome, PipelineError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("scrape_run", %run_id, url);

        async move {
            info!("Starting scrape run");
            let fetched = self.fetcher.fetch(url).await?;
            let record = self.extractor.extract(url, &fetched)?;

            let persisted = match self.repository.save(&record).await {
                Ok(()) => {
                    info!("Record persisted");
                    true
                }
                Err(e) => {
                    error!("Failed to persist record: {}", e);
                    false
                }
            };

            Ok(ScrapeOutcome { record, persisted })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::fetch_result::FetchMethod;
    use crate::domain::repositories::record_repository::StorageError;
    use crate::engines::traits::{EngineError, ScraperEngine};
    use crate::infrastructure::storage::InMemoryRecordStorage;
    use crate::utils::retry_policy::RetryPolicy;
    use async_trait::async_trait;

    struct StaticEngine(&'static str);

    #[async_trait]
    impl ScraperEngine for StaticEngine {
        async fn scrape(&self, _url: &str) -> Result<String, EngineError> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    struct ReadOnlyStorage;

    #[async_trait]
    impl RecordRepository for ReadOnlyStorage {
        async fn save(&self, _record: &ExtractedRecord) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        async fn load(&self) -> Result<ExtractedRecord, StorageError> {
            Err(StorageError::Io(std::io::ErrorKind::NotFound.into()))
        }
    }

    fn fetcher(html: &'static str) -> Arc<Fetcher> {
        Arc::new(Fetcher::new(
            None,
            Arc::new(StaticEngine(html)),
            RetryPolicy::standard(),
        ))
    }

    #[tokio::test]
    async fn test_execute_persists_record() {
        let storage = InMemoryRecordStorage::new();
        let use_case = ScrapeProductUseCase::new(
            fetcher("<html><head><title>Ally</title></head><body></body></html>"),
            Arc::new(storage.clone()),
        );

        let outcome = use_case.execute("https://example.com/ally").await.unwrap();

        assert!(outcome.persisted);
        assert_eq!(outcome.record.page_metadata.title, "Ally");
        assert_eq!(outcome.record.scraping_method, FetchMethod::HttpFallback);
        assert_eq!(storage.load().await.unwrap(), outcome.record);
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported_not_raised() {
        let use_case = ScrapeProductUseCase::new(
            fetcher("<p>Some content</p>"),
            Arc::new(ReadOnlyStorage),
        );

        let outcome = use_case.execute("https://example.com/ally").await.unwrap();

        assert!(!outcome.persisted);
        assert_eq!(outcome.record.url, "https://example.com/ally");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_content_produces_no_record() {
        let storage = InMemoryRecordStorage::new();
        let use_case = ScrapeProductUseCase::new(fetcher(""), Arc::new(storage.clone()));

        let result = use_case.execute("https://example.com/ally").await;

        assert!(matches!(result, Err(PipelineError::NoContent { .. })));
        assert!(storage.load().await.is_err());
    }
}
