// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::fetch_result::{FetchMethod, FetchResult};
use crate::engines::browser_engine::BrowserEngine;
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::engines::traits::{EngineError, ScraperEngine};
use crate::utils::errors::PipelineError;
use crate::utils::retry_policy::RetryPolicy;
use std::sync::Arc;
use tracing::{error, info, warn};
use url::Url;

/// 两级获取器
///
/// 优先使用渲染引擎；渲染被禁用或没有结果时退回纯 HTTP，HTTP 路径按
/// 重试策略有限次重试。两条路径都失败才返回 `NoContent`。
pub struct Fetcher {
    rendered: Option<Arc<dyn ScraperEngine>>,
    http: Arc<dyn ScraperEngine>,
    retry_policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(
        rendered: Option<Arc<dyn ScraperEngine>>,
        http: Arc<dyn ScraperEngine>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            rendered,
            http,
            retry_policy,
        }
    }

    /// 根据配置组装引擎；`browser.enabled` 为假时不创建渲染引擎
    pub fn from_settings(settings: &Settings) -> Result<Self, EngineError> {
        let http: Arc<dyn ScraperEngine> =
            Arc::new(ReqwestEngine::new(&settings.scraper, &settings.http)?);
        let rendered = settings.browser.enabled.then(|| {
            Arc::new(BrowserEngine::new(&settings.scraper, &settings.browser))
                as Arc<dyn ScraperEngine>
        });

        Ok(Self::new(
            rendered,
            http,
            RetryPolicy::from_settings(&settings.http),
        ))
    }

    /// 渲染获取
    ///
    /// 任何失败都只记录日志并返回 `None`，由调用方降级
    pub async fn fetch_rendered(&self, url: &str) -> Option<String> {
        let engine = self.rendered.as_ref()?;

        match engine.scrape(url).await {
            Ok(html) if !html.trim().is_empty() => Some(html),
            Ok(_) => {
                warn!("Rendered fetch returned no content");
                None
            }
            Err(e) => {
                warn!("Rendering unavailable ({}): {}", engine.name(), e);
                None
            }
        }
    }

    /// HTTP 获取，失败时按指数退避重试
    ///
    /// 最多 `max_attempts` 次；最后一次失败后不再等待
    pub async fn fetch_http(&self, url: &str) -> Option<String> {
        let max_attempts = self.retry_policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            info!(
                "Fetching {} via {} (attempt {}/{})",
                url,
                self.http.name(),
                attempt + 1,
                max_attempts
            );
            let result = match self.http.scrape(url).await {
                Ok(html) if html.trim().is_empty() => Err(EngineError::EmptyContent),
                other => other,
            };

            match result {
                Ok(html) => return Some(html),
                Err(e) => {
                    warn!("Attempt {} failed: {}", attempt + 1, e);
                    if !e.is_retryable() || !self.retry_policy.should_retry(attempt) {
                        break;
                    }
                    let delay = self.retry_policy.calculate_backoff(attempt);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }

        error!("HTTP fetch failed after {} attempt(s)", attempt + 1);
        None
    }

    /// 获取页面
    ///
    /// 渲染结果一旦存在即直接使用，不与 HTTP 结果比较或合并
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, PipelineError> {
        Url::parse(url)?;

        if let Some(html) = self.fetch_rendered(url).await {
            info!("Fetched {} bytes with headless browser", html.len());
            return Ok(FetchResult::new(html, FetchMethod::Rendered));
        }

        if self.rendered.is_some() {
            info!("Falling back to plain HTTP");
        }

        if let Some(html) = self.fetch_http(url).await {
            info!("Fetched {} bytes over plain HTTP", html.len());
            return Ok(FetchResult::new(html, FetchMethod::HttpFallback));
        }

        error!("Failed to fetch page content from {}", url);
        Err(PipelineError::no_content(url))
    }
}
