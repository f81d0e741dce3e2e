// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::{HttpSettings, ScraperSettings};
use crate::engines::traits::{EngineError, ScraperEngine};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use std::time::Instant;
use tracing::debug;

/// 纯 HTTP 抓取引擎
///
/// 基于reqwest实现，发送类似桌面浏览器的请求头。目标站点会拒绝或降级
/// 没有身份标识的客户端，所以请求头是必需的。
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建引擎
    ///
    /// # 参数
    ///
    /// * `scraper` - 提供 User-Agent
    /// * `http` - 提供单次请求超时
    pub fn new(scraper: &ScraperSettings, http: &HttpSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(&scraper.user_agent)
            .default_headers(browser_headers())
            .timeout(http.timeout())
            .cookie_store(true)
            .build()?;

        Ok(Self { client })
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.5"),
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    headers
}

#[async_trait]
impl ScraperEngine for ReqwestEngine {
    /// 执行一次HTTP GET
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 2xx 响应体
    /// * `Err(EngineError)` - 传输失败或非 2xx 状态
    async fn scrape(&self, url: &str) -> Result<String, EngineError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HttpStatus(status.as_u16()));
        }

        let content = response.text().await?;
        debug!(
            "Fetched {} bytes from {} in {}ms",
            content.len(),
            url,
            start.elapsed().as_millis()
        );
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
