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

use async_trait::async_trait;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败（连接、超时、读取响应体）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 状态码
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),
    /// 浏览器启动、连接或导航失败
    #[error("Browser error: {0}")]
    Browser(String),
    /// 响应为空或只有空白
    #[error("Empty content")]
    EmptyContent,
    /// 超时
    #[error("Timeout")]
    Timeout,
}

impl EngineError {
    /// 判断错误是否可重试
    ///
    /// 传输失败、非 2xx 状态和超时视为瞬时错误；空响应和浏览器错误不重试
    pub fn is_retryable(&self) -> bool {
        match self {
            EngineError::RequestFailed(_) => true,
            EngineError::HttpStatus(_) => true,
            EngineError::Timeout => true,
            EngineError::Browser(_) | EngineError::EmptyContent => false,
        }
    }
}

/// 抓取引擎特质
///
/// 每次调用是一次独立的获取尝试，重试和降级由调用方决定
#[async_trait]
pub trait ScraperEngine: Send + Sync {
    /// 获取 `url` 的 HTML
    async fn scrape(&self, url: &str) -> Result<String, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
