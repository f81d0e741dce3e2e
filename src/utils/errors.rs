// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 抓取流水线错误类型
///
/// 获取阶段的瞬时错误在 Fetcher 内部重试或降级，只有终止性错误会传播到这里
#[derive(Error, Debug)]
pub enum PipelineError {
    /// 两种获取方式都没有得到内容
    #[error("未获取到内容: {url}")]
    NoContent { url: String },

    #[error("无效的URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PipelineError {
    pub fn no_content(url: &str) -> Self {
        PipelineError::NoContent {
            url: url.to_string(),
        }
    }
}
