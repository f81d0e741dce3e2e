// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HttpSettings;
use std::time::Duration;

/// 重试策略配置
///
/// 尝试次数从 0 开始计数；第 k 次尝试失败后等待 `initial_backoff * multiplier^k`，
/// 最后一次尝试失败后不再等待。不加抖动，退避序列完全确定。
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// 最大尝试次数（包含首次请求）
    pub max_attempts: u32,
    /// 初始退避时间
    pub initial_backoff: Duration,
    /// 最大退避时间
    pub max_backoff: Duration,
    /// 退避乘数
    pub backoff_multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(60),
            backoff_multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// 创建标准重试策略：3 次尝试，退避 1s、2s
    pub fn standard() -> Self {
        Self::default()
    }

    /// 根据 HTTP 配置创建重试策略
    pub fn from_settings(settings: &HttpSettings) -> Self {
        Self {
            max_attempts: settings.max_attempts,
            initial_backoff: settings.initial_backoff(),
            ..Self::default()
        }
    }

    /// 计算第 `attempt` 次尝试（从 0 开始）失败后的退避时间
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let factor = self
            .backoff_multiplier
            .checked_pow(attempt)
            .unwrap_or(u32::MAX);

        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }

    /// 第 `attempt` 次尝试失败后是否还应继续
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt + 1 < self.max_attempts
    }
}
