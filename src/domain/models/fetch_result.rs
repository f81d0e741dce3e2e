// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 记录中时间戳的格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 获取方式
///
/// 序列化为记录中 `scraping_method` 字段的字面字符串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchMethod {
    /// 无头浏览器渲染后的 DOM
    #[serde(rename = "Headless browser")]
    Rendered,
    /// 纯 HTTP GET 返回的服务端标记
    #[serde(rename = "HTTP only")]
    HttpFallback,
}

impl FetchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchMethod::Rendered => "Headless browser",
            FetchMethod::HttpFallback => "HTTP only",
        }
    }
}

impl fmt::Display for FetchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 获取结果
///
/// 每次运行产生一个，创建后不可变。HTML 保证非空。
#[derive(Debug, Clone)]
pub struct FetchResult {
    html: String,
    method: FetchMethod,
    fetched_at: DateTime<Local>,
}

impl FetchResult {
    /// 以当前时间创建获取结果
    pub fn new(html: String, method: FetchMethod) -> Self {
        Self {
            html,
            method,
            fetched_at: Local::now(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn method(&self) -> FetchMethod {
        self.method
    }

    pub fn fetched_at(&self) -> DateTime<Local> {
        self.fetched_at
    }

    /// 按 `YYYY-MM-DD HH:MM:SS` 格式化的抓取时间
    pub fn timestamp(&self) -> String {
        self.fetched_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_literals() {
        assert_eq!(
            serde_json::to_string(&FetchMethod::Rendered).unwrap(),
            "\"Headless browser\""
        );
        assert_eq!(
            serde_json::to_string(&FetchMethod::HttpFallback).unwrap(),
            "\"HTTP only\""
        );
        assert_eq!(FetchMethod::HttpFallback.to_string(), "HTTP only");
    }

    #[test]
    fn test_timestamp_format() {
        let result = FetchResult::new("<html></html>".to_string(), FetchMethod::Rendered);
        let ts = result.timestamp();

        // YYYY-MM-DD HH:MM:SS
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
