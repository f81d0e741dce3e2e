// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未设置 `RUST_LOG` 时使用的过滤规则
pub const DEFAULT_FILTER: &str = "info,specscrape=debug";

/// 初始化全局日志订阅者
///
/// `json` 为真时每行输出一个 JSON 对象（包含当前 span 字段），否则输出可读文本
pub fn init_telemetry(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
