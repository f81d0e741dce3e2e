// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理抓取器的配置设置，包括目标页面、浏览器渲染、HTTP 回退和存储配置
pub mod settings;
