// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了抓取流水线的核心数据结构，包括：
/// - 获取结果（fetch_result）：一次页面获取的 HTML 及其来源
/// - 提取记录（record）：按类别组织的结构化提取结果
pub mod fetch_result;
pub mod record;
