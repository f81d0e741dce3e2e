// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 提取服务（extraction_service）：在文档树上运行全部提取阶段并合并为一条记录
pub mod extraction_service;
