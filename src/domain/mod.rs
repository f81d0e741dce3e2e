// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 文档树（document）：解析后的只读 HTML 文档及文本辅助函数
/// - 领域模型（models）：获取结果与提取记录
/// - 提取阶段（passes）：各类别的提取函数
/// - 仓库接口（repositories）：记录持久化抽象接口
/// - 服务（services）：合并各阶段输出的提取器
///
/// 领域层不依赖于任何获取引擎或存储实现。
pub mod document;
pub mod models;
pub mod passes;
pub mod repositories;
pub mod services;
