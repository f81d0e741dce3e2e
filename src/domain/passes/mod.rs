// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 提取阶段模块
///
/// 每个阶段是 `&DocumentTree -> 类别负载` 的纯函数，只读文档树，
/// 彼此不读取对方的输出。不同阶段的结果可能重叠，不做去重。
///
/// - 选择器扫描（sections）：标签页、分区、可展开元素
/// - 标签分派（interactive）：按钮、链接、表单
/// - 规格（specifications）：表格、定义列表、结构化列表、正则匹配
/// - 关键词上下文（keywords）：各关键词类别与型号对比
/// - 页面内容（content）：主体内容、元数据和资源引用
pub mod content;
pub mod interactive;
pub mod keywords;
pub mod sections;
pub mod specifications;
pub mod vocabulary;
