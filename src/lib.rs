// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排一次完整的抓取运行
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含文档树、提取阶段、记录模型和仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现无头浏览器渲染和纯 HTTP 两种获取方式以及两级获取器
pub mod engines;

/// 基础设施模块
///
/// 提供记录存储实现
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
