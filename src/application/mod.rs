// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排获取引擎、提取器和存储，完成一次完整的抓取运行
pub mod usecases;
